use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Maintenance,
    Development,
    Social,
    Performance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Maintenance,
        Category::Development,
        Category::Social,
        Category::Performance,
    ];

    /// Parse user-entered text, ignoring case and separators.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "maintenance" => Some(Category::Maintenance),
            "development" => Some(Category::Development),
            "social" => Some(Category::Social),
            "performance" => Some(Category::Performance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Maintenance => "Maintenance",
            Category::Development => "Development",
            Category::Social => "Social",
            Category::Performance => "Performance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Billed,
    AwaitingPO,
    AwaitingPayment,
    Overdue,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::InProgress,
        Status::Billed,
        Status::AwaitingPO,
        Status::AwaitingPayment,
        Status::Overdue,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "inprogress" => Some(Status::InProgress),
            "billed" => Some(Status::Billed),
            "awaitingpo" => Some(Status::AwaitingPO),
            "awaitingpayment" => Some(Status::AwaitingPayment),
            "overdue" => Some(Status::Overdue),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::InProgress => "In Progress",
            Status::Billed => "Billed",
            Status::AwaitingPO => "Awaiting PO",
            Status::AwaitingPayment => "Awaiting Payment",
            Status::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingType {
    Retainer,
    Fixed,
}

impl BillingType {
    pub const ALL: [BillingType; 2] = [BillingType::Retainer, BillingType::Fixed];

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "retainer" => Some(BillingType::Retainer),
            "fixed" => Some(BillingType::Fixed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingType::Retainer => "Retainer",
            BillingType::Fixed => "Fixed",
        }
    }
}

impl fmt::Display for BillingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub client: String,
    pub category: Category,
    pub status: Status,
    pub billing_type: BillingType,
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub team: Vec<String>,
}

/// A project that has passed validation but has no id yet.
/// Ids are handed out by the catalog on append.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub client: String,
    pub category: Category,
    pub status: Status,
    pub billing_type: BillingType,
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub team: Vec<String>,
}

impl ProjectDraft {
    pub fn into_project(self, id: i32) -> Project {
        Project {
            id,
            name: self.name,
            client: self.client,
            category: self.category,
            status: self.status,
            billing_type: self.billing_type,
            value: self.value,
            start_date: self.start_date,
            end_date: self.end_date,
            team: self.team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_separators() {
        assert_eq!(Status::parse("inprogress"), Some(Status::InProgress));
        assert_eq!(Status::parse("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("awaiting_po"), Some(Status::AwaitingPO));
        assert_eq!(Status::parse("AWAITING-PAYMENT"), Some(Status::AwaitingPayment));
        assert_eq!(Category::parse("Development"), Some(Category::Development));
        assert_eq!(BillingType::parse("FIXED"), Some(BillingType::Fixed));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Category::parse("consulting"), None);
        assert_eq!(Status::parse(""), None);
        assert_eq!(BillingType::parse("hourly"), None);
    }
}
