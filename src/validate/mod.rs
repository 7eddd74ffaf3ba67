use std::fmt;

use chrono::NaiveDate;

use crate::models::{BillingType, Category, ProjectDraft, Status};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fields of the project creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Client,
    Category,
    Status,
    BillingType,
    Value,
    StartDate,
    EndDate,
    Team,
}

impl ProjectField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::Client => "client",
            ProjectField::Category => "category",
            ProjectField::Status => "status",
            ProjectField::BillingType => "billing_type",
            ProjectField::Value => "value",
            ProjectField::StartDate => "start_date",
            ProjectField::EndDate => "end_date",
            ProjectField::Team => "team",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Some(ProjectField::Name),
            "client" => Some(ProjectField::Client),
            "category" => Some(ProjectField::Category),
            "status" => Some(ProjectField::Status),
            "billing_type" | "type" => Some(ProjectField::BillingType),
            "value" => Some(ProjectField::Value),
            "start_date" | "start" => Some(ProjectField::StartDate),
            "end_date" | "end" => Some(ProjectField::EndDate),
            "team" => Some(ProjectField::Team),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected field with a human-readable reason, routed back to the
/// matching input by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: ProjectField,
    pub reason: String,
}

impl FieldError {
    fn new(field: ProjectField, reason: &str) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Raw form input, mirroring what the form controls hold: text for every
/// scalar field (dates in ISO form, the value as numeric-looking text).
/// Nothing here is trusted until `validate` has run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub billing_type: Option<String>,
    pub value: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub team: Vec<String>,
}

/// Check every field independently and report all violations at once so
/// the form can highlight each offending input in a single pass. On
/// success the returned draft carries fully typed values; the caller is
/// responsible for assigning an id.
pub fn validate(input: &ProjectInput) -> Result<ProjectDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = checked_text(input.name.as_deref(), ProjectField::Name, &mut errors);
    let client = checked_text(input.client.as_deref(), ProjectField::Client, &mut errors);

    let category = match input.category.as_deref().and_then(Category::parse) {
        Some(category) => Some(category),
        None => {
            errors.push(FieldError::new(ProjectField::Category, "required"));
            None
        }
    };

    let status = match input.status.as_deref().and_then(Status::parse) {
        Some(status) => Some(status),
        None => {
            errors.push(FieldError::new(ProjectField::Status, "required"));
            None
        }
    };

    let billing_type = match input.billing_type.as_deref().and_then(BillingType::parse) {
        Some(billing_type) => Some(billing_type),
        None => {
            errors.push(FieldError::new(ProjectField::BillingType, "required"));
            None
        }
    };

    // Coerce numeric-looking text; anything unparseable fails the same
    // way a non-positive amount does.
    let value = match input
        .value
        .as_deref()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
    {
        Some(value) if value > 0.0 => Some(value),
        _ => {
            errors.push(FieldError::new(ProjectField::Value, "must be positive"));
            None
        }
    };

    let start_date = match input
        .start_date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
    {
        Some(date) => Some(date),
        None => {
            errors.push(FieldError::new(ProjectField::StartDate, "required"));
            None
        }
    };

    // The end date stays optional; a blank input counts as absent. Whether
    // it falls before the start date is not checked.
    let end_date = match input.end_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(ProjectField::EndDate, "invalid date"));
                None
            }
        },
    };

    let team = input.team.clone();

    match (name, client, category, status, billing_type, value, start_date) {
        (
            Some(name),
            Some(client),
            Some(category),
            Some(status),
            Some(billing_type),
            Some(value),
            Some(start_date),
        ) if errors.is_empty() => Ok(ProjectDraft {
            name,
            client,
            category,
            status,
            billing_type,
            value,
            start_date,
            end_date,
            team,
        }),
        _ => Err(errors),
    }
}

fn checked_text(
    raw: Option<&str>,
    field: ProjectField,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.chars().count() >= 2 {
        Some(trimmed.to_string())
    } else {
        errors.push(FieldError::new(field, "too short"));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in [
            ProjectField::Name,
            ProjectField::Client,
            ProjectField::Category,
            ProjectField::Status,
            ProjectField::BillingType,
            ProjectField::Value,
            ProjectField::StartDate,
            ProjectField::EndDate,
            ProjectField::Team,
        ] {
            assert_eq!(ProjectField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn text_fields_are_trimmed_before_the_length_check() {
        let input = ProjectInput {
            name: Some("  A  ".to_string()),
            ..ProjectInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert!(errors.contains(&FieldError::new(ProjectField::Name, "too short")));
    }

    #[test]
    fn zero_value_is_rejected() {
        let input = ProjectInput {
            value: Some("0".to_string()),
            ..ProjectInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert!(errors.contains(&FieldError::new(ProjectField::Value, "must be positive")));
    }
}
