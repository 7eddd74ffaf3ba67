use crate::models::{BillingType, Category, Project, Status};

/// One filter pass over the catalog. An unset facet matches everything,
/// an empty search text matches everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub billing_type: Option<BillingType>,
}

impl FilterCriteria {
    /// A record matches when every facet agrees. The search text is
    /// compared case-insensitively against both the project name and
    /// the client name.
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search_text.to_lowercase();
        let text_ok = needle.is_empty()
            || project.name.to_lowercase().contains(&needle)
            || project.client.to_lowercase().contains(&needle);

        text_ok
            && self.category.map_or(true, |c| c == project.category)
            && self.status.map_or(true, |s| s == project.status)
            && self.billing_type.map_or(true, |b| b == project.billing_type)
    }
}

/// Narrow `records` to the subset matching `criteria`, keeping the
/// original order. Zero matches is a normal outcome, not an error.
pub fn filter(records: &[Project], criteria: &FilterCriteria) -> Vec<Project> {
    records
        .iter()
        .filter(|project| criteria.matches(project))
        .cloned()
        .collect()
}
