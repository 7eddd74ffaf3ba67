use tracing::debug;

use crate::models::ProjectDraft;
use crate::validate::{validate, FieldError, ProjectField, ProjectInput};

/// Where the form sits in its lifecycle. Submission itself is synchronous:
/// `submit` runs validation and lands on either `Accepted` or `Rejected`,
/// and any later edit returns the form to `Editing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Accepted,
    Rejected,
}

/// State of the project creation form: the raw field values as entered,
/// plus the errors from the most recent submission attempt.
#[derive(Debug, Default)]
pub struct ProjectForm {
    input: ProjectInput,
    errors: Vec<FieldError>,
    phase: FormPhase,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw text for one field. A blank value clears the field;
    /// the team field is entered as a comma-separated list.
    pub fn set(&mut self, field: ProjectField, raw: &str) {
        let value = raw.trim();
        let slot = match field {
            ProjectField::Name => &mut self.input.name,
            ProjectField::Client => &mut self.input.client,
            ProjectField::Category => &mut self.input.category,
            ProjectField::Status => &mut self.input.status,
            ProjectField::BillingType => &mut self.input.billing_type,
            ProjectField::Value => &mut self.input.value,
            ProjectField::StartDate => &mut self.input.start_date,
            ProjectField::EndDate => &mut self.input.end_date,
            ProjectField::Team => {
                self.input.team = value
                    .split(',')
                    .map(str::trim)
                    .filter(|member| !member.is_empty())
                    .map(str::to_string)
                    .collect();
                self.phase = FormPhase::Editing;
                return;
            }
        };

        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        self.phase = FormPhase::Editing;
    }

    /// Run exactly one validation pass over the current input. An accepted
    /// submission hands the draft to the caller and resets the form to its
    /// defaults; a rejected one keeps every entered value and attaches the
    /// field errors, so nothing is lost on a failed attempt.
    pub fn submit(&mut self) -> Option<ProjectDraft> {
        match validate(&self.input) {
            Ok(draft) => {
                debug!(name = %draft.name, "form accepted");
                self.input = ProjectInput::default();
                self.errors.clear();
                self.phase = FormPhase::Accepted;
                Some(draft)
            }
            Err(errors) => {
                debug!(errors = errors.len(), "form rejected");
                self.errors = errors;
                self.phase = FormPhase::Rejected;
                None
            }
        }
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_splits_team_on_commas() {
        let mut form = ProjectForm::new();
        form.set(ProjectField::Team, "Ana, Bruno ,  , Carla");
        assert_eq!(form.input().team, vec!["Ana", "Bruno", "Carla"]);
    }

    #[test]
    fn blank_set_clears_a_field() {
        let mut form = ProjectForm::new();
        form.set(ProjectField::Name, "Site Revamp");
        form.set(ProjectField::Name, "   ");
        assert_eq!(form.input().name, None);
    }

    #[test]
    fn editing_after_a_rejection_returns_to_editing_phase() {
        let mut form = ProjectForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.phase(), FormPhase::Rejected);

        form.set(ProjectField::Name, "Site Revamp");
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
