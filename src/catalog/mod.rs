pub mod filter;

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::models::{Project, ProjectDraft};
use filter::FilterCriteria;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate project id: {0}")]
    DuplicateId(i32),
}

/// In-memory, append-only registry of projects. The catalog owns id
/// assignment; records enter only as drafts that already passed
/// validation and are never mutated or removed afterwards.
#[derive(Debug)]
pub struct Catalog {
    projects: Vec<Project>,
    next_id: i32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a catalog from an arbitrary initial record set. Ids must be
    /// unique; new appends continue above the highest seeded id.
    pub fn from_records(records: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &records {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }

        let next_id = records.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        debug!(count = records.len(), next_id, "catalog initialized");

        Ok(Self {
            projects: records,
            next_id,
        })
    }

    /// Append a validated draft, assigning it the next free id.
    pub fn append(&mut self, draft: ProjectDraft) -> i32 {
        let id = self.next_id;
        self.next_id += 1;

        let project = draft.into_project(id);
        debug!(id, name = %project.name, "project appended");
        self.projects.push(project);

        id
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: i32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Project> {
        filter::filter(&self.projects, criteria)
    }
}
