pub mod catalog;
pub mod config;
pub mod form;
pub mod models;
pub mod validate;

pub use catalog::filter::{filter, FilterCriteria};
pub use catalog::{Catalog, CatalogError};
pub use form::{FormPhase, ProjectForm};
pub use models::{BillingType, Category, Project, ProjectDraft, Status};
pub use validate::{validate, FieldError, ProjectField, ProjectInput};
