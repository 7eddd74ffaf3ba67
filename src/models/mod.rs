mod project;

pub use project::BillingType;
pub use project::Category;
pub use project::Project;
pub use project::ProjectDraft;
pub use project::Status;
