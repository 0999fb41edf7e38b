pub use self::catalog::Catalog;
pub use self::project::{Project, ProjectId, DEFAULT_DESCRIPTION, DEFAULT_IMAGE};

mod catalog;
mod project;
