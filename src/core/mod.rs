pub mod catalog;
pub mod export;

pub use crate::domain::model::{ProjectCatalog, ProjectRecord};
pub use crate::domain::ports::{CatalogSource, Storage};
pub use crate::utils::error::Result;
