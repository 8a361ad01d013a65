pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, LocalStorage};

pub use crate::config::toml_config::{TomlCatalog, TomlSource};
pub use crate::core::catalog::{builtin, main_catalog, storefront_catalog, BuiltinSource};
pub use crate::core::export::{ExportEngine, OutputFormat};
pub use crate::domain::model::{ProjectCatalog, ProjectRecord};
pub use crate::utils::error::{CatalogError, Result};
