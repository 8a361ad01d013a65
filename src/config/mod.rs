#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::catalog::BuiltinSource;
use crate::domain::ports::CatalogSource;
use crate::config::toml_config::TomlSource;

/// Resolves a `--catalog` value to a source: a `.toml` path loads from disk,
/// anything else is treated as a builtin catalog name.
pub fn catalog_source(name_or_path: &str) -> Box<dyn CatalogSource> {
    if name_or_path.ends_with(".toml") {
        Box::new(TomlSource::new(name_or_path))
    } else {
        Box::new(BuiltinSource::new(name_or_path))
    }
}
