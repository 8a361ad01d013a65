use crate::domain::model::ProjectCatalog;
use crate::utils::error::Result;

/// Where a catalog comes from: a builtin constant or a file on disk.
pub trait CatalogSource {
    /// Human-readable description of the source, for logging.
    fn describe(&self) -> String;

    fn load(&self) -> Result<ProjectCatalog>;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
