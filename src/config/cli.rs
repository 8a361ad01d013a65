use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio")]
#[command(about = "Inspect and export portfolio project catalogs")]
pub struct CliConfig {
    #[arg(long, default_value = "main", help = "Builtin catalog name or path to a .toml file")]
    pub catalog: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Print the catalog to stdout instead of exporting")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog", &self.catalog)?;
        validate_path("output_path", &self.output_path)?;
        for format in &self.formats {
            validate_non_empty_string("formats", format)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            catalog: "main".to_string(),
            output_path: "./output".to_string(),
            formats: vec!["json".to_string()],
            list: false,
            verbose: false,
        }
    }

    #[test]
    fn test_cli_config_validation() {
        assert!(base_config().validate().is_ok());

        let mut empty_catalog = base_config();
        empty_catalog.catalog = "  ".to_string();
        assert!(empty_catalog.validate().is_err());

        let mut empty_output = base_config();
        empty_output.output_path = String::new();
        assert!(empty_output.validate().is_err());
    }
}
