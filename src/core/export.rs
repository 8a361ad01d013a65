use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::model::ProjectCatalog;
use crate::domain::ports::Storage;
use crate::utils::error::{CatalogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "projects.json",
            OutputFormat::Csv => "projects.csv",
            OutputFormat::Tsv => "projects.tsv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(CatalogError::UnsupportedFormatError {
                format: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportManifest<'a> {
    catalog: &'a str,
    record_count: usize,
    generated_at: DateTime<Utc>,
    files: &'a [String],
}

/// Writes a catalog out through a [`Storage`] backend, one file per requested
/// format, plus a manifest describing the export.
pub struct ExportEngine<S: Storage> {
    storage: S,
}

impl<S: Storage> ExportEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the names of all files written, manifest included.
    pub fn run(&self, catalog: &ProjectCatalog, formats: &[OutputFormat]) -> Result<Vec<String>> {
        tracing::info!(
            "Exporting catalog '{}' ({} records)",
            catalog.name(),
            catalog.len()
        );

        let mut written = Vec::new();
        for format in formats {
            let bytes = match format {
                OutputFormat::Json => render_json(catalog)?,
                OutputFormat::Csv => render_delimited(catalog, b',')?,
                OutputFormat::Tsv => render_delimited(catalog, b'\t')?,
            };
            self.storage.write_file(format.file_name(), &bytes)?;
            tracing::debug!("Wrote {} ({} bytes)", format.file_name(), bytes.len());
            written.push(format.file_name().to_string());
        }

        let manifest = ExportManifest {
            catalog: catalog.name(),
            record_count: catalog.len(),
            generated_at: Utc::now(),
            files: &written,
        };
        self.storage
            .write_file("manifest.json", &serde_json::to_vec_pretty(&manifest)?)?;
        written.push("manifest.json".to_string());

        Ok(written)
    }
}

// Array of records with camelCase keys, the same shape the renderer reads.
fn render_json(catalog: &ProjectCatalog) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(catalog.records())?)
}

fn render_delimited(catalog: &ProjectCatalog, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for record in catalog.records() {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| CatalogError::ProcessingError {
            message: format!("Failed to finalize delimited output: {}", e),
        })
}
