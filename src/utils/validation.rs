use crate::domain::model::{ProjectCatalog, ProjectRecord};
use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidFieldError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidFieldError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidFieldError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// An image source is either a site-relative path or an http(s) URL.
pub fn validate_image_source(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.starts_with("http://") || value.starts_with("https://") {
        return validate_url(field_name, value);
    }

    if value.contains('\0') {
        return Err(CatalogError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidFieldError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidFieldError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

impl Validate for ProjectRecord {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        validate_non_empty_string("description", &self.description)?;
        validate_image_source("imgSrc", &self.img_src)?;
        validate_url("href", &self.href)?;
        Ok(())
    }
}

impl Validate for ProjectCatalog {
    fn validate(&self) -> Result<()> {
        for record in self.iter() {
            record.validate().map_err(|e| CatalogError::ConfigError {
                message: format!("Record '{}' is invalid: {}", record.title, e),
            })?;
        }
        Ok(())
    }
}
