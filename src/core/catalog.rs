use std::sync::OnceLock;

use crate::domain::model::{ProjectCatalog, ProjectRecord};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};

/// The primary portfolio catalog: 2 records, definition order is display
/// order.
pub fn main_catalog() -> &'static ProjectCatalog {
    static CATALOG: OnceLock<ProjectCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        ProjectCatalog::new(
            "main",
            vec![
                ProjectRecord::new(
                    "AlgebraSource.com",
                    "An Algebra resource website built with NextJS and TailwindCSS.",
                    "/static/images/algebra-source-project.png",
                    "https://algebrasource.com",
                ),
                ProjectRecord::new(
                    "Shopify App Review Scraper",
                    "A simple Java project using Spring Boot that successfully scraped all \
                     650,000+ reviews from over 7,000 apps from Shopify's App Store and stored \
                     them in an AWS RDS PostgreSQL database.",
                    "/static/images/shopify-app-review-scraper-project.png",
                    "https://github.com/tomswokowski/shopify-app-review-scraper",
                ),
            ],
        )
    })
}

/// The storefront deployment variant: an independent single-record catalog,
/// not a subset of the main one.
pub fn storefront_catalog() -> &'static ProjectCatalog {
    static CATALOG: OnceLock<ProjectCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        ProjectCatalog::new(
            "storefront",
            vec![ProjectRecord::new(
                "React Shopify Storefront",
                "A headless e-commerce storefront built with React and the Shopify \
                 Storefront API.",
                "/static/images/react-shopify-storefront-project.png",
                "https://github.com/tomswokowski/react-shopify-storefront",
            )],
        )
    })
}

pub fn builtin(name: &str) -> Option<&'static ProjectCatalog> {
    match name {
        "main" => Some(main_catalog()),
        "storefront" => Some(storefront_catalog()),
        _ => None,
    }
}

pub fn builtin_names() -> &'static [&'static str] {
    &["main", "storefront"]
}

#[derive(Debug, Clone)]
pub struct BuiltinSource {
    name: String,
}

impl BuiltinSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CatalogSource for BuiltinSource {
    fn describe(&self) -> String {
        format!("builtin catalog '{}'", self.name)
    }

    fn load(&self) -> Result<ProjectCatalog> {
        builtin(&self.name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCatalogError {
                name: self.name.clone(),
            })
    }
}
