use folio_catalog::config::catalog_source;
use folio_catalog::{CatalogError, TomlSource};
use folio_catalog::domain::ports::CatalogSource;
use tempfile::TempDir;

const CATALOG_TOML: &str = r#"
[catalog]
name = "portfolio"
description = "Projects shown on the landing page"

[[project]]
title = "AlgebraSource.com"
description = "An Algebra resource website built with NextJS and TailwindCSS."
img_src = "/static/images/algebra-source-project.png"
href = "https://algebrasource.com"

[[project]]
title = "React Shopify Storefront"
description = "A headless e-commerce storefront."
img_src = "https://cdn.example.com/storefront.png"
href = "https://github.com/tomswokowski/react-shopify-storefront"
"#;

#[test]
fn test_load_catalog_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portfolio.toml");
    std::fs::write(&path, CATALOG_TOML).unwrap();

    let catalog = TomlSource::new(&path).load().unwrap();

    assert_eq!(catalog.name(), "portfolio");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].title, "AlgebraSource.com");
    assert_eq!(catalog.records()[1].img_src, "https://cdn.example.com/storefront.png");
}

#[test]
fn test_missing_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");

    let err = TomlSource::new(&path).load().unwrap_err();
    assert!(matches!(err, CatalogError::ConfigError { .. }));
}

#[test]
fn test_catalog_source_picks_toml_for_toml_paths() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portfolio.toml");
    std::fs::write(&path, CATALOG_TOML).unwrap();

    let source = catalog_source(path.to_str().unwrap());
    let catalog = source.load().unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_record_with_empty_title_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(
        &path,
        r#"
[catalog]
name = "bad"

[[project]]
title = ""
description = "d1"
img_src = "/a.png"
href = "https://a.com"
"#,
    )
    .unwrap();

    assert!(TomlSource::new(&path).load().is_err());
}
