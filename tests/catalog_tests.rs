use folio_catalog::{builtin, main_catalog, storefront_catalog, ProjectCatalog, ProjectRecord};

#[test]
fn test_main_catalog_matches_source_definition() {
    let catalog = main_catalog();

    assert_eq!(catalog.name(), "main");
    assert_eq!(catalog.len(), 2);

    let first = &catalog.records()[0];
    assert_eq!(first.title, "AlgebraSource.com");
    assert_eq!(first.img_src, "/static/images/algebra-source-project.png");
    assert_eq!(first.href, "https://algebrasource.com");

    let second = &catalog.records()[1];
    assert_eq!(second.title, "Shopify App Review Scraper");
    assert!(second.description.contains("650,000+"));
}

#[test]
fn test_every_record_has_all_fields_populated() {
    for name in ["main", "storefront"] {
        let catalog = builtin(name).unwrap();
        for record in catalog {
            assert!(!record.title.trim().is_empty());
            assert!(!record.description.trim().is_empty());
            assert!(!record.img_src.trim().is_empty());
            assert!(!record.href.trim().is_empty());
        }
    }
}

#[test]
fn test_repeated_reads_are_identical() {
    let first: Vec<ProjectRecord> = main_catalog().records().to_vec();
    let second: Vec<ProjectRecord> = main_catalog().records().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_catalogs_are_independent_not_merged() {
    assert_eq!(main_catalog().len(), 2);
    assert_eq!(storefront_catalog().len(), 1);

    let main_titles: Vec<&str> = main_catalog().iter().map(|r| r.title.as_str()).collect();
    let storefront_title = &storefront_catalog().records()[0].title;
    assert!(!main_titles.contains(&storefront_title.as_str()));
}

#[test]
fn test_copy_out_does_not_corrupt_shared_state() {
    let copy: ProjectCatalog = main_catalog().clone();
    drop(copy);

    let mut records = main_catalog().records().to_vec();
    records.clear();
    assert!(records.is_empty());
    assert_eq!(main_catalog().len(), 2);
}

#[test]
fn test_concurrent_readers_see_the_same_catalog() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let catalog = main_catalog();
                (catalog.len(), catalog.records()[0].title.clone())
            })
        })
        .collect();

    for handle in handles {
        let (len, title) = handle.join().unwrap();
        assert_eq!(len, 2);
        assert_eq!(title, "AlgebraSource.com");
    }
}
