use clap::Parser;
use folio_catalog::config::catalog_source;
use folio_catalog::utils::{logger, validation::Validate};
use folio_catalog::{CliConfig, ExportEngine, LocalStorage, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting folio CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = catalog_source(&config.catalog);
    tracing::info!("Loading {}", source.describe());

    let catalog = match source.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", source.describe(), e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if config.list {
        println!("{} ({} records)", catalog.name(), catalog.len());
        for record in &catalog {
            println!();
            println!("{}", record.title);
            println!("  {}", record.description);
            println!("  image: {}", record.img_src);
            println!("  link:  {}", record.href);
        }
        return Ok(());
    }

    let formats = config
        .formats
        .iter()
        .map(|f| f.parse::<OutputFormat>())
        .collect::<folio_catalog::Result<Vec<_>>>()?;

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = ExportEngine::new(storage);

    match engine.run(&catalog, &formats) {
        Ok(files) => {
            tracing::info!("Export completed: {} file(s)", files.len());
            println!(
                "Exported {} file(s) to {}: {}",
                files.len(),
                config.output_path,
                files.join(", ")
            );
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
