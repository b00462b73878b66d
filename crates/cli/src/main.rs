mod display;
mod menu;
mod prompt;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompt::{LinePrompter, TermPrompter};

use literalura_core::{
    load_config, load_default_config, validate_config, CatalogClient, GutendexClient,
    LibraryService, LibraryStore, Resolver, SqliteLibrary,
};

/// Default configuration file, looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "literalura.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr so the menu on stdout stays readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,literalura=info,literalura_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = std::env::var("LITERALURA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No config file at {:?}, using defaults", config_path);
        load_default_config().context("Failed to load default config")?
    };

    validate_config(&config).context("Configuration validation failed")?;

    info!("Catalog: {}", config.catalog.base_url);
    info!("Database path: {:?}", config.database.path);

    let catalog: Arc<dyn CatalogClient> = Arc::new(
        GutendexClient::new(&config.catalog).context("Failed to create catalog client")?,
    );

    let store: Arc<dyn LibraryStore> = Arc::new(
        SqliteLibrary::new(&config.database.path).context("Failed to open library database")?,
    );
    info!("Library database initialized");

    let service = LibraryService::new(Resolver::new(catalog), store);

    let mut output = std::io::stdout();
    if std::io::stdin().is_terminal() {
        menu::run(&service, &mut TermPrompter::new(), &mut output).await?;
    } else {
        info!("stdin is not a terminal, reading answers line by line");
        let mut prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stdout());
        menu::run(&service, &mut prompter, &mut output).await?;
    }

    Ok(())
}
