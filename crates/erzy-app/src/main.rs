mod cli;

use std::sync::Arc;

use erzy_common::{ConfigError, ErzyError};
use erzy_config::ErzyConfig;
use erzy_platform::storage::{JsonFileStore, KeyValueStore};
use tracing_subscriber::EnvFilter;

use erzy_app::{replay, HostMount, OverlayShell};

fn load_config(args: &cli::Args) -> Result<ErzyConfig, ConfigError> {
    match args.config {
        Some(ref path) => {
            let config = erzy_config::toml_loader::load_from_path(path)?;
            erzy_config::validation::validate(&config)?;
            Ok(config)
        }
        None => erzy_config::load_config(),
    }
}

async fn run(args: cli::Args, config: ErzyConfig) -> Result<(), ErzyError> {
    let script = replay::load_script(&args.script)?;

    let store_path = match args.store.clone().or_else(|| config.storage.path.clone()) {
        Some(path) => path,
        None => erzy_platform::paths::storage_file()?,
    };
    tracing::info!("Storage: {}", store_path.display());
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(store_path));

    let mut mount = HostMount::new();
    let shell = mount.mount(|| OverlayShell::new(config, store, args.viewport));

    let client = shell
        .gemini_client(args.api_key.as_deref())
        .map_err(|e| ErzyError::Ai(e.to_string()))?;

    let snapshot = replay::run(shell, &script, &client).await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config comes first: it carries the default log level.
    let loaded = load_config(&args);
    let log_level = match loaded {
        Ok(ref config) => config.logging.level.as_directive(),
        Err(_) => "erzy=info",
    };

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "erzy=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Erzy v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ErzyConfig::default()
    });

    if let Err(e) = erzy_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    if let Err(e) = run(args, config).await {
        tracing::error!("Replay failed: {e}");
        eprintln!("erzy: {e}");
        std::process::exit(1);
    }
}
