use anyhow::Result;
use spamdetector_rs::api::handlers::AppState;
use spamdetector_rs::api::ApiServer;
use spamdetector_rs::classifier::SpamModel;
use spamdetector_rs::config::{Config, LoggingConfig};
use spamdetector_rs::corpus::DirectorySource;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let have_config_file = std::path::Path::new("config.toml").exists();
    let config = if have_config_file {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    init_logging(&config.logging);

    info!("Starting spamdetector-rs");
    if !have_config_file {
        info!("No config file found, using defaults");
    }
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Corpus directory: {}", config.corpus.data_dir);
    info!("  Ham training folders: {:?}", config.corpus.train_ham);
    info!("  Spam training folder: {}", config.corpus.train_spam);

    // Train the model once, before serving
    let source = DirectorySource::new(config.corpus.data_dir.clone());
    let model = SpamModel::train(&source, &config.corpus.train_ham, &config.corpus.train_spam)?;

    let state = AppState {
        model,
        source,
        test_ham_folder: config.corpus.test_ham.clone(),
        test_spam_folder: config.corpus.test_spam.clone(),
    };

    let server = ApiServer::new(
        state,
        config.server.listen_addr.clone(),
        config.server.cors_origin.clone(),
    )?;
    server.run().await?;

    Ok(())
}
