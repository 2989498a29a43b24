//! syllabus server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), connects to
//! Elasticsearch, provisions the subject index, and serves the CRUD API.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use syllabus_server::ServerConfig;
use syllabus_store_es::EsStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Subject index HTTP server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let store = EsStore::new(&server_cfg.elasticsearch)
    .context("failed to create elasticsearch client")?;

  syllabus_server::provision(&store, server_cfg.elasticsearch.provision).await;

  let app = syllabus_server::app(store);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
