//! SceneCraft backend entry point

use clap::{Arg, Command};
use scenecraft_core::Config;
use scenecraft_server::{routes, AppState};
use scenecraft_upstream::OpenRouterClient;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("scenecraft-server")
        .version(scenecraft_core::VERSION)
        .about("SceneCraft backend - scene analysis behind an admission pipeline")
        .arg(
            Arg::new("addr")
                .long("addr")
                .default_value("127.0.0.1:8080")
                .help("Socket address to listen on"),
        )
        .arg(
            Arg::new("static-dir")
                .long("static-dir")
                .default_value("static")
                .help("Directory holding the bundled frontend"),
        );

    let matches = cli.get_matches();
    let addr: SocketAddr = matches
        .get_one::<String>("addr")
        .expect("addr has a default")
        .parse()?;
    let static_dir = PathBuf::from(
        matches
            .get_one::<String>("static-dir")
            .expect("static-dir has a default"),
    );

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!(
            "OPENROUTER_API_KEY is not set; scene endpoints will fail until it is configured"
        );
    }
    if !static_dir.is_dir() {
        tracing::warn!(dir = %static_dir.display(), "static directory not found; asset requests will 404");
    }

    let model = OpenRouterClient::new(&config)?;
    tracing::info!(model = model.model(), "upstream collaborator configured");

    let state = Arc::new(AppState::new(config, Arc::new(model)));
    tracing::info!(%addr, "scenecraft backend listening");

    warp::serve(routes(state, static_dir)).run(addr).await;
    Ok(())
}
