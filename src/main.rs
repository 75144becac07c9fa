use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use lineset::api;
use lineset::state::AppState;

/// Sample Text Dataset API
#[derive(Parser)]
#[command(name = "lineset", about = "Sample Text Dataset API", long_about = None)]
struct Args {
    /// Text file served by POST /load, one record per line.
    #[arg(long, default_value = "sample.txt")]
    file: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let state = Arc::new(AppState::new(args.file));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    log::info!("listening on http://{}", args.listen);

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
