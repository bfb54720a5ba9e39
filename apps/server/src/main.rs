use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clipscout_core::SimulatedProvider;

mod routes;

#[derive(Parser)]
#[command(name = "clipscout-server")]
#[command(about = "Serve the clipscout UI and the viral clip analysis API")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8787)]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Directory with the static UI
    #[arg(long, default_value = "ui")]
    ui_dir: String,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,clipscout_core=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let app = routes::router(Arc::new(SimulatedProvider), &cli.ui_dir);
    let addr = SocketAddr::from((cli.bind, cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("clipscout server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
