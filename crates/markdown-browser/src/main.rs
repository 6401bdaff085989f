use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use markdown_browser::config::Config;
use markdown_browser::AppState;

#[derive(Parser, Debug)]
#[command(name = "markdown-browser")]
#[command(about = "Browse the markdown files of a directory")]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 3000, env = "MARKDOWN_BROWSER_PORT")]
    port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "MARKDOWN_BROWSER_BIND")]
    bind: String,

    /// Directory of markdown files, relative to the working directory
    #[arg(long, default_value = "markdown", env = "MARKDOWN_BROWSER_DIR")]
    markdown_dir: PathBuf,
}

const DEFAULT_LOG_FILTER: &str = "markdown_browser=info,markdown_fs=info,tower_http=debug";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::resolve(&cli.markdown_dir)?;
    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;
    let app = markdown_browser::router(Arc::new(AppState::new(&config)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Listening on http://{} (markdown dir: {:?})",
        listener.local_addr()?,
        config.markdown_dir
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn wait_for_shutdown() {
    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!("Ctrl+C handler failed: {}", e);
            }
        }
        _ = sigterm => {}
    }

    tracing::info!("Stopping, waiting for in-flight requests");
}
