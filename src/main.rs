use clap::Parser;
use graphx_api::{GraphService, RestApi};
use graphx_storage::GraphStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// A graph-theory engine behind a REST API
#[derive(Parser, Debug)]
#[command(name = "graphx")]
#[command(about = "Graph algorithms over a REST API", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    http_port: u16,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    info!("Starting graphx v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API: {}:{}", args.host, args.http_port);

    let service = Arc::new(GraphService::new(Arc::new(GraphStore::new())));
    info!("Graph store initialized");

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(service, &host, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("graphx started successfully");
    info!("HTTP API: http://{}:{}/api/v1/graph", args.host, args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
