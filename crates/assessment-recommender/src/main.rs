mod config;
mod error;
mod http;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use http::HttpState;
use recommender_core::recommender::Recommender;
use server::AssessmentServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting assessment-recommender");

    let config = Config::from_env()?;
    info!(
        catalogue_path = ?config.catalogue_path,
        default_top_k = config.default_top_k,
        http = config.http_listen_addr.is_some(),
        "configuration loaded"
    );

    let catalogue = Arc::new(config.load_catalogue()?);
    info!(entries = catalogue.len(), "catalogue loaded");

    let recommender = Arc::new(Recommender::new(catalogue));

    if let Some(addr) = config.http_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "HTTP API ready");
        http::serve(listener, HttpState::new(recommender, config.default_top_k)).await?;
        info!("HTTP API shut down");
        return Ok(());
    }

    let server = AssessmentServer::new(recommender, config.default_top_k);

    if let Some(addr) = config.mcp_tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    }

    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;
    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
