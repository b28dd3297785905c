//! `serve` command: run the shell server until shutdown

use anyhow::{Context, Result};
use std::net::IpAddr;
use std::path::PathBuf;

use vitrine::server::ShellServer;

/// Start the shell server with graceful shutdown on Ctrl-C
pub async fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = super::load_config(config_path)?;

    if let Some(host) = host {
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("invalid host address: {host}"))?;
        config.server.bind_address.set_ip(ip);
    }

    if let Some(port) = port {
        config.server.bind_address.set_port(port);
    }

    let server = ShellServer::new(config)?;
    println!("{}", server.info().display());

    server.start_with_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
