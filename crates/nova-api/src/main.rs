//! Nova REST API entry point.
//!
//! Binary name: `nova`
//!
//! Loads `.env`, parses CLI arguments, initializes tracing, then either
//! prints shell completions or starts the API server.

mod cli;
mod config;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use nova_observe::tracing_setup::{LogFormat, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before clap so env fallbacks see .env values.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "nova", &mut std::io::stdout());
        return Ok(());
    }

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(cli.log_directive(), cli.forced_directive(), format, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = match cli.command {
        Commands::Serve(config) => serve(config).await,
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::init(&config).await?;

    let providers = provider_summary(&config);
    let router = http::router::build_router(state, &config.cors_origin, &config.web_dir)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;

    println!();
    println!(
        "  {} Nova API listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {} {}", console::style("AI providers:").dim(), providers);
    println!("  {}", console::style("Press Ctrl+C to stop").dim());
    println!();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn provider_summary(config: &ServerConfig) -> String {
    let configured = config.provider_settings().configured();
    if configured.is_empty() {
        "none (local responses)".to_string()
    } else {
        configured
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
