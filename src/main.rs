//! AEQuery Server Entry Point

use std::sync::Arc;

use aequery::{create_combined_router, Config, RestApiConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// AEQuery: Clinical Adverse-Event Question Answering
#[derive(Parser, Debug)]
#[command(name = "aequery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a natural-language question about the adverse event data
    Ask {
        /// Question text
        question: String,
    },
    /// Show the weighted severity risk profile for a subject
    Risk {
        /// Subject identifier (USUBJID)
        subject_id: String,
    },
    /// Interactive question loop
    Repl,
    /// Run the HTTP server
    Serve {
        /// HTTP port. If not specified, uses the config file value.
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let is_serve = matches!(args.command, Some(Command::Serve { .. }));

    if !is_serve {
        // Minimal logging for CLI commands
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    match args.command {
        Some(Command::Ask { question }) => cli::run_ask(config, question, args.json).await,
        Some(Command::Risk { subject_id }) => cli::run_risk(config, subject_id, args.json).await,
        Some(Command::Repl) | None => cli::run_repl(config, args.json).await,
        Some(Command::Serve { port }) => run_http_server(config, port).await,
    }
}

/// Run the HTTP server.
async fn run_http_server(mut config: Config, port: Option<u16>) -> anyhow::Result<()> {
    // Initialize tracing for server mode
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AEQuery server v{}", env!("CARGO_PKG_VERSION"));

    if let Some(p) = port {
        config.server.http_port = p;
    }
    config.validate()?;

    let agent = Arc::new(cli::build_agent(&config)?);
    tracing::info!(records = agent.dataset().len(), "agent ready");

    let router = create_combined_router(agent, &RestApiConfig::default());

    let addr = format!("{}:{}", config.server.bind, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
