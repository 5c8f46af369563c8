//! keygate - short-lived access key service

use clap::Parser;
use keygate::config::{ConfigOverrides, StoreBackend};
use keygate::server;
use keygate::utils::logging::{LogFormat, init_tracing};
use std::path::PathBuf;
use std::process::ExitCode;

/// Issue and check short-lived access keys over HTTP
#[derive(Debug, Parser)]
#[command(name = "keygate", version, about)]
struct Cli {
    /// YAML configuration file; environment variables override it
    #[arg(short, long, env = "KEYGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Key store backend (memory or redis)
    #[arg(long)]
    store: Option<StoreBackend>,

    /// Emit logs as JSON lines
    #[arg(long, env = "KEYGATE_LOG_JSON")]
    log_json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            backend: self.store,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    });
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match server::builder::run_server(cli.config.as_deref(), cli.overrides()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
