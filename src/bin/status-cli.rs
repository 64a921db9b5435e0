//! Operator CLI: run a one-off probe or health check from a shell.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use status_dashboard::config::loader::{BACKEND_URL, PROBE_TIMEOUT_SECS};
use status_dashboard::config::{resolve_probe_config, EnvSource, MapEnv, ProbeConfig, ProcessEnv};
use status_dashboard::Prober;

#[derive(Parser)]
#[command(name = "status-cli")]
#[command(about = "Operator CLI for the backend status endpoint", long_about = None)]
struct Cli {
    /// Backend address (defaults to BACKEND_URL, then http://backend:8080)
    #[arg(short, long)]
    url: Option<String>,

    /// Request deadline in seconds (defaults to PROBE_TIMEOUT_SECS, else none)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the backend root exactly as the dashboard does
    Probe {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Query the backend's /health endpoint
    Health,
}

impl Cli {
    /// Command-line flags override the environment.
    fn probe_config(&self) -> ProbeConfig {
        let process = ProcessEnv;
        let mut env: MapEnv = [BACKEND_URL, PROBE_TIMEOUT_SECS]
            .into_iter()
            .filter_map(|key| process.var(key).map(|value| (key, value)))
            .collect();

        if let Some(url) = &self.url {
            env = env.with(BACKEND_URL, url.clone());
        }
        if let Some(secs) = self.timeout {
            env = env.with(PROBE_TIMEOUT_SECS, secs.to_string());
        }

        resolve_probe_config(&env)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.probe_config();
    let prober = Prober::new()?;

    match cli.command {
        Commands::Probe { json } => {
            let outcome = prober.probe(&config).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Target:  {}", config.target_address);
                println!("State:   {}", outcome.render_state().label());
                println!("Message: {}", outcome.message());
            }

            Ok(if outcome.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Health => {
            let health_config = ProbeConfig {
                target_address: format!("{}/health", config.target_address.trim_end_matches('/')),
                ..config
            };
            let outcome = prober.probe(&health_config).await;

            match outcome.http_status() {
                Some(_) if outcome.is_error() => println!("{}", outcome.message()),
                Some(status) => println!("{} {}", status, outcome.message()),
                None => eprintln!("Error: {}", outcome.message()),
            }

            Ok(if outcome.http_status() == Some(200) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["status-cli", "--timeout", "0", "probe"]).is_err());

        let cli = Cli::try_parse_from(["status-cli", "--timeout", "2", "probe", "--json"]).unwrap();
        assert_eq!(cli.timeout, Some(2));
        assert!(matches!(cli.command, Commands::Probe { json: true }));
    }

    #[test]
    fn flags_override_environment() {
        let cli = Cli::try_parse_from([
            "status-cli",
            "--url",
            "http://127.0.0.1:9",
            "--timeout",
            "3",
            "health",
        ])
        .unwrap();

        let config = cli.probe_config();
        assert_eq!(config.target_address, "http://127.0.0.1:9");
        assert_eq!(config.timeout, Some(std::time::Duration::from_secs(3)));
    }
}
