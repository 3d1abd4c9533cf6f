use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tgs_cli::output::{render_list, render_one, OutputFormat};
use tgs_lib::{ClientConfig, TgsClient};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch and validate TGS sports-reference data")]
struct Cli {
    /// Override the API endpoint (defaults to TGS_API_ENDPOINT or the public API).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds (at least 1).
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all countries.
    Countries,
    /// List the current organizations.
    Organizations,
    /// Show a single country by id.
    Country {
        /// Numeric country id.
        id: i64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = client_config(&cli);
    let client = TgsClient::new(&config)
        .with_context(|| format!("failed to configure client for {}", config.endpoint))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Countries => {
            let countries = runtime
                .block_on(client.get_countries())
                .context("failed to fetch countries")?;
            render_list(&mut out, cli.format, "countries", &countries)?;
        }
        Command::Organizations => {
            let organizations = runtime
                .block_on(client.get_organizations())
                .context("failed to fetch organizations")?;
            render_list(&mut out, cli.format, "organizations", &organizations)?;
        }
        Command::Country { id } => {
            let country = runtime
                .block_on(client.get_country_by_id(id))
                .with_context(|| format!("failed to fetch country {}", id))?;
            render_one(&mut out, cli.format, &country)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
