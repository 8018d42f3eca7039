//! sqlviz entry point
//!
//! Without a subcommand this opens the interactive client. `sqlviz ask`
//! sends one prompt and prints the response.

use clap::{Parser, Subcommand};
use sqlviz_cli::ask::ask;
use sqlviz_cli::logging::{LogTarget, init_tracing};
use sqlviz_cli::tui::run_tui;
use sqlviz_core::artifact::ArtifactLoader;
use sqlviz_core::client::HttpAnalysisClient;
use sqlviz_core::config::AppConfig;
use sqlviz_core::domain::ChartType;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "sqlviz", version, about = "Ask questions about your data, get charts back")]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Origin of the analysis API, e.g. http://127.0.0.1:8000
    #[arg(long)]
    api_url: Option<String>,
    /// Initially selected chart type
    #[arg(long)]
    chart: Option<ChartType>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a single prompt and print the JSON response
    Ask {
        /// Chart type for this request
        #[arg(long)]
        chart: Option<ChartType>,
        prompt: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.set_api_base_url(url)?;
    }
    if let Some(chart) = cli.chart {
        config.default_chart_type = chart;
    }

    let endpoint = config.analyse_url()?;
    let client = Arc::new(HttpAnalysisClient::new(endpoint, config.request_timeout)?);

    match cli.command {
        Some(Command::Ask { chart, prompt }) => {
            init_tracing(LogTarget::Stderr)?;
            debug!(endpoint = %client.endpoint(), "Configuration loaded");
            let chart_type = chart.unwrap_or(config.default_chart_type);
            match ask(client.as_ref(), &prompt.join(" "), chart_type).await {
                Ok(output) => println!("{}", serde_json::to_string_pretty(&output)?),
                Err(err) => {
                    eprintln!("{}", err.user_message());
                    std::process::exit(1);
                }
            }
        }
        None => {
            init_tracing(LogTarget::File(&config.log_file))?;
            info!(endpoint = %client.endpoint(), "Starting sqlviz");
            let loader = ArtifactLoader::new(
                config.api_base_url.clone(),
                config.artifact_preview_bytes,
            );
            run_tui(client, loader, &config).await?;
            info!("sqlviz finished");
        }
    }
    Ok(())
}
