#![deny(unsafe_code)]

//! Specdex CLI — operator front-end over the tool surface.
//!
//! The query subcommands route through the same [`ToolSurface`] an assistant
//! host would call, so the CLI output is exactly what the host receives.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use specdex_config::AppConfig;
use specdex_core::tools::{LIST_SOURCES, LOOKUP_CODE, SEARCH_DOCUMENTS};
use specdex_core::{FragmentStore, ToolSurface};

/// Specdex — keyword search and cause-code lookup over 3GPP NAS specs.
#[derive(Parser)]
#[command(name = "specdex", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "specdex.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the specification corpus by keywords.
    Search {
        /// Keyword query; every word must appear in a matching fragment.
        query: String,

        /// Restrict results to one specification (e.g. "TS 24.301").
        #[arg(long)]
        spec: Option<String>,

        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Look up an EMM or 5GMM cause code.
    Cause {
        /// The cause number (e.g. 3, 7, 15, 22).
        code: i64,

        /// Cause table: "lte" (EMM, TS 24.301) or "5g" (5GMM, TS 24.501).
        #[arg(long, default_value = "lte")]
        network: String,
    },

    /// List the specifications present in the corpus.
    Sources,

    /// Show the tool operations exposed to an assistant host.
    Tools {
        /// Print the full JSON Schema definitions.
        #[arg(long)]
        json: bool,
    },

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, from_file) = load_config(&cli.config).await?;

    // Verbosity flag wins over the configured level; RUST_LOG wins over both.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    if !from_file {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.command {
        Commands::Search { query, spec, limit } => {
            cmd_search(&config, &query, spec.as_deref(), limit).await?
        }
        Commands::Cause { code, network } => cmd_cause(&config, code, &network).await?,
        Commands::Sources => cmd_sources(&config).await?,
        Commands::Tools { json } => cmd_tools(&config, json)?,
        Commands::Config { show } => cmd_config(&cli.config, &config, show)?,
    }

    Ok(())
}

/// Load the corpus and build the shared tool surface.
async fn build_surface(config: &AppConfig) -> ToolSurface {
    let mut store = FragmentStore::new();
    store
        .load_or_empty(Path::new(&config.store.chunks_path))
        .await;
    ToolSurface::new(Arc::new(store), &config.search)
}

async fn cmd_search(
    config: &AppConfig,
    query: &str,
    spec: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let surface = build_surface(config).await;
    let mut args = json!({ "query": query });
    if let Some(spec) = spec {
        args["sourceFilter"] = json!(spec);
    }
    if let Some(limit) = limit {
        args["limit"] = json!(limit);
    }
    println!("{}", surface.call(SEARCH_DOCUMENTS, &args)?);
    Ok(())
}

async fn cmd_cause(config: &AppConfig, code: i64, network: &str) -> Result<()> {
    let surface = build_surface(config).await;
    let args = json!({ "code": code, "table": network });
    println!("{}", surface.call(LOOKUP_CODE, &args)?);
    Ok(())
}

async fn cmd_sources(config: &AppConfig) -> Result<()> {
    let surface = build_surface(config).await;
    println!("{}", surface.call(LIST_SOURCES, &json!({}))?);
    Ok(())
}

fn cmd_tools(config: &AppConfig, as_json: bool) -> Result<()> {
    // Definitions are static; no corpus needed to print the contract.
    let surface = ToolSurface::new(Arc::new(FragmentStore::new()), &config.search);
    let definitions = surface.definitions();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
    } else {
        for def in definitions {
            println!("{}: {}", def.name, def.description);
        }
    }
    Ok(())
}

fn cmd_config(config_path: &Path, config: &AppConfig, show: bool) -> Result<()> {
    if show {
        let toml_str =
            toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }
    Ok(())
}

async fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::load(path).await.map_err(|e| anyhow::anyhow!(e))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}
