// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use gabinete_api::{default_config, load_config_file, CabinetServer, DataStoreConfig};

#[derive(Parser)]
#[command(name = "gabinete-api")]
#[command(about = "Read-only API over the composition of the executive cabinet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate {
            config,
            show_resolved,
        }) => validate_config(config, show_resolved),
        None => run_server(cli.config, cli.port).await,
    }
}

/// Load `.env` from the config file's directory, then from the working directory.
fn load_env_file(config_path: &Path) -> bool {
    let beside_config = config_path
        .parent()
        .map(|dir| dir.join(".env"))
        .filter(|env_file| env_file.exists());

    let result = match beside_config {
        Some(env_file) => dotenvy::from_path(env_file).map(|_| ()),
        None => dotenvy::dotenv().map(|_| ()),
    };

    match result {
        Ok(()) => true,
        Err(e) if e.not_found() => false,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

fn init_logging(log_level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }
}

/// Run the API server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    let env_file_loaded = load_env_file(&config_path);

    let (mut config, config_found) = if config_path.exists() {
        (load_config_file(&config_path)?, true)
    } else {
        (default_config()?, false)
    };

    init_logging(&config.server.log_level);

    if !config_found {
        warn!(
            "Config file '{}' not found. Using configuration from environment variables.",
            config_path.display()
        );
    } else {
        info!("Config file: {}", config_path.display());
    }
    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }
    debug!("Debug logging is enabled");

    if let Some(port) = port_override {
        info!("Using command line port {port}");
        config.server.port = port;
    }
    info!("Port: {}", config.server.port);
    debug!("Server configuration: {:?}", config.server);

    let server = CabinetServer::new(&config)?;
    server.run().await?;

    Ok(())
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf, show_resolved: bool) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    load_env_file(&config_path);

    match load_config_file(&config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();

            println!("Summary:");
            println!("  Data store: {}", config.data_store.kind());
            println!("  Ordering: {:?}", config.ordering);

            if show_resolved {
                println!();
                println!("Resolved server settings:");
                println!("  Host: {}", config.server.host);
                println!("  Port: {}", config.server.port);
                println!("  Log Level: {}", config.server.log_level);
                println!("  CORS: {}", config.server.cors);
                match &config.data_store {
                    DataStoreConfig::Postgrest {
                        url, timeout_secs, ..
                    } => {
                        println!("  Data store URL: {url}");
                        println!("  Timeout: {timeout_secs}s");
                    }
                    DataStoreConfig::Snapshot { path } => {
                        println!("  Snapshot file: {}", path.display());
                    }
                }
            }

            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
