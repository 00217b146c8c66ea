//! unjsx CLI - rewrite JSX return statements as createElement calls.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::check::OutputFormat;

#[derive(Parser)]
#[command(name = "unjsx")]
#[command(about = "Rewrite JSX return statements as createElement calls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to unjsx.toml config file
    #[arg(short, long, default_value = "unjsx.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert files or directories in place
    Convert {
        /// Files or directories to convert ("-" reads stdin)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the converted text of a single file instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Object whose createElement is called (overrides config)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Report files that still contain convertible JSX
    Check {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Object whose createElement is called (overrides config)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Write a default unjsx.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so converted text can go to stdout
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Convert {
            paths,
            stdout,
            namespace,
        } => {
            let config = config::load_config(&cli.config)?;
            commands::convert::run(paths, stdout, namespace, &config).await?;
        }
        Commands::Check {
            paths,
            format,
            namespace,
        } => {
            let config = config::load_config(&cli.config)?;
            let clean = commands::check::run(paths, format, namespace, &config).await?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
    }

    Ok(())
}
