//! chsql CLI
//!
//! Renders ClickHouse SELECT statements from JSON documents.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use chsql_core::ast::Expr;
use chsql_core::builder::Query;
use chsql_core::render::render;

/// Render SQL from JSON query descriptors.
#[derive(Parser)]
#[command(name = "chsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, env = "CHSQL_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a full SELECT statement from a query descriptor.
    Query {
        /// JSON file holding the descriptor (stdin if not specified).
        #[arg(short, long, env = "CHSQL_INPUT")]
        input: Option<PathBuf>,
    },

    /// Render a single expression.
    Expr {
        /// JSON file holding the expression (stdin if not specified).
        #[arg(short, long, env = "CHSQL_INPUT")]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Query { input } => {
            let source = read_input(input.as_deref())?;
            let query: Query =
                serde_json::from_str(&source).context("invalid query descriptor")?;
            debug!(table = ?query.table(), columns = query.selects().len(), "decoded query");
            let sql = query.to_sql().context("cannot render query")?;
            println!("{sql}");
        }

        Commands::Expr { input } => {
            let source = read_input(input.as_deref())?;
            let expr: Expr = serde_json::from_str(&source).context("invalid expression")?;
            println!("{}", render(&expr));
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            info!("Reading {}", path.display());
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}
