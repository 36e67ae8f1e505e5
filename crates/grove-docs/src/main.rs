//! Grove docs CLI.
//!
//! Provides commands for:
//! - `check`: Load and validate the corpus, roster and configuration
//! - `index`: Emit the search index as JSON
//! - `search`: Query the search index
//! - `route`: Resolve a URL through the router
//! - `nav`: Emit the sidebar navigation as JSON
//! - `contributors`: Emit the contributor roster as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ContributorsArgs, IndexArgs, NavArgs, RouteArgs, SearchArgs, SiteArgs};
use output::Output;

/// Grove docs site tools.
#[derive(Parser)]
#[command(name = "grove-docs", version, about)]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the site content.
    Check(CheckArgs),
    /// Print the search index as JSON.
    Index(IndexArgs),
    /// Search the docs.
    Search(SearchArgs),
    /// Resolve a URL through the router.
    Route(RouteArgs),
    /// Print the sidebar navigation as JSON.
    Nav(NavArgs),
    /// Print the contributor roster as JSON.
    Contributors(ContributorsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.site.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&cli.site),
        Commands::Index(args) => args.execute(&cli.site),
        Commands::Search(args) => args.execute(&cli.site),
        Commands::Route(args) => args.execute(&cli.site),
        Commands::Nav(args) => args.execute(&cli.site),
        Commands::Contributors(args) => args.execute(&cli.site),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
