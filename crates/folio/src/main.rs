//! folio CLI - site configuration tooling.
//!
//! Provides commands for:
//! - `check`: Verify every path a site config references
//! - `show`: Print the resolved site config as JSON
//! - `resolve`: Map an import specifier through the alias table

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ResolveArgs, ShowArgs};
use output::Output;

/// folio - site configuration tooling.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output (log loaded sites).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every referenced path exists.
    Check(CheckArgs),
    /// Print the resolved configuration.
    Show(ShowArgs),
    /// Resolve an import specifier through the alias table.
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// --verbose enables INFO level, otherwise use RUST_LOG (errors only when unset).
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_repeated_config() {
        let cli = Cli::try_parse_from(["folio", "check", "-c", "a.toml", "-c", "b.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Check(_)));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_resolve_with_global_verbose() {
        let cli = Cli::try_parse_from(["folio", "resolve", "@/theme", "--verbose"]).unwrap();
        assert!(matches!(cli.command, Commands::Resolve(_)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_logs_at_info() {
        assert_eq!(log_filter(true).to_string(), "info");
    }

    #[test]
    fn test_resolve_requires_specifier() {
        assert!(Cli::try_parse_from(["folio", "resolve"]).is_err());
    }
}
