//! Command-line definitions for the `nova` binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ServerConfig;

/// Nova personal productivity API server.
#[derive(Parser)]
#[command(name = "nova", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "NOVA_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log directive for the current verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info,tower_http=info",
            1 => "info,nova=debug,nova_api=debug,nova_core=debug,nova_infra=debug,tower_http=debug",
            _ => "trace",
        }
    }

    /// `-v` flags override `RUST_LOG`; without them the environment decides.
    pub fn forced_directive(&self) -> Option<&'static str> {
        (self.verbose > 0).then(|| self.log_directive())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve(ServerConfig),

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["nova", "-vv", "completions", "bash"]).unwrap();
        assert_eq!(cli.log_directive(), "trace");
        let cli = Cli::try_parse_from(["nova", "completions", "zsh"]).unwrap();
        assert!(cli.log_directive().starts_with("info"));
        assert_eq!(cli.forced_directive(), None);
    }

    #[test]
    fn test_verbose_flag_forces_directive() {
        let cli = Cli::try_parse_from(["nova", "-v", "completions", "bash"]).unwrap();
        assert_eq!(cli.forced_directive(), Some(cli.log_directive()));
        assert!(cli.log_directive().contains("nova_api=debug"));
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "nova",
            "serve",
            "--jwt-secret",
            "s3cret",
            "--port",
            "4000",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(config) => {
                assert_eq!(config.port, 4000);
                assert_eq!(config.jwt_secret.expose_secret(), "s3cret");
            }
            Commands::Completions { .. } => panic!("expected serve"),
        }
    }
}
