//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{CompositeRequest, SAMPLE_REQUEST_ID};

/// Triad - one orchestrator, two string-transform workers.
#[derive(Parser, Debug)]
#[command(name = "triad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one request through the orchestrator (default)
    Run(RunArgs),

    /// Validate a configuration file
    Check(ConfigPathArg),
}

impl Cli {
    /// The subcommand to execute; `run` with defaults when none was given.
    pub fn command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "triad.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request id attached to every log entry
    #[arg(long, default_value = SAMPLE_REQUEST_ID)]
    pub request_id: String,

    /// Primary content
    #[arg(long, default_value = "John Doe")]
    pub content: String,

    /// Content for the bravo worker (skipped when empty)
    #[arg(long, default_value = "Hello World from Bravo to")]
    pub bravo_content: String,

    /// Content for the charlie worker (skipped when empty)
    #[arg(long, default_value = "Hello World from Charlie to")]
    pub charlie_content: String,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not mirror log entries to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        let sample = CompositeRequest::sample();
        Self {
            config: None,
            request_id: SAMPLE_REQUEST_ID.to_string(),
            content: sample.content,
            bravo_content: sample.bravo_content,
            charlie_content: sample.charlie_content,
            log_level: None,
            quiet: false,
        }
    }
}

impl RunArgs {
    pub fn request(&self) -> CompositeRequest {
        CompositeRequest::new(
            self.content.clone(),
            self.bravo_content.clone(),
            self.charlie_content.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs_sample() {
        let cli = Cli::try_parse_from(["triad"]).unwrap();
        match cli.command() {
            Commands::Run(args) => {
                assert_eq!(args.request(), CompositeRequest::sample());
                assert_eq!(args.request_id, SAMPLE_REQUEST_ID);
                assert!(args.config.is_none());
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn run_defaults_match_bare_invocation() {
        let cli = Cli::try_parse_from(["triad", "run"]).unwrap();
        let Commands::Run(args) = cli.command() else {
            panic!("expected run");
        };
        assert_eq!(args.request(), CompositeRequest::sample());
    }

    #[test]
    fn run_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "triad",
            "run",
            "--request-id",
            "abc",
            "--bravo-content",
            "",
            "--log-level",
            "debug",
            "-q",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command() else {
            panic!("expected run");
        };
        assert_eq!(args.request_id, "abc");
        assert_eq!(args.request().bravo_content, "");
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.quiet);
    }

    #[test]
    fn check_has_default_path() {
        let cli = Cli::try_parse_from(["triad", "check"]).unwrap();
        let Commands::Check(arg) = cli.command() else {
            panic!("expected check");
        };
        assert_eq!(arg.config, PathBuf::from("triad.toml"));
    }
}
