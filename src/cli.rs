//! CLI definitions for loggar
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be exercised by tests without spawning the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::analyzer::SchemaVersion;

/// Build clap styles using our theme colors.
///
/// - Magenta: headers, usage, command names (same accent as report titles)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .usage(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "loggar")]
#[command(about = "[ loggar ] - AI-powered log triage with an animated terminal report")]
#[command(
    long_about = "loggar - AI-powered log triage.

loggar sends raw log text to a Gemini-compatible generative AI endpoint,
asks for a structured incident analysis and renders the verdict as an
animated, color-highlighted terminal report (or as plain JSON).

QUICK START:
    export GOOGLE_AI_KEY=...          Provide the API key
    loggar analyze app.log            Analyze a log file
    kubectl logs pod | loggar analyze Analyze piped logs
    loggar analyze app.log --json     Print the raw result JSON
    loggar render result.json         Re-render a saved result

Configuration lives in ~/.config/loggar/config.toml (see 'loggar config')."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of ~/.config/loggar/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze logs with AI
    #[command(long_about = "Analyze log text with the configured AI provider.

Logs are read from FILE, or from stdin when FILE is '-' or omitted.
The API key is taken from the environment variable named by
[ai].api_key_env (default GOOGLE_AI_KEY), falling back to [ai].api_key.

Transient failures (network errors, HTTP 429 and 5xx) are retried with
exponential backoff; other HTTP errors fail immediately.

EXAMPLES:
    loggar analyze app.log                    Animated report
    loggar analyze app.log --no-animate       Print the report at once
    loggar analyze app.log --json > out.json  Save the raw result
    loggar analyze - --schema structured      Ask for the incident record shape")]
    Analyze {
        /// Log file to analyze ('-' for stdin)
        #[arg(help = "Log file to analyze ('-' or omitted reads stdin)")]
        file: Option<PathBuf>,
        /// Print the result as indented JSON
        #[arg(long, help = "Print the result as indented JSON")]
        json: bool,
        /// Print the report without the typing animation
        #[arg(long, help = "Print the report without the typing animation")]
        no_animate: bool,
        /// Result shape to request from the model
        #[arg(long, value_name = "SCHEMA", help = "Result shape: narrative or structured")]
        schema: Option<SchemaVersion>,
    },

    /// Render a saved analysis result
    #[command(long_about = "Render a previously saved analysis result without calling the AI.

Accepts either result shape, as written by 'loggar analyze --json'.

EXAMPLES:
    loggar render out.json
    loggar render out.json --no-animate
    loggar render out.json --json")]
    Render {
        /// Result JSON file
        #[arg(help = "Result JSON file ('-' reads stdin)")]
        file: PathBuf,
        /// Print the result as indented JSON
        #[arg(long, help = "Print the result as indented JSON")]
        json: bool,
        /// Print the report without the typing animation
        #[arg(long, help = "Print the report without the typing animation")]
        no_animate: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and initialize loggar configuration.

Configuration is stored in ~/.config/loggar/config.toml and holds the AI
endpoint, model, credential lookup, retry policy and output settings.

EXAMPLES:
    loggar config show       Show the effective configuration
    loggar config path       Print the config file location
    loggar config init       Write a default config file"
    )]
    Config(ConfigCommands),

    /// Show version information
    Version,

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Option<CompletionShell>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Missing settings are shown with their defaults. The API key itself is
never printed; only whether one was found.

EXAMPLE:
    loggar config show")]
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    #[command(long_about = "Write a configuration file with all defaults.

Fails if the file already exists unless --force is given.

EXAMPLE:
    loggar config init
    loggar config init --force")]
    Init {
        /// Overwrite an existing file
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
