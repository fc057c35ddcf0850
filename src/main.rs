//! loggar - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use loggar::cli::{Cli, Commands, ConfigCommands};

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_override = cli.config.as_deref();

    match cli.command {
        Commands::Analyze {
            file,
            json,
            no_animate,
            schema,
        } => {
            let config = commands::load_config(config_override)?;
            commands::analyze::handle(&config, file.as_deref(), json, no_animate, schema)
        }
        Commands::Render {
            file,
            json,
            no_animate,
        } => {
            let config = commands::load_config(config_override)?;
            commands::render::handle(&config, &file, json, no_animate)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_override),
            ConfigCommands::Path => commands::config::handle_path(config_override),
            ConfigCommands::Init { force } => commands::config::handle_init(config_override, force),
        },
        Commands::Version => {
            commands::version::handle();
            Ok(())
        }
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
