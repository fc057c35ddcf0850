//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use loggar::Config;

use super::config_path;

/// Show the effective configuration as TOML, followed by the credential status.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(override_path: Option<&Path>) -> Result<()> {
    let path = config_path(override_path)?;
    let config = Config::load_from(&path)?;
    print!("{}", render_show(&config, &path, config.resolve_api_key().is_some())?);
    Ok(())
}

/// Text printed by `config show`. The API key is masked.
pub fn render_show(config: &Config, path: &Path, key_found: bool) -> Result<String> {
    let mut shown = config.clone();
    if shown.ai.api_key.is_some() {
        shown.ai.api_key = Some("********".to_string());
    }

    let source = if path.exists() {
        format!("# Loaded from {}", path.display())
    } else {
        format!("# {} not found, showing defaults", path.display())
    };
    let credential = if key_found {
        "# API key: found".to_string()
    } else {
        format!("# API key: not set (export {})", config.ai.api_key_env)
    };

    Ok(format!("{}\n{}\n\n{}", source, credential, shown.to_toml()?))
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(override_path: Option<&Path>) -> Result<()> {
    println!("{}", config_path(override_path)?.display());
    Ok(())
}

/// Write a default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(override_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path(override_path)?;
    init_at(&path, force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Write defaults to `path`, refusing to overwrite unless `force` is set.
pub fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    Config::default().save_to(path)
}
