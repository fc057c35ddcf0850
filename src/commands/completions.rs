//! Completions command handler

use anyhow::{bail, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io;

/// Print a completion script for `shell`.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: Option<CompletionShell>) -> Result<()> {
    match shell {
        Some(shell) => {
            generate_completions::<C>(shell, &mut io::stdout());
            Ok(())
        }
        None => bail!("Usage: loggar completions --shell <bash|zsh|fish|powershell|elvish>"),
    }
}

/// Write the completion script for `shell` into `out`.
pub fn generate_completions<C: CommandFactory>(shell: CompletionShell, out: &mut dyn io::Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "loggar", out);
}
