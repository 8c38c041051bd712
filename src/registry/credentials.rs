//! PyPI credential resolution.
//!
//! Priority: `PYPI_API_TOKEN` environment variable, then the user config
//! file, then an interactive prompt (TTY only). A token entered at the
//! prompt is validated and persisted back to the config file.

use anyhow::{bail, Context, Result};
use console::{style, Term};
use tracing::warn;

use crate::config::UserConfig;

/// Non-interactive lookup: env var, then config file.
pub fn get_token(config: &UserConfig) -> Option<String> {
    if let Ok(token) = std::env::var("PYPI_API_TOKEN") {
        if !token.is_empty() {
            return Some(token);
        }
    }
    config.pypi.token.clone()
}

/// PyPI API tokens carry a fixed prefix.
pub fn validate_token(token: &str) -> bool {
    token.starts_with("pypi-")
}

/// Resolve a token, prompting interactively as a last resort.
///
/// Errors instead of hanging when no token is configured and prompting is
/// disabled or stdin is not a terminal.
pub fn resolve_token(config: &UserConfig, interactive: bool) -> Result<String> {
    if let Some(token) = get_token(config) {
        return Ok(token);
    }

    let term = Term::stderr();
    if !interactive || !term.is_term() {
        bail!("No PyPI token found. Set PYPI_API_TOKEN or add [pypi] token to the gilt config.");
    }

    term.write_line(&format!(
        "No PyPI token found. Get one at {}",
        style("https://pypi.org/manage/account/token/").cyan()
    ))?;
    term.write_str("PyPI API token: ")?;
    let token = term.read_secure_line().context("failed to read token")?;

    if !validate_token(&token) {
        bail!("Invalid token (must start with 'pypi-').");
    }

    // Persist for next time; a save failure is not fatal for this run.
    let mut updated = UserConfig::load();
    updated.pypi.token = Some(token.clone());
    match updated.save() {
        Ok(()) => {
            if let Some(path) = UserConfig::user_config_path() {
                term.write_line(&format!("✅ Saved to {}", path.display()))?;
            }
        }
        Err(err) => warn!("failed to persist token: {err:#}"),
    }

    Ok(token)
}
