//! User-level configuration for gilt.
//!
//! Loaded from `~/.config/gilt/config.toml` (per-platform via `dirs`).
//! Holds author identity defaults for `init`/`reserve` and the PyPI token
//! fallback. Environment variables take priority over the file at the
//! point of use; a missing or unparsable file degrades to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default)]
    pub pypi: PypiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthorConfig {
    /// Author name for scaffolded projects and reserved packages
    pub name: Option<String>,

    /// Author email
    pub email: Option<String>,

    /// GitHub org or username used in repository URLs
    pub org: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PypiConfig {
    /// PyPI API token (pypi-...). `PYPI_API_TOKEN` overrides this.
    pub token: Option<String>,
}

impl UserConfig {
    /// Load the user config file, or defaults when absent or unparsable.
    pub fn load() -> Self {
        Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
            .unwrap_or_default()
    }

    /// Get the user config file path.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gilt").join("config.toml"))
    }

    /// Persist the config, creating parent directories. The file is made
    /// owner-only on Unix since it may hold a token.
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path().context("no user config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("failed to chmod {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config: UserConfig =
            toml::from_str("[author]\nname = \"Jane Doe\"\n").expect("parse config");
        assert_eq!(config.author.name.as_deref(), Some("Jane Doe"));
        assert!(config.author.email.is_none());
        assert!(config.pypi.token.is_none());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = UserConfig {
            author: AuthorConfig {
                name: Some("Jane".into()),
                email: Some("jane@example.com".into()),
                org: Some("acme".into()),
            },
            pypi: PypiConfig {
                token: Some("pypi-abc".into()),
            },
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: UserConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.author.org.as_deref(), Some("acme"));
        assert_eq!(parsed.pypi.token.as_deref(), Some("pypi-abc"));
    }
}
