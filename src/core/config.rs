//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.github-cards/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CardsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Github cards";
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.github-cards/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".github-cards").join("config.toml"))
}

/// Load config from `~/.github-cards/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CardsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CardsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CardsConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path, generating a default if it is missing.
pub fn load_config_from(path: &Path) -> Result<CardsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CardsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CardsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Never log the token.
    debug!(
        "Config: title={:?}, base_url={:?}, timeout_secs={:?}",
        config.general.title, config.api.base_url, config.api.timeout_secs
    );
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Github Cards Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Github cards"              # Or set GITHUB_CARDS_TITLE, or pass --title

# [api]
# base_url = "https://api.github.com" # Or set GITHUB_API_BASE_URL, or pass --base-url
# token = "ghp_..."                   # Or set GITHUB_TOKEN (raises the rate limit)
# timeout_secs = 10
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CardsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &CardsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: CLI → env → config → default
    let title = cli
        .title
        .clone()
        .or_else(|| env("GITHUB_CARDS_TITLE"))
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("GITHUB_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Token: env → config. Empty strings count as unset.
    let token = env("GITHUB_TOKEN")
        .or_else(|| config.api.token.clone())
        .filter(|t| !t.trim().is_empty());

    let timeout_secs = match config.api.timeout_secs {
        Some(0) => {
            warn!("timeout_secs = 0 is not allowed, using {}", DEFAULT_TIMEOUT_SECS);
            DEFAULT_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_TIMEOUT_SECS,
    };

    ResolvedConfig {
        title,
        base_url,
        token,
        timeout_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&CardsConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.title, "Github cards");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CardsConfig {
            general: GeneralConfig {
                title: Some("My cards".to_string()),
            },
            api: ApiConfig {
                base_url: Some("https://ghe.example.com/api/v3".to_string()),
                token: Some("ghp_file".to_string()),
                timeout_secs: Some(3),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.title, "My cards");
        assert_eq!(resolved.base_url, "https://ghe.example.com/api/v3");
        assert_eq!(resolved.token.as_deref(), Some("ghp_file"));
        assert_eq!(resolved.timeout_secs, 3);
    }

    #[test]
    fn test_resolve_env_beats_file_and_cli_beats_env() {
        let config = CardsConfig {
            general: GeneralConfig {
                title: Some("From file".to_string()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = [
            ("GITHUB_CARDS_TITLE", "From env"),
            ("GITHUB_API_BASE_URL", "http://env.local"),
            ("GITHUB_TOKEN", "ghp_env"),
        ]
        .into_iter()
        .collect();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.title, "From env");
        assert_eq!(resolved.base_url, "http://env.local");
        assert_eq!(resolved.token.as_deref(), Some("ghp_env"));

        let cli = CliOverrides {
            title: Some("From cli".to_string()),
            base_url: Some("http://cli.local".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert_eq!(resolved.title, "From cli");
        assert_eq!(resolved.base_url, "http://cli.local");
    }

    #[test]
    fn test_blank_token_and_zero_timeout_fall_back() {
        let config = CardsConfig {
            api: ApiConfig {
                token: Some("   ".to_string()),
                timeout_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.token, None);
        assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[api]
timeout_secs = 30
"#;
        let config: CardsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.timeout_secs, Some(30));
        assert!(config.api.base_url.is_none());
        assert!(config.general.title.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: CardsConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.title.is_none());
        assert!(config.api.token.is_none());
    }

    #[test]
    fn test_load_config_from_missing_path_generates_default() {
        let dir = std::env::temp_dir().join(format!("github-cards-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.title.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("github-cards-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ntitle = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
