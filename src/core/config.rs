//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.abacus/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::calculator::{CalculatorConfig, DEFAULT_PRECISION};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AbacusConfig {
    #[serde(default)]
    pub calculator: CalculatorSection,
    #[serde(default)]
    pub repl: ReplSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CalculatorSection {
    pub initial_value: Option<f64>,
    pub precision: Option<u32>,
    pub history_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReplSection {
    pub prompt: Option<String>,
    pub show_banner: Option<bool>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub initial_value: Option<f64>,
    pub precision: Option<u32>,
    pub history_limit: Option<usize>,
    pub show_banner: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_VALUE: f64 = 0.0;
pub const DEFAULT_PROMPT: &str = "calc> ";

pub const ENV_INITIAL_VALUE: &str = "ABACUS_INITIAL_VALUE";
pub const ENV_PRECISION: &str = "ABACUS_PRECISION";
pub const ENV_HISTORY_LIMIT: &str = "ABACUS_HISTORY_LIMIT";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub calculator: CalculatorConfig,
    pub prompt: String,
    pub show_banner: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            calculator: CalculatorConfig::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
        }
    }
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

/// Returns `~/.abacus/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".abacus"))
}

/// Returns the path to `~/.abacus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.abacus/config.toml`.
pub fn load_config() -> Result<AbacusConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(AbacusConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AbacusConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<AbacusConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AbacusConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AbacusConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Abacus Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [calculator]
# initial_value = 0.0          # Or set ABACUS_INITIAL_VALUE
# precision = 10               # Decimal places shown; or ABACUS_PRECISION
# history_limit = 1000         # Omit for unbounded history; or ABACUS_HISTORY_LIMIT

# [repl]
# prompt = "calc> "
# show_banner = true
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AbacusConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with_env(
    config: &AbacusConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Initial value: CLI → env → config → default
    let initial = cli
        .initial_value
        .or_else(|| env_parse(&env, ENV_INITIAL_VALUE))
        .or(config.calculator.initial_value)
        .unwrap_or(DEFAULT_INITIAL_VALUE);

    // Precision: CLI → env → config → default
    let precision = cli
        .precision
        .or_else(|| env_parse(&env, ENV_PRECISION))
        .or(config.calculator.precision)
        .unwrap_or(DEFAULT_PRECISION);

    // History limit: CLI → env → config → unbounded
    let history_limit = cli
        .history_limit
        .or_else(|| env_parse(&env, ENV_HISTORY_LIMIT))
        .or(config.calculator.history_limit);

    ResolvedConfig {
        calculator: CalculatorConfig {
            initial,
            precision,
            history_limit,
        },
        prompt: config
            .repl
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        show_banner: cli.show_banner.or(config.repl.show_banner).unwrap_or(true),
    }
}

/// Reads and parses an env var; unparseable values are logged and ignored.
fn env_parse<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = AbacusConfig::default();
        assert!(config.calculator.initial_value.is_none());
        assert!(config.repl.prompt.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AbacusConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.calculator.initial, DEFAULT_INITIAL_VALUE);
        assert_eq!(resolved.calculator.precision, DEFAULT_PRECISION);
        assert_eq!(resolved.calculator.history_limit, None);
        assert_eq!(resolved.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AbacusConfig {
            calculator: CalculatorSection {
                initial_value: Some(5.0),
                precision: Some(4),
                history_limit: Some(50),
            },
            repl: ReplSection {
                prompt: Some(">> ".to_string()),
                show_banner: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.calculator.initial, 5.0);
        assert_eq!(resolved.calculator.precision, 4);
        assert_eq!(resolved.calculator.history_limit, Some(50));
        assert_eq!(resolved.prompt, ">> ");
        assert!(!resolved.show_banner);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = AbacusConfig {
            calculator: CalculatorSection {
                initial_value: Some(1.0),
                precision: Some(2),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_INITIAL_VALUE => Some("7.5".to_string()),
            ENV_PRECISION => Some("3".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.calculator.initial, 7.5);
        assert_eq!(resolved.calculator.precision, 3);

        let cli = CliOverrides {
            initial_value: Some(-2.0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.calculator.initial, -2.0);
        assert_eq!(resolved.calculator.precision, 3);
    }

    #[test]
    fn test_unparseable_env_is_ignored() {
        let env = |key: &str| (key == ENV_PRECISION).then(|| "lots".to_string());
        let resolved = resolve_with_env(&AbacusConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.calculator.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[calculator]
initial_value = 12.5
precision = 6
history_limit = 100

[repl]
prompt = "abacus> "
show_banner = false
"#;
        let config: AbacusConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.calculator.initial_value, Some(12.5));
        assert_eq!(config.calculator.precision, Some(6));
        assert_eq!(config.calculator.history_limit, Some(100));
        assert_eq!(config.repl.prompt.as_deref(), Some("abacus> "));
        assert_eq!(config.repl.show_banner, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[repl]
prompt = "> "
"#;
        let config: AbacusConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repl.prompt.as_deref(), Some("> "));
        assert!(config.calculator.precision.is_none());
        assert!(config.repl.show_banner.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.calculator.initial_value.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Abacus Configuration"));
        // Everything is commented out, so the generated file parses to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.calculator.precision.is_none());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[calculator]\nprecision = \"ten\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
