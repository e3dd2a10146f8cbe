//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.hieroglyph/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HieroglyphConfig {
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TranslationConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CardsConfig {
    pub per_page: Option<usize>,
    pub reveal_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSLATION_DELAY_MS: u64 = 500;
pub const DEFAULT_CARDS_PER_PAGE: usize = 12;
pub const DEFAULT_REVEAL_SECONDS: u64 = 3;
pub const DEFAULT_LOG_FILE: &str = "hieroglyph.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub translation_delay: Duration,
    pub cards_per_page: usize,
    pub reveal_duration: Duration,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&HieroglyphConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub delay_ms: Option<u64>,
    pub cards_per_page: Option<usize>,
    pub log_file: Option<PathBuf>,
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

/// Returns the path to `~/.hieroglyph/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hieroglyph").join("config.toml"))
}

/// Load config from `~/.hieroglyph/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HieroglyphConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HieroglyphConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HieroglyphConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<HieroglyphConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(HieroglyphConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HieroglyphConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Hieroglyph Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [translation]
# delay_ms = 500             # Simulated translation latency

# [cards]
# per_page = 12              # Cards shown per "load more" page
# reveal_seconds = 3         # How long a selected card offers "Add"

# [logging]
# file = "hieroglyph.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
pub fn resolve(config: &HieroglyphConfig, cli: &CliOverrides) -> ResolvedConfig {
    let delay_ms = cli
        .delay_ms
        .or(config.translation.delay_ms)
        .unwrap_or(DEFAULT_TRANSLATION_DELAY_MS);

    // A zero page size would make "load more" a no-op forever
    let cards_per_page = cli
        .cards_per_page
        .or(config.cards.per_page)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_CARDS_PER_PAGE);

    let reveal_seconds = config
        .cards
        .reveal_seconds
        .unwrap_or(DEFAULT_REVEAL_SECONDS);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        translation_delay: Duration::from_millis(delay_ms),
        cards_per_page,
        reveal_duration: Duration::from_secs(reveal_seconds),
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = HieroglyphConfig::default();
        assert!(config.translation.delay_ms.is_none());
        assert!(config.cards.per_page.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: HieroglyphConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = ResolvedConfig::default();
        assert_eq!(resolved.translation_delay, Duration::from_millis(500));
        assert_eq!(resolved.cards_per_page, DEFAULT_CARDS_PER_PAGE);
        assert_eq!(resolved.reveal_duration, Duration::from_secs(3));
        assert_eq!(resolved.log_file, PathBuf::from("hieroglyph.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = HieroglyphConfig {
            translation: TranslationConfig { delay_ms: Some(0) },
            cards: CardsConfig {
                per_page: Some(20),
                reveal_seconds: Some(5),
            },
            logging: LoggingConfig {
                file: Some("/tmp/h.log".to_string()),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.translation_delay, Duration::ZERO);
        assert_eq!(resolved.cards_per_page, 20);
        assert_eq!(resolved.reveal_duration, Duration::from_secs(5));
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/h.log"));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = HieroglyphConfig {
            translation: TranslationConfig { delay_ms: Some(900) },
            cards: CardsConfig {
                per_page: Some(20),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            delay_ms: Some(10),
            cards_per_page: Some(6),
            log_file: Some(PathBuf::from("cli.log")),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.translation_delay, Duration::from_millis(10));
        assert_eq!(resolved.cards_per_page, 6);
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let cli = CliOverrides {
            cards_per_page: Some(0),
            ..Default::default()
        };
        let resolved = resolve(&HieroglyphConfig::default(), &cli);
        assert_eq!(resolved.cards_per_page, DEFAULT_CARDS_PER_PAGE);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[cards]
per_page = 8
"#;
        let config: HieroglyphConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cards.per_page, Some(8));
        assert!(config.cards.reveal_seconds.is_none());
        assert!(config.translation.delay_ms.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("hieroglyph-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[cards\nper_page = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("hieroglyph-gen-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.cards.per_page.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Hieroglyph Configuration"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
