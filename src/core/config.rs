//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.craftshop/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! With no config at all the page behaves exactly as the built-in constants say.
//!
//! Loading runs before the file logger exists (the logger's own path and
//! level come from here), so nothing in this module logs directly. Findings
//! are collected as [`ConfigNote`]s and replayed once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::DismissPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CraftshopConfig {
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PopupConfig {
    pub dismiss_after_ms: Option<u64>,
    pub stale_timers: Option<DismissPolicy>,
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POPUP_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_LOG_FILE: &str = "craftshop.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub popup_delay: Duration,
    pub dismiss_policy: DismissPolicy,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            popup_delay: DEFAULT_POPUP_DELAY,
            dismiss_policy: DismissPolicy::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub popup_ms: Option<u64>,
    pub stale_timers: Option<DismissPolicy>,
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
// Deferred Diagnostics
// ============================================================================

/// A log record produced while loading or resolving config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

impl ConfigNote {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Send the note to the `log` facade.
    pub fn emit(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

// ============================================================================
// Loading
// ============================================================================

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Craftshop Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [popup]
# dismiss_after_ms = 2000          # Or set CRAFTSHOP_POPUP_MS
# stale_timers = "supersede"       # "supersede" or "legacy" (CRAFTSHOP_STALE_TIMERS)

# [logging]
# file = "craftshop.log"
# level = "debug"                  # "error", "warn", "info", "debug", "trace" (CRAFTSHOP_LOG_LEVEL)
"#;

/// Returns the path to `~/.craftshop/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".craftshop").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.craftshop/config.toml`.
///
/// A missing default file is generated (commented out) and yields
/// `CraftshopConfig::default()`. A missing explicit file is an I/O error.
pub fn load_config(
    explicit: Option<&Path>,
    notes: &mut Vec<ConfigNote>,
) -> Result<CraftshopConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_from(path, false, notes),
        None => match config_path() {
            Some(path) => load_config_from(&path, true, notes),
            None => {
                notes.push(ConfigNote::new(
                    Level::Warn,
                    "Could not determine home directory, using default config",
                ));
                Ok(CraftshopConfig::default())
            }
        },
    }
}

/// Load config from `path`. When the file is missing and `generate_if_missing`
/// is set, write the commented default there and return the defaults.
pub fn load_config_from(
    path: &Path,
    generate_if_missing: bool,
    notes: &mut Vec<ConfigNote>,
) -> Result<CraftshopConfig, ConfigError> {
    if generate_if_missing && !path.exists() {
        notes.push(ConfigNote::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        generate_default_config(path, notes);
        return Ok(CraftshopConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    notes.push(ConfigNote::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notes.push(ConfigNote::new(Level::Debug, format!("Config: {:?}", config)));
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<CraftshopConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut Vec<ConfigNote>) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Failed to create config directory: {}", e),
        ));
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Failed to write default config: {}", e),
        ));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &CraftshopConfig,
    cli: &CliOverrides,
    notes: &mut Vec<ConfigNote>,
) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notes)
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &CraftshopConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notes: &mut Vec<ConfigNote>,
) -> ResolvedConfig {
    // Popup delay: CLI → env → config → default
    let popup_delay = cli
        .popup_ms
        .or_else(|| parse_env(&env, "CRAFTSHOP_POPUP_MS", notes))
        .or(config.popup.dismiss_after_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_POPUP_DELAY);

    // Stale timers: CLI → env → config → default
    let dismiss_policy = cli
        .stale_timers
        .or_else(|| env("CRAFTSHOP_STALE_TIMERS").and_then(|v| parse_policy(&v, notes)))
        .or(config.popup.stale_timers)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env("CRAFTSHOP_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|v| match LevelFilter::from_str(&v) {
            Ok(level) => Some(level),
            Err(_) => {
                notes.push(ConfigNote::new(
                    Level::Warn,
                    format!("Unknown log level '{}', using {}", v, DEFAULT_LOG_LEVEL),
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        popup_delay,
        dismiss_policy,
        log_file,
        log_level,
    }
}

fn parse_env(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    notes: &mut Vec<ConfigNote>,
) -> Option<u64> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Ignoring {}={:?}: {}", key, raw, e),
            ));
            None
        }
    }
}

fn parse_policy(raw: &str, notes: &mut Vec<ConfigNote>) -> Option<DismissPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "supersede" => Some(DismissPolicy::Supersede),
        "legacy" => Some(DismissPolicy::Legacy),
        other => {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Unknown stale timer policy '{}'", other),
            ));
            None
        }
    }
}
