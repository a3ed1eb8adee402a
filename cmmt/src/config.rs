//! Configuration module for the cmmt CLI.
//!
//! Settings come from a `cmmt.toml` file. Every field has a default, so a
//! missing file or a partial file both produce a usable configuration.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use cmmc_lex::{EscapeSet, LexerConfig};

use crate::error::{CmmtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cmmt.toml";

/// Fallback worker count when the CPU count does not fit in a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scanner settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Characters accepted after a backslash inside string literals.
    #[serde(default = "default_escapes")]
    pub escapes: String,
}

/// Output settings for the `tokens` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Prefix each token with its `line:column`.
    #[serde(default)]
    pub positions: bool,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

/// Token dump format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

fn default_escapes() -> String {
    EscapeSet::DEFAULT_CHARS.to_string()
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            lexer: LexerSection::default(),
            output: OutputConfig::default(),
            check: CheckConfig::default(),
        }
    }
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            escapes: default_escapes(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/cmmt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CmmtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CmmtError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the commands cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.lexer_config()?;
        if self.check.jobs == 0 {
            return Err(CmmtError::Config(
                "check.jobs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the scanner configuration from the `[lexer]` section.
    pub fn lexer_config(&self) -> Result<LexerConfig> {
        let escapes: EscapeSet = self.lexer.escapes.parse().map_err(|e| {
            CmmtError::Config(format!(
                "invalid lexer.escapes {:?}: {}",
                self.lexer.escapes, e
            ))
        })?;
        Ok(LexerConfig::default().with_escapes(escapes))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cmmt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cmmt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
