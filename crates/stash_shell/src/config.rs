//! Shell configuration
//!
//! Decides which backpack the shell starts with. Sources, later ones
//! overriding earlier ones:
//!
//! 1. Config file: `--config <path>`, else `STASH_CONFIG`, else `stash.toml`
//!    in the working directory when present
//! 2. Environment variables: `STASH_VARIANT`, `STASH_STORE`,
//!    `STASH_CAPACITY`, `STASH_TRUNCATE`, `STASH_COLOR`
//! 3. Command line flags: `--linked`, `--array`, `--components`, `--loot`,
//!    `--truncate`, `--no-color`
//!
//! # Example Config File
//!
//! ```toml
//! variant = "components"   # loot, components
//! store = "array"          # array, linked
//! capacity = 12            # defaults to 10 (loot) or 20 (components)
//! truncate_fields = false
//! prompt = "stash> "
//! color = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stash_inventory::{LengthPolicy, Variant, MAX_CAPACITY};

use crate::session::StoreKind;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "stash.toml";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Backpack flavour
    pub variant: Variant,
    /// Backing store
    pub store: StoreKind,
    /// Capacity override (defaults per variant)
    pub capacity: Option<usize>,
    /// Truncate over-long names instead of rejecting them
    pub truncate_fields: bool,
    /// Prompt string
    pub prompt: String,
    /// Colored output
    pub color: bool,
    /// File the config was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Loot,
            store: StoreKind::Array,
            capacity: None,
            truncate_fields: false,
            prompt: "stash> ".to_string(),
            color: true,
            config_path: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration from all sources
    pub fn load(args: &[String]) -> Result<Self, ConfigError> {
        let explicit = config_arg(args)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("STASH_CONFIG").map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::load_from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override with environment variables read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("STASH_VARIANT") {
            match value.parse() {
                Ok(variant) => {
                    self.variant = variant;
                    log::info!("Variant from env: {}", self.variant);
                }
                Err(e) => log::warn!("Ignoring STASH_VARIANT: {}", e),
            }
        }

        if let Some(value) = lookup("STASH_STORE") {
            match value.parse() {
                Ok(store) => {
                    self.store = store;
                    log::info!("Store from env: {}", self.store);
                }
                Err(e) => log::warn!("Ignoring STASH_STORE: {}", e),
            }
        }

        if let Some(value) = lookup("STASH_CAPACITY") {
            match value.trim().parse() {
                Ok(capacity) => self.capacity = Some(capacity),
                Err(_) => log::warn!("Ignoring STASH_CAPACITY: not a number: {}", value),
            }
        }

        if let Some(value) = lookup("STASH_TRUNCATE") {
            self.truncate_fields = is_truthy(&value);
        }

        if let Some(value) = lookup("STASH_COLOR") {
            self.color = is_truthy(&value);
        }
    }

    /// Override with command line flags
    pub fn apply_args(&mut self, args: &[String]) {
        for arg in args {
            match arg.as_str() {
                "--linked" => self.store = StoreKind::Linked,
                "--array" => self.store = StoreKind::Array,
                "--components" => self.variant = Variant::Components,
                "--loot" => self.variant = Variant::Loot,
                "--truncate" => self.truncate_fields = true,
                "--no-color" => self.color = false,
                _ => {}
            }
        }
    }

    /// Check the combined configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacity = self.effective_capacity();
        if capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "capacity {} exceeds the maximum of {}",
                capacity, MAX_CAPACITY
            )));
        }
        Ok(())
    }

    /// Capacity the backpack is created with
    pub fn effective_capacity(&self) -> usize {
        self.capacity.unwrap_or_else(|| self.variant.default_capacity())
    }

    /// Policy for over-long fields
    pub fn length_policy(&self) -> LengthPolicy {
        if self.truncate_fields {
            LengthPolicy::Truncate
        } else {
            LengthPolicy::Reject
        }
    }
}

fn config_arg(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            return iter.next().map(|s| s.as_str());
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path);
        }
    }
    None
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
