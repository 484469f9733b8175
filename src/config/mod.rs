pub mod cli;
pub mod toml_config;

pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::PathBuf;

pub const DEFAULT_INVENTORY_PATH: &str = "inventory.txt";

/// Effective settings after layering CLI flags over the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory_path: PathBuf,
    pub atomic_rewrite: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        let settings = Self::merge(cli, file.as_ref());
        settings.validate()?;
        Ok(settings)
    }

    /// CLI flags win; the file fills in whatever the command line left unset.
    pub fn merge(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let inventory = file.and_then(|f| f.inventory.as_ref());
        let logging = file.and_then(|f| f.logging.as_ref());

        let inventory_path = cli
            .inventory
            .clone()
            .or_else(|| inventory.and_then(|i| i.path.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_PATH));

        Self {
            inventory_path,
            atomic_rewrite: cli.atomic_rewrite
                || inventory.and_then(|i| i.atomic_rewrite).unwrap_or(false),
            verbose: cli.verbose || logging.and_then(|l| l.verbose).unwrap_or(false),
            json_logs: cli.json_logs || logging.and_then(|l| l.json).unwrap_or(false),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("inventory path", &self.inventory_path.to_string_lossy())
    }
}
