pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileSource, MemorySource};
pub use config::{CliConfig, Command, Settings, TomlConfig};
pub use core::{store::InventoryStore, store::LoadReport, ItemValue, ShoeRecord};
pub use domain::ports::InventorySource;
pub use utils::error::{InventoryError, Result};
