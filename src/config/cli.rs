use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "shoe-stock")]
#[command(about = "Shoe inventory tracker backed by a comma-separated text file")]
pub struct CliConfig {
    /// Inventory file to load and persist to [default: inventory.txt]
    #[arg(long, short = 'i', global = true)]
    pub inventory: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Rewrite the inventory through a temp file and rename
    #[arg(long, global = true)]
    pub atomic_rewrite: bool,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (default)
    Menu,
    /// Show every shoe
    List {
        #[arg(long)]
        json: bool,
    },
    /// Look up a shoe by code, ignoring case
    Find { code: String },
    /// Capture a new shoe
    Add {
        country: String,
        code: String,
        product: String,
        cost: String,
        quantity: String,
    },
    /// Add stock to the shoe with the lowest quantity
    Restock {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show the shoe with the highest quantity
    Highest,
    /// Show cost x quantity per item
    Values {
        #[arg(long)]
        json: bool,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}
