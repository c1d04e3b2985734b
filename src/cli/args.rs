//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// localcart - persistent local storage with a shopping cart
///
/// Keeps string key-value pairs per origin on disk and stores a cart of
/// product quantities under the "cart" key.
#[derive(Parser, Debug)]
#[command(name = "localcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LOCALCART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Origin whose store to use (scheme://host[:port])
    #[arg(long, global = true, env = "LOCALCART_ORIGIN")]
    pub origin: Option<String>,

    /// Directory holding store files
    #[arg(long, global = true, env = "LOCALCART_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the cart, replacing any earlier quantity
    Add(AddArgs),

    /// Show the cart
    List(ListArgs),

    /// Work with raw store entries
    Store(StoreArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product name
    pub name: String,

    /// Quantity, stored as entered
    pub quantity: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "lines")]
    pub format: OutputFormat,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One display line per product
    Lines,
    /// Human-readable table
    Table,
    /// The stored JSON object
    Json,
}

/// Arguments for the store command
#[derive(Parser, Debug)]
pub struct StoreArgs {
    /// Subcommand for store
    #[command(subcommand)]
    pub action: StoreAction,
}

/// Store subcommands
#[derive(Subcommand, Debug)]
pub enum StoreAction {
    /// Print the value stored under a key
    Get {
        /// Key to read
        key: String,
    },

    /// Store a value under a key
    Set {
        /// Key to write
        key: String,
        /// Value to store
        value: String,
    },

    /// Remove a key
    Remove {
        /// Key to remove
        key: String,
    },

    /// List keys in insertion order
    Keys,

    /// Print the number of stored entries
    Len,

    /// Remove every entry for the origin
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., storage.origin)
        key: String,
        /// Value to set
        value: String,
    },
}
