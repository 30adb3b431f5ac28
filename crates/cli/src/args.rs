use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inventory", version, about = "Track item quantities in a JSON file")]
pub struct Cli {
    /// Inventory file (overrides `inventory.data_file` from the config)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the built-in demo sequence (default)
    Demo {
        #[arg(long)]
        threshold: Option<i64>,
    },
    /// Add stock for an item
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove stock for an item; the item disappears once it reaches zero
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Print the quantity of one item
    Get { item: String },
    /// Print every item and its quantity
    Report,
    /// List items below the low-stock threshold
    Low {
        #[arg(long)]
        threshold: Option<i64>,
    },
}
