use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CartCommands, CatalogCommands, QuoteArgs};

/// Plan selection cart for security consulting packages
///
/// Browse the package catalog, price packages for your company size, and
/// collect them in a cart that persists between runs. Packages that cannot be
/// combined with something already in the cart are refused.
#[derive(Parser)]
#[command(version, about, name = "bastion")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bastion/bastion.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON catalog file replacing the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Price employee counts below the smallest bracket at the first bracket
    /// instead of the last
    #[arg(long, global = true)]
    pub clamp_brackets: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Bastion CLI
///
/// - `catalog`: Browse packages and check catalog consistency
/// - `quote`: Price a package without touching the cart
/// - `cart`: Add, remove and check out selected packages
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the package catalog
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Price a package for a company size
    #[command(alias = "q")]
    Quote(QuoteArgs),
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
}
