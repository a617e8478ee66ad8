//! Bastion CLI Application
//!
//! Command-line front-end for the plan catalog, pricing calculator and cart.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bastion_core::{BracketFallback, ShopBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        clamp_brackets,
        no_color,
        command,
    } = Args::parse();

    let fallback = if clamp_brackets {
        BracketFallback::ClampToRange
    } else {
        BracketFallback::LastBracket
    };

    let shop = ShopBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog_file)
        .with_bracket_fallback(fallback)
        .build()
        .context("Failed to initialize shop")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Bastion started with {fallback} bracket fallback");

    let cli = Cli::new(shop, renderer);
    match command {
        Some(Commands::Catalog { command }) => cli.handle_catalog_command(command),
        Some(Commands::Quote(args)) => cli.quote(&args.into()),
        Some(Commands::Cart { command }) => cli.handle_cart_command(command),
        None => cli.show_cart(),
    }
}
