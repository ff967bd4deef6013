//! Trolley: a shopping list served as server-rendered HTML.
//!
//! `trolley serve` starts the web application; the `item` subcommands work
//! on the same database from the terminal.

mod args;
mod cli;
mod renderer;
mod server;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trolley_core::ShoppingListBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let list = ShoppingListBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open shopping list")?;

    match command {
        Some(Commands::Serve(serve)) => {
            info!("Starting web server on {}", serve.addr);
            server::serve(list, serve.addr).await
        }
        Some(Commands::Item { command }) => {
            Cli::new(list, TerminalRenderer::new(!no_color))
                .handle_item_command(command)
                .await
        }
        None => {
            Cli::new(list, TerminalRenderer::new(!no_color))
                .list_items()
                .await
        }
    }
}
