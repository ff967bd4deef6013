use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::cli::ItemCommands;

/// Shopping list with a server-rendered web interface
///
/// Run `trolley serve` to start the web application, or use the `item`
/// commands to work on the same list from the terminal.
#[derive(Parser)]
#[command(version, about, name = "trolley")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trolley/shopping.db
    #[arg(long, global = true, env = "TROLLEY_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the list is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage list items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TROLLEY_ADDR", default_value = "0.0.0.0:8000")]
    pub addr: SocketAddr,
}
