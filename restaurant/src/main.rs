//! Main entry point for the restaurant binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use restaurant::{
    App, AppConfig, RestaurantResult, Route,
    services::{ClockIdGenerator, RealConsole},
};
use shared::{CatalogId, logging};

/// Browse a restaurant menu, build an order, or manage the menu as the owner
#[derive(Parser)]
#[command(name = "restaurant")]
#[command(about = "Restaurant menu browsing and ordering in the terminal")]
pub struct Args {
    /// Log level (trace, debug, info, warn, error); logs go to stderr
    #[arg(long)]
    pub log_level: Option<String>,

    /// Menu to start on (1, 2 or 3)
    #[arg(long)]
    pub catalog: Option<CatalogId>,

    /// Read configuration from this file instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one of the built-in menus and exit
    Catalog {
        /// Menu number (1, 2 or 3)
        number: CatalogId,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> RestaurantResult<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.env_file.as_deref())?.with_overrides(args.catalog, args.log_level);
    logging::init_tracing_with_level(Some(&config.log_level));

    if let Some(Command::Catalog { number, json }) = args.command {
        if json {
            println!("{}", number.to_json()?);
        } else {
            print!("{}", number.to_text());
        }
        return Ok(());
    }

    let mut app = App::new(&config, RealConsole::stdio(), ClockIdGenerator::new());
    if let Err(error) = app.run().await {
        logging::log_error(&Route::Welcome, "Session", &error);
        return Err(error);
    }

    logging::log_success(&Route::Welcome, "Session ended");
    Ok(())
}
