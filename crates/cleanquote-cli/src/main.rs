//! Cleanquote - cleaning job time and price estimation
//!
//! A CLI front end for the estimate calculator, the remote pricing API, and
//! the dashboard's persisted UI state.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
