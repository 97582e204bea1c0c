mod cli_messages;
mod consts;
mod environment;
mod events;
mod feeds;
mod logging;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::environment::Environment;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Run without the terminal UI, logging feed events to the console.
        #[arg(long)]
        headless: bool,

        /// Override the backend base URL serving the weather and news feeds.
        #[arg(long, value_name = "BACKEND_URL")]
        backend_url: Option<String>,

        /// Disable the dashboard background color.
        #[arg(long)]
        no_background_color: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            backend_url,
            no_background_color,
        } => {
            let environment = Environment::from_override(backend_url);
            let session = session::setup_session(environment).await;

            let result = if headless {
                session::run_headless_mode(session).await
            } else {
                session::run_tui_mode(session, !no_background_color).await
            };

            if let Err(e) = result {
                crate::print_cmd_error!("Session failed", "{}", e);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
