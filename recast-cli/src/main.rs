//! Recast CLI - Command-line interface
//!
//! Exercises the receiver's resolution core against a real content
//! repository from the command line.

mod commands;

use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "recast")]
#[command(about = "Content resolution core for a Cast-style media receiver")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = commands::handle_command(cli.command).await {
        error!("command failed: {e}");
        eprintln!("{}", e.user_message());
        std::process::exit(if e.is_sender_error() { 2 } else { 1 });
    }
}
