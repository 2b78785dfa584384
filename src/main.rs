//! # tutor-chat-format
//!
//! Command-line front end for the chat message formatter: reads a message,
//! formats it, and prints a terminal preview, an outline, or JSON.

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables (TUTOR_CHAT_FORMAT_*) from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::dispatch(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
