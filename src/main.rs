//! ldp-viewer CLI entry point.
//!
//! Parses command-line arguments, runs a single render against the
//! configured asset server, and reports failures with the crate's
//! user-facing error format.

use clap::Parser;
use ldp_viewer::cli::Cli;
use ldp_viewer::core::display_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.execute().await {
        display_error(&error);
        std::process::exit(1);
    }
}
