//! Masthead CLI - Convert Mermaid.js diagrams embedded in Markdown to PNG images

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let app = cli::MastheadApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
