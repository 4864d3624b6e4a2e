use colored::Colorize;
use human_panic::setup_panic;

use sitecheck::{checker, cli_ui, Config};

#[tokio::main]
async fn main() {
    let config = Config::get();

    setup_panic!();

    match checker::check_site(&config).await {
        Ok(outcome) => println!("{}", cli_ui::colorize(&outcome.text, outcome.severity)),
        Err(e) => {
            // Anything the checker doesn't classify as a connection failure is
            // unrecoverable: surface it and exit non-zero.
            eprintln!("Error: {}", format!("{}", e).red());
            std::process::exit(1);
        }
    }
}
