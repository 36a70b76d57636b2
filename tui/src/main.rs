mod cli;
mod tui;

use std::process::exit;

fn main() {
    env_logger::init();
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        exit(1);
    }
}
