mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::Cli;

fn main() {
    let args = Cli::parse();

    cli::logging::init(args.verbose);

    if let Err(e) = cli::commands::last_activity::execute(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
