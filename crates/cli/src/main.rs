mod cli;
mod error;
mod export;
mod render;
mod summary;

use std::process;

use clap::Parser;
use cli::Cli;
use cli::Commands;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let result = match cli.command {
        Commands::Render(args) => render::render(args),
        Commands::Summary(args) => summary::summary(args),
        Commands::Export(args) => export::export(args),
        Commands::Controls(args) => export::controls(args),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}
