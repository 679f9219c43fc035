mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use confhub_core::{logging, Config};

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = Config::load();

    let result = match cli.command {
        Command::Split {
            file,
            json,
            save,
            save_dir,
        } => commands::run_split(file, json, save, save_dir, &config),
        Command::Show {
            file,
            json,
            strip_hunk_headers,
        } => commands::run_show(file, json, strip_hunk_headers, &config),
        Command::Params {
            current,
            proposed,
            json,
            strict,
        } => commands::run_params(current, proposed, json, strict, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
