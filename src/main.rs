use clap::Parser;

use triad::cli::{self, output, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let result = match Cli::parse().command() {
        Commands::Run(args) => cli::run::execute(&args),
        Commands::Check(arg) => cli::check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
