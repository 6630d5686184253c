//! Handler for the `run` command.

use crate::app::App;
use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute the run command and print both merged outputs.
pub fn execute(args: &RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.quiet {
        config.logging.console = false;
    }
    config.validate()?;

    let response = App::run(&config, &args.request_id, args.request())?;

    println!("BRAVO: {}", response.bravo_manipulated_content);
    println!("CHARLIE: {}", response.charlie_manipulated_content);
    Ok(())
}
