//! Configuration validation command.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::{Config, ServiceConfig};

/// Validate a configuration file and print what it resolves to.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    for (role, service) in [
        ("orchestrator", &config.alpha),
        ("worker A", &config.bravo),
        ("worker B", &config.charlie),
    ] {
        print_service(role, service);
    }

    output::section("logging");
    output::key_value("level", &config.logging.level);
    output::key_value("console", config.logging.console);
    output::key_value("rotate at", format!("{} bytes", config.logging.max_file_bytes));
    output::key_value("backups", config.logging.max_backups);
    Ok(())
}

fn print_service(role: &str, service: &ServiceConfig) {
    output::section(&format!("{} ({role})", service.name));
    output::key_value("version", &service.version);
    output::key_value("mode", service.mode);
    output::key_value("log file", service.log_file.display());
}
