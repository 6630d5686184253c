//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use std::path::Path;

use crate::infrastructure::config::{Config, LoggingConfig, ServiceConfig};

/// Default service identities with every log file under `dir` and the
/// console mirror disabled.
pub fn in_dir(dir: &Path) -> Config {
    Config {
        alpha: ServiceConfig::new("alpha", "v1.0.0", dir.join("log.svc.a.log")),
        bravo: ServiceConfig::new("bravo", "v2.0.0", dir.join("log.svc.b.log")),
        charlie: ServiceConfig::new("charlie", "v3.0.0", dir.join("log.svc.c.log")),
        logging: LoggingConfig {
            console: false,
            ..LoggingConfig::default()
        },
    }
}
