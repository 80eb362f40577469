// src/logging.rs
// Diagnostics go through the `log` facade to stderr; the report itself is
// printed to stdout by main.

use log::LevelFilter;

/// Initialize the logger: warnings by default, everything down to debug with
/// `--verbose`. RUST_LOG can still narrow it per module.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    log::debug!("Logger initialized with level: {:?}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(true);
        init_logger(false);
    }
}
