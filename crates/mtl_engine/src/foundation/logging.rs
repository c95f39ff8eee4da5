//! Logging utilities

/// Initialize logging with a fallback level used when `RUST_LOG` is not set
///
/// Panics if a logger is already installed.
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_installs_logger() {
        init_with_level(log::LevelFilter::Info);
        assert_ne!(log::max_level(), log::LevelFilter::Off);
    }
}
