use crate::config::LoggingConfig;

/// Installs `env_logger`, with `RUST_LOG` taking precedence over the configured level.
///
/// Calling it again after a logger is installed is a no-op.
pub fn init(config: &LoggingConfig) {
    let env = env_logger::Env::new().default_filter_or(config.level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("Logger initialised with default filter '{}'", config.level);
    }
}
