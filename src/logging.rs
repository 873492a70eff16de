// logging.rs

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Installs the stderr subscriber. `ARGV_CODEC_LOG` wins over `RUST_LOG`;
/// `verbose` overrides both. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}
