//! Tracing subscriber bootstrap for the CLI process.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default logging target when `RUST_LOG` is not provided.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configure and install the global tracing subscriber.
///
/// Installation failures (another subscriber already set globally) are
/// ignored so the helper can be invoked more than once in-process.
pub(crate) fn init() {
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(DEFAULT_LOG_LEVEL))
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .try_init();
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tolerates_repeated_installation() {
        init();
        init();
    }
}
