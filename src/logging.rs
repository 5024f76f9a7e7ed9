use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding filter directives for [`init_tracing`].
pub const LOG_ENV_VAR: &str = "UNISTATE_LOG";

/// Initialize a stderr tracing subscriber for applications embedding a handler.
///
/// Filter directives come from `UNISTATE_LOG`, then `RUST_LOG`, defaulting to
/// `info`. Handler internals log at `debug` (lifecycle, observer registry)
/// and `trace` (every fold and delivery), so `UNISTATE_LOG=unistate=trace`
/// shows the full command flow.
///
/// Safe to call more than once: later calls are ignored when a global
/// subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_ignored() {
        init_tracing();
        init_tracing();
        tracing::debug!("subscriber installed");
    }
}
