use tracing_forest::{ForestLayer, util::LevelFilter};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: `INFO` by default, overridable through `RUST_LOG`.
///
/// Returns `false` when a global subscriber is already installed, in which case
/// the existing one keeps receiving events.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .try_init()
        .is_ok()
}
