//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Default filter: debug for this crate in debug builds, info otherwise.
/// Network and GPU stacks stay at warn.
fn default_directives() -> String {
    let level = if cfg!(debug_assertions) { "debug" } else { "info" };
    [
        format!("rug_catalog={}", level),
        "info".to_string(),
        "wgpu_core=warn".to_string(),
        "wgpu_hal=warn".to_string(),
        "naga=warn".to_string(),
        "cosmic_text=warn".to_string(),
        "reqwest=warn".to_string(),
        "hyper_util=warn".to_string(),
    ]
    .join(",")
}

/// Install the global subscriber. `RUST_LOG` overrides the defaults.
pub fn init() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
}
