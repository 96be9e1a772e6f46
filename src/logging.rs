// src/logging.rs
// =============================================================================
// Logging setup shared by both binaries.
//
// Logs go to stderr so stdout stays reserved for the report itself.
// RUST_LOG overrides the default filter.
// =============================================================================

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Targets our events are recorded under: the library and both binaries
const TARGETS: [&str; 3] = ["fakeclock_scripts", "extract_readme_example", "github_activity"];

/// Builds the default filter directive for this crate
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the logging system
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
