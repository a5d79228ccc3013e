//! Creates the `tracing_subscriber` registry which
//! formats spans and events to standard output.
//!
//! Filtering follows the environment:
//! ```bash
//! RUST_LOG=vendnav=debug,vendnav_geo=info
//! ```

use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
///
/// Records emitted through the `log` facade are forwarded as well.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    // Initialise tracing with subscribers and environment filter
    let registry = Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer);

    if let Err(err) = registry.try_init() {
        log::warn!("Tracer already initialised. {err}");
    }
}
