//! Logging setup.
//!
//! Logs go to stderr so snapshot JSON on stdout stays machine-readable.
//! `RUST_LOG` wins when set; otherwise INFO, or DEBUG for the aether crates
//! when `DEBUG_LOGGING=1`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEBUG_DIRECTIVES: &str = "info,aether_sim=debug,aether_boss=debug,aether_app=debug";

fn default_directives(debug_logging: bool) -> &'static str {
    if debug_logging {
        DEBUG_DIRECTIVES
    } else {
        "info"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok_and(|v| v != "0");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug_logging)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
