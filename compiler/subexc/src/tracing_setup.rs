//! Tracing subscriber for the `subex` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Call this once at startup. Safe to call multiple times. Nothing is
/// installed unless `RUST_LOG` is set, e.g. `RUST_LOG=subex_eval=trace`.
/// Output is indented by span, so nested groups and subscripts show as
/// nested blocks.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
