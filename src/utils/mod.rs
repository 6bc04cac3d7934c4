use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "split_register=info";

/// Initializes the global tracing subscriber; `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // A host may already own the global subscriber.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
