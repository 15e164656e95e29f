use std::io;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter variable checked first; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "LOCC_LOG";

/// Install the tracing subscriber.
///
/// Nothing is installed unless `LOCC_LOG` or `RUST_LOG` holds a filter.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
            return;
        };
        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(io::stderr)
                    .with_targets(true),
            )
            .init();
    });
}
