//! Common logging initializer.
//!

use eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Initialise the tracing stack.
///
/// Filters come from `RUST_LOG` when set, `default_filter` otherwise.  Output
/// is a compact single-line format unless `use_tree` asks for hierarchical
/// span output.
///
pub fn init_logging(use_tree: bool, default_filter: &str) -> Result<()> {
    // Load filters from environment
    //
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Do we want hierarchical output?
    //
    let (tree, fmt) = if use_tree {
        let tree = HierarchicalLayer::new(2)
            .with_ansi(true)
            .with_span_retrace(true)
            .with_span_modes(true)
            .with_targets(true)
            .with_bracketed_fields(true);
        (Some(tree), None)
    } else {
        let fmt = fmt::layer().with_target(false).compact();
        (None, Some(fmt))
    };

    // Combine filter & format
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(fmt)
        .init();

    Ok(())
}
