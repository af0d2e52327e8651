//! Tracing setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const VERBOSE_FILTER: &str = "info,cleanquote_app=debug,cleanquote_infra=debug,cleanquote_store=debug";

/// Initialize tracing. `RUST_LOG` wins over the verbosity flag.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
