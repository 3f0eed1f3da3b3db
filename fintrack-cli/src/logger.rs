use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Compact stderr logging. `RUST_LOG` wins over the verbosity flag.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "fintrack=debug,fintrack_core=debug,fintrack_ingest=debug,fintrack_export=debug"
    } else {
        "fintrack=info,fintrack_ingest=info,fintrack_export=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
