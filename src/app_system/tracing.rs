use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (from the
/// configuration) is used.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=stall_orders::clients=debug,info cargo run
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
