/// Installs the process-wide tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` (default `info`). Output goes to stderr so
/// stdout only carries what the program prints on purpose.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=user_registry::user_actor=debug cargo run
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
