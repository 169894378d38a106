/// Installs the global tracing subscriber. Call once, before anything logs.
///
/// Logs go to stderr so they never interleave with the front end on stdout.
/// An unparsable `filter` falls back to `warn`.
pub fn setup_tracing(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
