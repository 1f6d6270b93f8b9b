mod iterator;

/// Opt-in log output for debugging a failing test: `RUST_LOG=debug cargo test`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
