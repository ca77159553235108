/// Initializes logging for the pattern demos.
///
/// Output goes to stderr so it never mixes with the lines a demo prints. Verbosity comes
/// from `RUST_LOG`:
/// - `RUST_LOG=debug` - one event per created worker or adapted vehicle
/// - `RUST_LOG=pattern_recipes=trace` - everything, for this crate only
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Demo started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
