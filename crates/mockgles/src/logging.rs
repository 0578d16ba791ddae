use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "mockgles=trace";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global `fmt` subscriber. Panics if one is already set.
///
/// The filter defaults to `mockgles=trace` and honours `RUST_LOG`.
///
/// # Example
/// ```no_run
/// mockgles::logging::init();
///
/// let mock = mockgles::MockGles::new();
/// mock.proc_table().pop_debug_group();
/// ```
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(filter()).init();
}

/// Install a subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_test_writer()
        .try_init();
}
