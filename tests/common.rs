use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a tracing subscriber that writes through the test harness, once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}
