#![allow(dead_code)]

pub(crate) fn check_send<T: Send>() {}
pub(crate) fn check_sync<T: Sync>() {}

/// Route the crate's log records to the test output, once per test binary.
pub(crate) fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(::log::LevelFilter::Trace)
        .try_init();
}
