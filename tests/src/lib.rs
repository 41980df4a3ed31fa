mod exec_log;
pub use exec_log::ExecLog;

pub mod fixtures;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

/// Routes `tracing` output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
