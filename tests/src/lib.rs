pub use adx_test::{block_on, AdxTest};

pub use cluster::MemoryCluster;

mod exec_log;
pub use exec_log::ExecLog;

pub use logging_driver::{DriverOp, LoggingDriver};

use std::sync::Once;

/// Installs a `tracing` subscriber writing through the test harness.
///
/// Filtered by `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Defines one `#[test]` per listed async function, each receiving a fresh
/// [`AdxTest`].
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::AdxTest::new();
                    $crate::block_on(super::$f(&mut test));
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
