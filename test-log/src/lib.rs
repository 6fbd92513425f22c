// Lets the `test` attribute be used on this crate's own tests.
extern crate self as containerofunique_test_log;

use containerofunique_log::TargetsExt;
use log::level_filters::LevelFilter;
use parking_lot::Once;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[doc(hidden)]
pub use log::Instrument;

pub use containerofunique_test_log_proc_macro::test;

static INITIALIZE: Once = Once::new();

#[doc(hidden)]
pub fn initialize() {
    INITIALIZE.call_once(|| {
        // Another test harness may have installed a global subscriber already.
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .with(
                Targets::new()
                    .with_default(LevelFilter::INFO)
                    .with_containerofunique_targets(LevelFilter::DEBUG)
                    .with_env(),
            )
            .try_init();
    });
}

/// The span every test body runs in.
#[doc(hidden)]
pub fn test_span(name: &'static str) -> log::Span {
    log::info_span!("test", name)
}

#[cfg(test)]
mod tests {
    use log::info;

    use crate::test;

    #[test]
    fn it_runs_sync_tests_inside_a_span() {
        info!("Running inside the test span");
        let current = log::Span::current();
        if !current.is_disabled() {
            assert_eq!(current.metadata().map(|m| m.name()), Some("test"));
        }
    }

    #[test]
    fn it_supports_result_returning_tests() -> Result<(), String> {
        let value: u32 = "42".parse().map_err(|e| format!("{e}"))?;
        assert_eq!(value, 42);
        Ok(())
    }
}
