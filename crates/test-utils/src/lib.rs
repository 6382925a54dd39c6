pub mod builders;
pub mod scripted_source;

pub use scripted_source::ScriptedSource;

use std::sync::Once;

use fstalk::engine::{Correlator, Event};
use fstalk::errors::FstalkError;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Pull events until the source runs dry, keeping recoverable errors in the
/// returned sequence.
pub fn drain(
    correlator: &mut Correlator,
    source: &mut ScriptedSource,
) -> Vec<Result<Event, FstalkError>> {
    let mut out = Vec::new();
    loop {
        match correlator.next_event(source) {
            Err(FstalkError::EndOfStream) => return out,
            Err(err) if !err.is_recoverable() => {
                out.push(Err(err));
                return out;
            }
            other => out.push(other),
        }
    }
}
