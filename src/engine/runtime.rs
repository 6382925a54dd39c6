// src/engine/runtime.rs

use std::io::Write;

use tracing::{debug, info, warn};

use crate::engine::Correlator;
use crate::errors::{FstalkError, Result};
use crate::present::Presenter;
use crate::source::NotificationSource;

/// Blocking pull loop: ask the correlator for the next event, print it,
/// repeat.
///
/// - Each finalized event becomes one line on `out`.
/// - Recoverable errors (a dropped move) are logged and the loop continues.
/// - Any other error ends the loop and is returned to the caller.
///
/// The loop never returns `Ok`; it runs until a fatal error or until the
/// process is terminated.
pub fn watch_loop<S, W>(
    source: &mut S,
    correlator: &mut Correlator,
    presenter: &Presenter,
    out: &mut W,
) -> Result<()>
where
    S: NotificationSource + ?Sized,
    W: Write + ?Sized,
{
    info!("fstalk event loop started");

    loop {
        let event = match correlator.next_event(source) {
            Ok(event) => event,
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "skipping event");
                continue;
            }
            Err(err) => {
                debug!(error = %err, "event loop stopping");
                return Err(err);
            }
        };

        debug!(?event, "finalized event");

        writeln!(out, "{}", presenter.render(&event))
            .and_then(|_| out.flush())
            .map_err(FstalkError::Output)?;
    }
}
