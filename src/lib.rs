// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod present;
pub mod source;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::WatchConfig;
use crate::errors::{FstalkError, Result};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - argument validation
/// - the blocking watch loop (on a blocking worker thread)
/// - Ctrl-C handling
///
/// Returns `Ok(())` when usage was printed or the user interrupted the
/// watch; any other return is an error.
pub async fn run(args: CliArgs) -> Result<()> {
    let Some(cfg) = WatchConfig::from_args(&args)? else {
        print!("{}", cli::usage());
        return Ok(());
    };

    let worker = tokio::task::spawn_blocking(move || watch(cfg));

    tokio::select! {
        joined = worker => {
            joined.map_err(|e| FstalkError::Other(e.into()))?
        }
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|e| FstalkError::Other(e.into()))?;
            info!("interrupted; stopping watch");
            Ok(())
        }
    }
}

/// Register the watch and print events until a fatal error.
#[cfg(target_os = "linux")]
pub fn watch(cfg: WatchConfig) -> Result<()> {
    use crate::engine::{watch_loop, Correlator};
    use crate::present::Presenter;
    use crate::source::{InotifySource, NotificationSource};

    let mut source = InotifySource::new();
    let handle = source.register_watch(&cfg.path)?;
    info!(path = ?handle.path(), move_window = cfg.move_window, "to stalk");

    let mut correlator = Correlator::with_window(cfg.move_window);
    let presenter = if cfg.full_paths {
        Presenter::with_root(&cfg.path)
    } else {
        Presenter::new()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    watch_loop(&mut source, &mut correlator, &presenter, &mut out)
}

#[cfg(not(target_os = "linux"))]
pub fn watch(_cfg: WatchConfig) -> Result<()> {
    Err(FstalkError::Other(anyhow::anyhow!(
        "fstalk requires Linux inotify"
    )))
}
