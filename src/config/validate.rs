// src/config/validate.rs

use crate::config::{RawWatchConfig, WatchConfig};
use crate::errors::{FstalkError, Result};

impl TryFrom<RawWatchConfig> for WatchConfig {
    type Error = FstalkError;

    fn try_from(raw: RawWatchConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(WatchConfig {
            path: raw.path,
            full_paths: raw.full_paths,
            move_window: raw.move_window,
        })
    }
}

fn validate_raw_config(cfg: &RawWatchConfig) -> Result<()> {
    ensure_has_path(cfg)?;
    validate_move_window(cfg)?;
    Ok(())
}

fn ensure_has_path(cfg: &RawWatchConfig) -> Result<()> {
    if cfg.path.as_os_str().is_empty() {
        return Err(FstalkError::Config(
            "watch path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_move_window(cfg: &RawWatchConfig) -> Result<()> {
    if cfg.move_window == 0 {
        return Err(FstalkError::Config(
            "--move-window must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
