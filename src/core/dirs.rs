use std::path::PathBuf;
use crate::core::error::TubeStatsError;

const APP_DIR: &str = "tubestats";

pub fn get_config_directory() -> Result<PathBuf, TubeStatsError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            match std::env::var("XDG_CONFIG_HOME") {
                Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => dirs::home_dir()
                    .ok_or(TubeStatsError::ConfigDirectoryNotFound)?
                    .join(".config"),
            }
        },
        "macos" => {
            dirs::home_dir()
                .ok_or(TubeStatsError::ConfigDirectoryNotFound)?
                .join("Library/Application Support")
        },
        _ => dirs::config_dir().ok_or(TubeStatsError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}
