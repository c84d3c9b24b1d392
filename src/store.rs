use crate::types::AppResult;
use anyhow::anyhow;
use directories;
use std::path::PathBuf;

pub static LOG_FILENAME: &str = "baggo.log";

pub fn store_path(filename: &str) -> AppResult<PathBuf> {
    let dirs = directories::ProjectDirs::from("kr", "cornhole", "baggo")
        .ok_or(anyhow!("Failed to get directories"))?;
    let config_dirs = dirs.config_dir();
    if !config_dirs.exists() {
        std::fs::create_dir_all(config_dirs)?;
    }
    let path = config_dirs.join(filename);
    Ok(path)
}
