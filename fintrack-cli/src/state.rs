use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$FINTRACK_HOME`, or `~/.fintrack` when unset.
pub fn fintrack_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FINTRACK_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".fintrack"))
}

pub fn ensure_fintrack_home() -> Result<PathBuf> {
    let dir = fintrack_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
