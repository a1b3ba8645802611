use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$SOCIETY_HOME`, else `~/.society`
pub fn society_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SOCIETY_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".society"))
}

pub fn ensure_society_home() -> Result<PathBuf> {
    let dir = society_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
