use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use society_entry::ParserOptions;

use crate::state::ensure_society_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// IANA zone used for "today" when the text has no date
    pub timezone: String,
    pub default_apartment_id: String,
    pub validate_dates: bool,
    pub legacy_placeholders: bool,
    /// Flat directory TOML used for lookups (optional)
    pub flats_file: Option<String>,
}

impl Default for ParserSection {
    fn default() -> Self {
        let options = ParserOptions::default();
        Self {
            timezone: "Asia/Kolkata".to_string(),
            default_apartment_id: options.default_apartment_id,
            validate_dates: options.validate_dates,
            legacy_placeholders: options.legacy_placeholders,
            flats_file: None,
        }
    }
}

impl ParserSection {
    pub fn options(&self) -> ParserOptions {
        ParserOptions {
            default_apartment_id: self.default_apartment_id.clone(),
            validate_dates: self.validate_dates,
            legacy_placeholders: self.legacy_placeholders,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_society_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
