use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use fintrack_core::parse_time_zone;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_fintrack_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub rules: RulesSection,
    pub export: ExportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesSection {
    /// Classification rule file (`class:` / `include:` / `exclude:` lines)
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    /// Directory the dated CSV is written to when `--out` is not given
    pub output_dir: PathBuf,
    /// IANA zone used for the Date column
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RulesSection {
                path: PathBuf::from("classification.txt"),
            },
            export: ExportSection {
                output_dir: PathBuf::from("."),
                timezone: "America/Costa_Rica".to_string(),
            },
        }
    }
}

impl Config {
    pub fn time_zone(&self) -> Result<Tz> {
        parse_time_zone(&self.export.timezone)
            .ok_or_else(|| anyhow!("invalid timezone: {}", self.export.timezone))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_fintrack_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
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
