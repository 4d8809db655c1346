use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::format::FormatOptions;

pub const CONFIG_ENV: &str = "HMS_FMT_CONFIG";
const CONFIG_FILE: &str = "hms_fmt.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub path: PathBuf,
    pub options: FormatOptions,
}

pub fn load_settings() -> Result<Option<Settings>> {
    for candidate in default_config_paths() {
        if !candidate.exists() {
            continue;
        }
        let contents = fs::read_to_string(&candidate).with_context(|| {
            format!(
                "failed to read hms_fmt configuration at {}",
                candidate.display()
            )
        })?;
        let options = parse_config(&contents).with_context(|| {
            format!(
                "failed to parse hms_fmt configuration at {}",
                candidate.display()
            )
        })?;
        return Ok(Some(Settings {
            path: candidate,
            options,
        }));
    }
    Ok(None)
}

pub fn parse_config(contents: &str) -> Result<FormatOptions> {
    serde_json::from_str(contents).context("configuration file is not a valid options object")
}

pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }

    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg).join("hms_fmt").join(CONFIG_FILE));
    }

    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(".config/hms_fmt").join(CONFIG_FILE));
    }

    paths.push(PathBuf::from(CONFIG_FILE));
    paths.push(PathBuf::from("config").join(CONFIG_FILE));

    paths
}
