// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("ng.nairatracker", "NairaTracker", "naira-tracker"));

pub const HOME_ENV: &str = "NAIRA_TRACKER_HOME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_currency_symbol() -> String {
    "₦".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            export_dir: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")
}

/// Directory holding the database. `NAIRA_TRACKER_HOME` wins over the platform default.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    Ok(project_dirs()?.data_dir().to_path_buf())
}

pub fn settings_path() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home).join("config.json"));
    }
    Ok(project_dirs()?.config_dir().join("config.json"))
}

pub fn parse_settings(raw: &str) -> Settings {
    match serde_json::from_str(raw) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed settings file");
            Settings::default()
        }
    }
}

pub fn load_settings() -> Settings {
    let path = match settings_path() {
        Ok(p) => p,
        Err(_) => return Settings::default(),
    };
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(_) => Settings::default(),
    }
}

/// Where exports land when no explicit output path is given.
pub fn export_dir(settings: &Settings) -> PathBuf {
    settings
        .export_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}
