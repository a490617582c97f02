// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ConfigError;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Kantingo", "kantingo"));

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const API_BASE_VAR: &str = "KANTINGO_API_BASE";
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
}

/// `.env` inside the platform config dir, e.g. `~/.config/kantingo/.env`.
pub fn config_env_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join(".env"))
}

impl Settings {
    /// Loads `.env` files (working directory first, then the config dir) and
    /// reads settings from the environment. Variables already set win.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        if let Some(path) = config_env_path().filter(|p| p.exists()) {
            dotenvy::from_path(&path).map_err(|source| ConfigError::File {
                path: path.display().to_string(),
                source,
            })?;
            debug!(path = %path.display(), "loaded config .env");
        }
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential(API_KEY_VAR))?;
        let base_url = lookup(API_BASE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Ok(Self { api_key, base_url })
    }
}
