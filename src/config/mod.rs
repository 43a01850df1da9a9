//
//  ibm-cis
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Configuration for the CIS SDK and the `cis` command-line tool.
//!
//! ## Overview
//!
//! Service settings (credentials, service URL, CRN and zone) can come from
//! three places, highest precedence first:
//!
//! 1. Environment variables, e.g. `DNS_RECORDS_APIKEY`, `DNS_RECORDS_CRN`
//! 2. An IBM credentials file (`IBM_CREDENTIALS_FILE`, else
//!    `./ibm-credentials.env`, else `~/ibm-credentials.env`)
//! 3. The TOML config file, section `[services.<name>]`
//!
//! [`ExternalConfig`] merges them for one service name.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/cis/config.toml`
//! - **macOS**: `~/Library/Application Support/cis/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\cis\config.toml`
//!
//! The `CIS_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! output = "table"
//! timeout = 30
//!
//! [services.dns_records]
//! apikey = "..."
//! crn = "crn:v1:bluemix:public:internet-svcs:global:a/123:456::"
//! zone_identifier = "023e105f4ecef8ad9ca31a8372d0c353"
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Config and credentials file I/O
//! - [`external`]: Merged per-service external configuration

mod external;
mod file;

pub use external::*;
pub use file::*;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CIS_CONFIG";

/// The root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    /// Per-service settings keyed by service name
    #[serde(default)]
    pub services: BTreeMap<String, ServiceConfig>,
}

/// General CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Default output format, `table` or `json`
    #[serde(default = "default_output")]
    pub output: String,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: None,
        }
    }
}

/// Settings for one service name.
///
/// Field names match the suffixes of the environment variables, lower-cased.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

impl ServiceConfig {
    /// Field names accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: &'static [&'static str] = &[
        "auth_type",
        "apikey",
        "auth_url",
        "client_id",
        "client_secret",
        "bearer_token",
        "username",
        "password",
        "url",
        "disable_ssl",
        "crn",
        "zone_identifier",
        "zone_id",
    ];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "auth_type" => self.auth_type.clone(),
            "apikey" => self.apikey.clone(),
            "auth_url" => self.auth_url.clone(),
            "client_id" => self.client_id.clone(),
            "client_secret" => self.client_secret.clone(),
            "bearer_token" => self.bearer_token.clone(),
            "username" => self.username.clone(),
            "password" => self.password.clone(),
            "url" => self.url.clone(),
            "disable_ssl" => self.disable_ssl.map(|b| b.to_string()),
            "crn" => self.crn.clone(),
            "zone_identifier" => self.zone_identifier.clone(),
            "zone_id" => self.zone_id.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "auth_type" => &mut self.auth_type,
            "apikey" => &mut self.apikey,
            "auth_url" => &mut self.auth_url,
            "client_id" => &mut self.client_id,
            "client_secret" => &mut self.client_secret,
            "bearer_token" => &mut self.bearer_token,
            "username" => &mut self.username,
            "password" => &mut self.password,
            "url" => &mut self.url,
            "disable_ssl" => {
                self.disable_ssl = Some(crate::util::parse_bool(&value));
                return true;
            }
            "crn" => &mut self.crn,
            "zone_identifier" => &mut self.zone_identifier,
            "zone_id" => &mut self.zone_id,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Present fields as `(key, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

impl Config {
    /// Loads the configuration, or the defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Config file location, honouring `CIS_CONFIG`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.get(name)
    }

    /// Reads a dotted key: `core.output`, `core.timeout` or
    /// `services.<name>.<field>`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key.split_once('.') {
            Some(("core", "output")) => Some(self.core.output.clone()),
            Some(("core", "timeout")) => self.core.timeout.map(|t| t.to_string()),
            Some(("services", rest)) => {
                let (service, field) = rest.rsplit_once('.')?;
                self.services.get(service)?.get(field)
            }
            _ => None,
        }
    }

    /// Sets a dotted key. Returns `false` for unknown keys or invalid values.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key.split_once('.') {
            Some(("core", "output")) => match value.as_str() {
                "table" | "json" => {
                    self.core.output = value;
                    true
                }
                _ => false,
            },
            Some(("core", "timeout")) => match value.parse() {
                Ok(seconds) => {
                    self.core.timeout = Some(seconds);
                    true
                }
                Err(_) => false,
            },
            Some(("services", rest)) => match rest.rsplit_once('.') {
                Some((service, field))
                    if !service.is_empty() && ServiceConfig::KEYS.contains(&field) =>
                {
                    self.services
                        .entry(service.to_string())
                        .or_default()
                        .set(field, value)
                }
                _ => false,
            },
            _ => false,
        }
    }
}
