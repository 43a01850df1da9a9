//
//  ibm-cis
//  config/external.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # External Service Configuration
//!
//! Merges the settings for one service name from the environment, the
//! credentials file and the TOML config file. Keys are the upper-case
//! suffixes shared by all three sources (`APIKEY`, `URL`, `CRN`, ...).
//! Each key is taken from the highest-precedence source that defines it.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use ibm_cis::config::ExternalConfig;
//!
//! let env = vec![("ZONES_APIKEY".to_string(), "from-env".to_string())];
//! let mut credentials = BTreeMap::new();
//! credentials.insert("ZONES_APIKEY".to_string(), "from-file".to_string());
//! credentials.insert("ZONES_CRN".to_string(), "crn:v1:x".to_string());
//!
//! let config = ExternalConfig::from_sources("zones", env, &credentials, None);
//! assert_eq!(config.get("APIKEY"), Some("from-env"));
//! assert_eq!(config.get("CRN"), Some("crn:v1:x"));
//! ```

use std::collections::BTreeMap;

use super::{read_credentials_file, Config, ServiceConfig};
use crate::api::common::CisError;
use crate::util::{env_prefix, parse_bool};

/// Keys recognised for every service.
pub const EXTERNAL_KEYS: &[&str] = &[
    "AUTH_TYPE",
    "APIKEY",
    "AUTH_URL",
    "CLIENT_ID",
    "CLIENT_SECRET",
    "BEARER_TOKEN",
    "USERNAME",
    "PASSWORD",
    "URL",
    "DISABLE_SSL",
    "CRN",
    "ZONE_IDENTIFIER",
    "ZONE_ID",
];

/// Settings for one service, merged from all external sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalConfig {
    service_name: String,
    values: BTreeMap<String, String>,
}

impl ExternalConfig {
    /// Loads the settings for `service_name` from the process environment,
    /// the credentials file and the config file.
    ///
    /// # Errors
    ///
    /// Returns [`CisError::Config`] if a file exists but cannot be read or
    /// parsed.
    pub fn load(service_name: &str) -> Result<Self, CisError> {
        let credentials = read_credentials_file().map_err(|e| CisError::Config(e.to_string()))?;
        let config = Config::load().map_err(|e| CisError::Config(format!("{:#}", e)))?;
        Ok(Self::from_sources(
            service_name,
            std::env::vars(),
            &credentials,
            config.service(service_name),
        ))
    }

    /// Merges explicit sources, highest precedence first.
    pub fn from_sources<I>(
        service_name: &str,
        env: I,
        credentials: &BTreeMap<String, String>,
        config: Option<&ServiceConfig>,
    ) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = format!("{}_", env_prefix(service_name));
        let mut values = BTreeMap::new();

        if let Some(config) = config {
            for (key, value) in config.entries() {
                values.insert(key.to_ascii_uppercase(), value);
            }
        }

        let scoped = |key: &str| key.strip_prefix(&prefix).filter(|k| EXTERNAL_KEYS.contains(k)).map(String::from);

        for (key, value) in credentials {
            if let Some(key) = scoped(key.as_str()) {
                values.insert(key, value.clone());
            }
        }

        for (key, value) in env {
            if let Some(key) = scoped(key.as_str()) {
                values.insert(key, value);
            }
        }

        values.retain(|_, v| !v.trim().is_empty());

        Self {
            service_name: service_name.to_string(),
            values,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Looks up an upper-case key such as `APIKEY`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn disable_ssl(&self) -> bool {
        self.get("DISABLE_SSL").map(parse_bool).unwrap_or(false)
    }

    /// Iterates the merged `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
