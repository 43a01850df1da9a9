//
//  ibm-cis
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations for the TOML config file and the IBM
//! credentials file.
//!
//! ## Credentials file format
//!
//! The credentials file is a list of `KEY=VALUE` lines using the same
//! names as the environment variables. Blank lines and lines starting with
//! `#` are skipped.
//!
//! ```text
//! # ibm-credentials.env
//! DNS_RECORDS_APIKEY=my-api-key
//! DNS_RECORDS_CRN=crn:v1:bluemix:public:internet-svcs:global:a/123:456::
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ibm_cis::config::parse_credentials;
//!
//! let values = parse_credentials("# comment\nALERTS_APIKEY=\"key\"\n\nALERTS_URL=https://example.com\n");
//! assert_eq!(values.get("ALERTS_APIKEY").map(String::as_str), Some("key"));
//! assert_eq!(values.len(), 2);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;

/// Environment variable naming the credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// Default credentials file name.
pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

pub fn read_config_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Writes a file, creating parent directories first.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

pub fn config_exists(path: &Path) -> bool {
    path.exists()
}

/// Parses `KEY=VALUE` lines in `.env` syntax.
///
/// Quoted values are unquoted and values may contain `=`. Lines that do
/// not parse are skipped with a warning. Later duplicates win.
pub fn parse_credentials(content: &str) -> BTreeMap<String, String> {
    collect_credentials(dotenvy::from_read_iter(content.as_bytes()))
}

fn collect_credentials<I>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = dotenvy::Result<(String, String)>>,
{
    let mut values = BTreeMap::new();
    for entry in entries {
        match entry {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(e) => tracing::warn!("skipping credentials entry: {}", e),
        }
    }
    values
}

/// Locates the credentials file.
///
/// Checks `IBM_CREDENTIALS_FILE`, then `ibm-credentials.env` in the current
/// directory, then in the home directory.
pub fn credentials_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let candidates = [
        std::env::current_dir().ok().map(|dir| dir.join(CREDENTIALS_FILE_NAME)),
        BaseDirs::new().map(|dirs| dirs.home_dir().join(CREDENTIALS_FILE_NAME)),
    ];

    candidates.into_iter().flatten().find(|path| config_exists(path))
}

/// Reads the credentials file, if there is one.
///
/// A file named by `IBM_CREDENTIALS_FILE` that cannot be read is an error;
/// a missing default file is not.
pub fn read_credentials_file() -> Result<BTreeMap<String, String>> {
    match credentials_file_path() {
        Some(path) if config_exists(&path) => {
            tracing::debug!("reading credentials from {}", path.display());
            let entries = dotenvy::from_path_iter(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(collect_credentials(entries))
        }
        Some(path) => anyhow::bail!("Credentials file not found: {}", path.display()),
        None => Ok(BTreeMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credentials() {
        let values = parse_credentials(
            "ZONES_APIKEY=abc\n# ZONES_URL=ignored\n\nZONES_AUTH_URL=https://iam.test?x=1\nZONES_APIKEY=def\n",
        );
        assert_eq!(values.len(), 2);
        assert_eq!(values["ZONES_APIKEY"], "def");
        assert_eq!(values["ZONES_AUTH_URL"], "https://iam.test?x=1");
    }

    #[test]
    fn test_parse_credentials_unquotes_values() {
        let values = parse_credentials("ZONES_APIKEY=\"my-key\"\nZONES_CRN='crn:v1:x'\n");
        assert_eq!(values["ZONES_APIKEY"], "my-key");
        assert_eq!(values["ZONES_CRN"], "crn:v1:x");
    }

    #[test]
    fn test_read_credentials_file_with_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ibm-credentials.env");
        write_config_file(&path, "# dns\nDNS_RECORDS_APIKEY=\"my-key\"\n").unwrap();

        let values = collect_credentials(dotenvy::from_path_iter(&path).unwrap());
        assert_eq!(values["DNS_RECORDS_APIKEY"], "my-key");
    }

    #[test]
    fn test_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("creds.env");
        write_config_file(&path, "X=1\n").unwrap();
        assert!(config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), "X=1\n");
    }
}
