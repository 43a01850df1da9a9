//
//  ibm-cis
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Keys are dotted: `core.output`, `core.timeout` and
//! `services.<service>.<field>`, where field is one of the external
//! configuration settings (`apikey`, `crn`, `zone_identifier`, ...).

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, ServiceConfig};

use super::GlobalOptions;

/// Fields shown as `****` by `config show` and `config get`.
const SECRET_FIELDS: &[&str] = &["apikey", "password", "client_secret", "bearer_token"];

const REDACTED: &str = "****";

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show configuration file path
    Path,

    /// Show the whole configuration
    #[command(visible_alias = "list")]
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (e.g. services.dns_records.crn)
    pub key: String,

    /// Print secret values instead of ****
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (e.g. core.output)
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Path => self.path(global),
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
        }
    }

    /// Show configuration file path
    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = redacted(Config::load()?);

        if global.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Core Configuration").bold());
        println!("{}", "-".repeat(50));
        print_kv("output", &config.core.output);
        print_kv(
            "timeout",
            &config.core.timeout.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
        );

        if !config.services.is_empty() {
            println!();
            println!("{}", style("Service Configuration").bold());
            println!("{}", "-".repeat(50));
            for (name, service) in &config.services {
                println!();
                println!("  {}", style(name).cyan().bold());
                for (key, value) in service.entries() {
                    println!("    {}: {}", key, value);
                }
            }
        }

        println!();
        Ok(())
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let value = config.get(&args.key).map(|value| {
            if is_secret_key(&args.key) && !args.reveal {
                REDACTED.to_string()
            } else {
                value
            }
        });

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;

        if !config.set(&args.key, args.value.clone()) {
            bail!(
                "Invalid configuration key or value '{}'. Valid keys: core.output (table, json), \
                 core.timeout (seconds), services.<service>.<field> with field one of: {}",
                args.key,
                ServiceConfig::KEYS.join(", ")
            );
        }

        config.save()?;
        tracing::debug!(key = %args.key, "configuration saved");

        let shown = if is_secret_key(&args.key) { REDACTED } else { args.value.as_str() };
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }

        Ok(())
    }
}

fn is_secret_key(key: &str) -> bool {
    key.starts_with("services.")
        && key
            .rsplit_once('.')
            .is_some_and(|(_, field)| SECRET_FIELDS.contains(&field))
}

/// Copy of `config` with secret fields masked.
fn redacted(mut config: Config) -> Config {
    for service in config.services.values_mut() {
        for field in SECRET_FIELDS {
            if service.get(field).is_some() {
                service.set(field, REDACTED.to_string());
            }
        }
    }
    config
}

fn print_kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).cyan(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_secret_key() {
        assert!(is_secret_key("services.alerts.apikey"));
        assert!(is_secret_key("services.dns_records.bearer_token"));
        assert!(!is_secret_key("services.alerts.crn"));
        assert!(!is_secret_key("core.output"));
    }

    #[test]
    fn test_redacted_masks_only_present_secrets() {
        let mut config = Config::default();
        config.set("services.alerts.apikey", "secret".to_string());
        config.set("services.alerts.crn", "crn:v1:x".to_string());

        let masked = redacted(config);
        let alerts = masked.service("alerts").unwrap();
        assert_eq!(alerts.apikey.as_deref(), Some(REDACTED));
        assert_eq!(alerts.crn.as_deref(), Some("crn:v1:x"));
        assert_eq!(alerts.password, None);
    }
}
