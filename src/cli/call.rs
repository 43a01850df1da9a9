//
//  ibm-cis
//  cli/call.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Operation call command
//!
//! Calls any operation of any service by name. Parameters use the
//! operation's camelCase names; see `cis operations <service>`.
//!
//! ## Examples
//!
//! ```bash
//! # List DNS records (credentials and CRN from DNS_RECORDS_* variables)
//! cis call dns_records listAllDnsRecords --zone 023e105f4ecef8ad -p type=A
//!
//! # Create an alert policy
//! cis call alerts createAlertPolicy -p name="My Policy" -p enabled=true \
//!     -p alertType=dos_attack_l7 -p 'mechanisms={"email":[{"id":"me@example.com"}]}'
//!
//! # Upload an edge function script from a file
//! cis call edge_functions updateEdgeFunctionsAction -p scriptName=example \
//!     -p edgeFunctionsAction=@worker.js
//!
//! # Keep a digit-only value as a string
//! cis call dns_records createDnsRecord --zone 023e105f4ecef8ad -p type=TXT \
//!     -p name=_verify -r content=0123
//!
//! # Show the request without sending it
//! cis call zones getZone -p zoneIdentifier=abc --crn crn:v1:... --dry-run
//!
//! # Fetch every page of a paginated list
//! cis call zone_rate_limits listAllZoneRateLimits --all-pages
//! ```

use std::fs;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{json, Map, Value};

use crate::api::schema::ServiceSpec;
use crate::api::{CisService, Params, RequestBody, RequestDescriptor, ServiceOptions};
use crate::auth::NoAuthAuthenticator;
use crate::config::{Config, ExternalConfig};
use crate::output::{write_json, OutputWriter};

use super::services::resolve_service;
use super::GlobalOptions;

/// Call a service operation
#[derive(Args, Debug)]
pub struct CallCommand {
    /// Service name (e.g. dns_records) or facade name (e.g. DnsRecordsV1)
    pub service: String,

    /// Operation name (e.g. listAllDnsRecords)
    pub operation: String,

    /// Parameter as name=value (repeatable); values are parsed as JSON when
    /// possible, and @file reads the value from a file (@- for stdin)
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Parameter as name=value sent as a string without any conversion
    /// (repeatable)
    #[arg(long = "raw-param", short = 'r', action = clap::ArgAction::Append)]
    pub raw_params: Vec<String>,

    /// Request header as 'Name: value' (repeatable)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// CRN of the CIS instance
    #[arg(long)]
    pub crn: Option<String>,

    /// Zone id, bound as zoneIdentifier or zoneId as the service requires
    #[arg(long)]
    pub zone: Option<String>,

    /// Service URL (defaults to https://api.cis.cloud.ibm.com)
    #[arg(long)]
    pub url: Option<String>,

    /// Service name used for external configuration lookup
    #[arg(long)]
    pub service_name: Option<String>,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Follow result_info pagination and print every item
    #[arg(long)]
    pub all_pages: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl CallCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let spec = resolve_service(&self.service)?;
        let params = self.build_params()?;
        let config = Config::load()?;
        let options = self.options(spec, &config)?;

        if self.dry_run {
            let service = self.dry_run_service(spec, options)?;
            let request = service.build(&self.operation, &params)?;
            return write_json(&describe(&request)?);
        }

        let service = CisService::new_instance(spec, options)
            .with_context(|| format!("Failed to set up service '{}'", spec.name))?;

        if self.all_pages {
            let items = service.collect_pages(&self.operation, params).await?;
            return write_json(&items);
        }

        let response = service.call(&self.operation, params).await?;
        if !response.api_success() {
            let writer = OutputWriter::from_flag(global.json, &config.core.output);
            let message = response
                .envelope::<Value>()
                .ok()
                .and_then(|e| e.first_error())
                .unwrap_or_else(|| "request reported success: false".to_string());
            writer.write_warning(&message);
        }

        match &response.result {
            Value::String(text) if !global.json => println!("{}", text),
            Value::Null => {}
            other => write_json(other)?,
        }
        Ok(())
    }

    fn options(&self, spec: &ServiceSpec, config: &Config) -> Result<ServiceOptions> {
        let mut options = ServiceOptions::new();
        if let Some(name) = &self.service_name {
            options = options.service_name(name.clone());
        }
        if let Some(crn) = &self.crn {
            options = options.crn(crn.clone());
        }
        if let Some(zone) = &self.zone {
            options = options.zone_identifier(zone.clone()).zone_id(zone.clone());
        }
        if let Some(url) = &self.url {
            options = options.service_url(url.clone());
        }
        if let Some(seconds) = self.timeout.or(config.core.timeout) {
            options = options.timeout(Duration::from_secs(seconds));
        }
        options = options.headers(self.build_headers()?);
        tracing::debug!(service = spec.name, ?options, "call options");
        Ok(options)
    }

    /// A service that resolves identity from external configuration but
    /// needs no credentials.
    fn dry_run_service(&self, spec: &'static ServiceSpec, options: ServiceOptions) -> Result<CisService> {
        let name = self.service_name.as_deref().unwrap_or(spec.name);
        let external = ExternalConfig::load(name)?;
        let options = options
            .authenticator(Arc::new(NoAuthAuthenticator))
            .complete_from(&external)?;
        Ok(CisService::new(spec, options)?)
    }

    fn build_params(&self) -> Result<Params> {
        let mut params = Params::new();
        for param in &self.params {
            let (name, value) = parse_param(param)?;
            params.insert(name, value);
        }
        for param in &self.raw_params {
            let (name, value) = parse_raw_param(param)?;
            params.insert(name, value);
        }
        Ok(params)
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap> {
        let mut headers = reqwest::header::HeaderMap::new();

        for header in &self.header {
            let Some((name, value)) = header.split_once(':') else {
                bail!("Invalid header format: {}. Expected 'Name: Value'", header);
            };
            headers.insert(
                crate::api::request::header_name(name)?,
                crate::api::request::header_value(value)?,
            );
        }

        Ok(headers)
    }
}

/// Parses `name=value`. Values that look like JSON scalars, arrays or
/// objects are parsed as JSON; `@path` reads the file as text.
pub(crate) fn parse_param(param: &str) -> Result<(String, Value)> {
    let (name, raw) = split_param(param)?;
    let value = if let Some(path) = raw.strip_prefix('@') {
        Value::String(read_input(path)?)
    } else {
        parse_value(raw)
    };
    Ok((name.to_string(), value))
}

/// Parses `name=value` keeping the value as a string, verbatim.
pub(crate) fn parse_raw_param(param: &str) -> Result<(String, Value)> {
    let (name, raw) = split_param(param)?;
    Ok((name.to_string(), Value::String(raw.to_string())))
}

fn split_param(param: &str) -> Result<(&str, &str)> {
    let Some((name, raw)) = param.split_once('=') else {
        bail!("Invalid parameter format: {}. Expected name=value", param);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Invalid parameter format: {}. Missing name", param);
    }
    Ok((name, raw))
}

fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Ok(n) = raw.parse::<f64>() {
                serde_json::Number::from_f64(n)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(raw.to_string()))
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

/// JSON view of a built request for `--dry-run`.
fn describe(request: &RequestDescriptor) -> Result<Value> {
    let mut headers = Map::new();
    for (name, value) in &request.headers {
        headers.insert(
            name.to_string(),
            Value::String(value.to_str().unwrap_or("<binary>").to_string()),
        );
    }

    let body = match &request.body {
        None => Value::Null,
        Some(RequestBody::Json(value)) => value.clone(),
        Some(RequestBody::Text(text)) => Value::String(text.clone()),
        Some(RequestBody::Multipart {
            name,
            file_name,
            content_type,
            content,
        }) => json!({
            "name": name,
            "file_name": file_name,
            "content_type": content_type,
            "size": content.len(),
        }),
    };

    Ok(json!({
        "operation": request.operation,
        "method": request.method.as_str(),
        "url": request.url()?.to_string(),
        "path_params": request.path_params,
        "headers": headers,
        "body": body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_param_values() {
        assert_eq!(parse_param("enabled=true").unwrap(), ("enabled".to_string(), json!(true)));
        assert_eq!(parse_param("ttl=120").unwrap().1, json!(120));
        assert_eq!(parse_param("ratio=0.5").unwrap().1, json!(0.5));
        assert_eq!(parse_param("ids=[\"a\",\"b\"]").unwrap().1, json!(["a", "b"]));
        assert_eq!(parse_param("name=www.example.com").unwrap().1, json!("www.example.com"));
        assert_eq!(parse_param("expr=a=b").unwrap().1, json!("a=b"));
        assert_eq!(parse_param("bad={oops").unwrap().1, json!("{oops"));
    }

    #[test]
    fn test_parse_param_errors() {
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
        assert!(parse_raw_param("novalue").is_err());
    }

    #[test]
    fn test_parse_raw_param_keeps_strings() {
        assert_eq!(
            parse_raw_param("content=0123").unwrap(),
            ("content".to_string(), json!("0123"))
        );
        assert_eq!(parse_raw_param("content=1.50").unwrap().1, json!("1.50"));
        assert_eq!(parse_raw_param("enabled=true").unwrap().1, json!("true"));
        assert_eq!(parse_raw_param("script=@worker.js").unwrap().1, json!("@worker.js"));
    }

    #[test]
    fn test_raw_params_override_typed() {
        let command = CallCommand {
            service: "dns_records".to_string(),
            operation: "getDnsRecord".to_string(),
            params: vec!["dnsrecordIdentifier=0123".to_string()],
            raw_params: vec!["dnsrecordIdentifier=0123".to_string(), "content=1.50".to_string()],
            header: Vec::new(),
            crn: None,
            zone: None,
            url: None,
            service_name: None,
            dry_run: true,
            all_pages: false,
            timeout: None,
        };

        let params = command.build_params().unwrap();
        assert_eq!(params.get("dnsrecordIdentifier"), Some(&json!("0123")));
        assert_eq!(params.get("content"), Some(&json!("1.50")));
    }

    #[test]
    fn test_parse_param_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "addEventListener('fetch', () => {{}})").unwrap();
        let (_, value) = parse_param(&format!("edgeFunctionsAction=@{}", file.path().display())).unwrap();
        assert_eq!(value, json!("addEventListener('fetch', () => {})"));
    }

    #[test]
    fn test_describe_request() {
        let spec = resolve_service("alerts").unwrap();
        let service = CisService::new(
            spec,
            ServiceOptions::new()
                .crn("crn:v1:test")
                .authenticator(Arc::new(NoAuthAuthenticator)),
        )
        .unwrap();
        let request = service
            .build("getAlertPolicy", &Params::new().set("policyId", "abc"))
            .unwrap();

        let described = describe(&request).unwrap();
        assert_eq!(described["method"], "GET");
        assert_eq!(
            described["url"],
            "https://api.cis.cloud.ibm.com/v1/crn:v1:test/alerting/policies/abc"
        );
        assert_eq!(described["path_params"]["policy_id"], "abc");
        assert_eq!(described["body"], Value::Null);
    }
}
