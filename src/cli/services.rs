//
//  ibm-cis
//  cli/services.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service and operation listing commands
//!
//! ## Examples
//!
//! ```bash
//! # Every service with its identity fields
//! cis services
//!
//! # Operations of one service, as JSON
//! cis operations dns_records --json
//! ```

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

use crate::api::schema::{BodySpec, HttpMethod, OperationSpec, ServiceSpec};
use crate::config::Config;
use crate::output::{format_method, OutputWriter, TableBuilder, TableOutput};
use crate::services;

use super::GlobalOptions;

/// List the available CIS services
#[derive(Args, Debug)]
pub struct ServicesCommand {}

/// List the operations of a service
#[derive(Args, Debug)]
pub struct OperationsCommand {
    /// Service name (e.g. dns_records) or facade name (e.g. DnsRecordsV1)
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceSummary {
    pub name: &'static str,
    pub title: &'static str,
    pub version: &'static str,
    pub identity: Vec<&'static str>,
    pub operations: usize,
    pub summary: &'static str,
}

impl From<&ServiceSpec> for ServiceSummary {
    fn from(spec: &ServiceSpec) -> Self {
        Self {
            name: spec.name,
            title: spec.title,
            version: spec.version,
            identity: spec.identity.iter().map(|i| i.param()).collect(),
            operations: spec.operations.len(),
            summary: spec.summary,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ServiceList(pub Vec<ServiceSummary>);

impl TableOutput for ServiceList {
    fn print_table(&self, color: bool) {
        TableBuilder::new()
            .color(color)
            .headers(["Service", "Facade", "Identity", "Operations", "Summary"])
            .rows(self.0.iter().map(|s| {
                vec![
                    s.name.to_string(),
                    s.title.to_string(),
                    if s.identity.is_empty() {
                        "-".to_string()
                    } else {
                        s.identity.join(", ")
                    },
                    s.operations.to_string(),
                    s.summary.to_string(),
                ]
            }))
            .print();
    }
}

#[derive(Debug, Serialize)]
pub struct OperationSummary {
    pub name: &'static str,
    pub method: &'static str,
    #[serde(skip)]
    pub kind: HttpMethod,
    pub path: &'static str,
    pub required: Vec<&'static str>,
    pub body: &'static str,
}

impl From<&OperationSpec> for OperationSummary {
    fn from(op: &OperationSpec) -> Self {
        Self {
            name: op.name,
            method: op.method.as_str(),
            kind: op.method,
            path: op.path,
            required: op.required_params(),
            body: match op.body {
                BodySpec::None => "-",
                BodySpec::Json(_) | BodySpec::Whole(_) => "json",
                BodySpec::Raw { .. } => "text",
                BodySpec::Multipart(_) => "multipart",
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct OperationList(pub Vec<OperationSummary>);

impl TableOutput for OperationList {
    fn print_table(&self, color: bool) {
        TableBuilder::new()
            .color(color)
            .headers(["Operation", "Method", "Path", "Required", "Body"])
            .rows(self.0.iter().map(|op| {
                vec![
                    op.name.to_string(),
                    format_method(op.kind, color),
                    op.path.to_string(),
                    op.required.join(", "),
                    op.body.to_string(),
                ]
            }))
            .print();
    }
}

/// Resolves a service argument, with a hint on failure.
pub(crate) fn resolve_service(name: &str) -> Result<&'static ServiceSpec> {
    services::find(name).ok_or_else(|| {
        anyhow!(
            "Unknown service '{}'. Run 'cis services' to list available services.",
            name
        )
    })
}

fn writer(global: &GlobalOptions) -> OutputWriter {
    let configured = Config::load().map(|c| c.core.output).unwrap_or_default();
    OutputWriter::from_flag(global.json, &configured)
}

impl ServicesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let list = ServiceList(services::catalog().iter().map(|s| ServiceSummary::from(*s)).collect());
        writer(global).write(&list)
    }
}

impl OperationsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let spec = resolve_service(&self.service)?;
        let list = OperationList(spec.operations.iter().map(OperationSummary::from).collect());
        let writer = writer(global);
        if !global.json {
            println!("{} ({}) - identity: {}", spec.title, spec.name, spec.identity_label());
        }
        writer.write(&list)
    }
}
