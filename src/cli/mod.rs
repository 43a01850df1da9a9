//
//  ibm-cis
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod call;
mod completion;
mod config;
mod services;

pub use call::CallCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use services::{OperationsCommand, ServicesCommand};

use clap::{Parser, Subcommand};

/// IBM Cloud Internet Services CLI
#[derive(Parser, Debug)]
#[command(
    name = "cis",
    version,
    about = "Work with IBM Cloud Internet Services from the command line",
    long_about = "cis calls the IBM Cloud Internet Services (CIS) REST APIs.\n\n\
                  Credentials and instance identity come from environment variables \
                  (e.g. DNS_RECORDS_APIKEY, DNS_RECORDS_CRN), an ibm-credentials.env file \
                  or the [services.<name>] sections of the config file.",
    propagate_version = true,
    after_help = "Use 'cis <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available CIS services
    #[command(visible_alias = "ls")]
    Services(ServicesCommand),

    /// List the operations of a service
    #[command(visible_alias = "ops")]
    Operations(OperationsCommand),

    /// Call a service operation
    Call(CallCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
