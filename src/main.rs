//
//  ibm-cis
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ibm_cis::cli::{Cli, Commands};
use ibm_cis::{exit_codes, CisError};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    let cli = Cli::parse();
    if cli.global.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("CIS_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps the root cause to an exit code.
fn exit_code(error: &anyhow::Error) -> i32 {
    let Some(cis) = error.chain().find_map(|e| e.downcast_ref::<CisError>()) else {
        return exit_codes::ERROR;
    };
    match cis {
        CisError::MissingParameters(_)
        | CisError::UnknownOperation { .. }
        | CisError::InvalidParameter { .. }
        | CisError::InvalidHeader(_)
        | CisError::InvalidUrl(_) => exit_codes::USAGE,
        CisError::Authentication(_) => exit_codes::AUTH_ERROR,
        CisError::Http { status: 401 | 403, .. } => exit_codes::AUTH_ERROR,
        CisError::Http { status: 404, .. } => exit_codes::NOT_FOUND,
        CisError::Http { status: 429, .. } => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Services(cmd) => cmd.run(&cli.global).await,
        Commands::Operations(cmd) => cmd.run(&cli.global).await,
        Commands::Call(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("cis version {}", ibm_cis::VERSION);
            Ok(())
        }
    }
}
