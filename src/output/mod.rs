//
//  ibm-cis
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `cis` CLI:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: Machine-readable JSON for scripting and automation
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for types that can be rendered as tables
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::output::{OutputFormat, OutputWriter};
//! use serde_json::json;
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_json(&json!({"id": "abc"})).unwrap();
//! writer.write_success("Operation completed successfully");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::str::FromStr;

use serde::Serialize;

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{}'. Valid formats: table, json", other),
        }
    }
}

/// A unified output writer that handles multiple output formats.
///
/// Data goes to stdout; errors and warnings go to stderr. Color output is
/// detected from the terminal and is off when stdout is piped.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Picks JSON when `json` is set, otherwise the configured default.
    pub fn from_flag(json: bool, configured: &str) -> Self {
        if json {
            return Self::json();
        }
        Self::new(configured.parse().unwrap_or_default())
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a value using the configured output format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes any serializable value as pretty JSON, whatever the format.
    pub fn write_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        write_json(value)
    }

    /// Writes an error message to stderr.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Writes a success message to stdout, prefixed with a checkmark.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// A trait for types that can be rendered as table output.
///
/// For JSON output, types must also implement [`Serialize`].
pub trait TableOutput {
    /// Renders the type as a table or a list of fields.
    fn print_table(&self, color: bool);
}

/// Prints a styled header with an underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a key-value pair, with the key dimmed when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(OutputWriter::from_flag(true, "table").format(), OutputFormat::Json);
        assert_eq!(OutputWriter::from_flag(false, "json").format(), OutputFormat::Json);
        assert_eq!(OutputWriter::from_flag(false, "bogus").format(), OutputFormat::Table);
    }
}
