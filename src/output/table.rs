//
//  ibm-cis
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tables rendered with `comfy_table` using UTF-8 box-drawing characters,
//! arranged dynamically to fit the terminal width.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Operation", "Method", "Path"])
//!     .row(["getAlertPolicies", "GET", "/v1/{crn}/alerting/policies"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::schema::HttpMethod;

/// Creates a new table with the UTF-8 preset and dynamic arrangement.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers are drawn in cyan when color is enabled. Color support is
/// detected on creation; use [`color`](TableBuilder::color) to override it.
pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(&self.headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats an HTTP method with a color per verb: reads green, creates
/// yellow, updates blue, deletes red.
pub fn format_method(method: HttpMethod, color: bool) -> String {
    if !color {
        return method.to_string();
    }

    use console::style;
    match method {
        HttpMethod::Get => style(method.as_str()).green().to_string(),
        HttpMethod::Post => style(method.as_str()).yellow().to_string(),
        HttpMethod::Put | HttpMethod::Patch => style(method.as_str()).blue().to_string(),
        HttpMethod::Delete => style(method.as_str()).red().to_string(),
    }
}
