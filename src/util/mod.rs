//
//  ibm-cis
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small string helpers shared by the schema, the configuration layer and the
//! CLI output.
//!
//! ## Example
//!
//! ```rust
//! use ibm_cis::util::{env_prefix, to_snake_case, truncate};
//!
//! assert_eq!(to_snake_case("alertType"), "alert_type");
//! assert_eq!(env_prefix("global-load-balancer"), "GLOBAL_LOAD_BALANCER");
//! assert_eq!(truncate("a long description", 9), "a long...");
//! ```

/// Converts a camelCase parameter name to its snake_case wire name.
///
/// Every upper-case letter starts a new word; runs of upper-case letters
/// (`ID`, `URL`) are kept together.
///
/// # Example
///
/// ```rust
/// use ibm_cis::util::to_snake_case;
///
/// assert_eq!(to_snake_case("perPage"), "per_page");
/// assert_eq!(to_snake_case("dnsrecordIdentifier"), "dnsrecord_identifier");
/// assert_eq!(to_snake_case("originDNS"), "origin_dns");
/// assert_eq!(to_snake_case("name"), "name");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            if i > 0 && (prev_lower || (prev_upper && next_lower)) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(*c);
        }
    }

    out
}

/// Returns the environment variable prefix for a service name.
///
/// Upper-cases the name and replaces `-` and `.` with `_`, so the service
/// `dns_records` reads `DNS_RECORDS_APIKEY`, `DNS_RECORDS_URL` and so on.
pub fn env_prefix(service_name: &str) -> String {
    service_name
        .chars()
        .map(|c| match c {
            '-' | '.' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Truncates a string to at most `max_len` characters, with a `...` suffix
/// when anything was cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Parses the usual truthy spellings found in environment and credential files.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
