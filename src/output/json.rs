//
//  ibm-cis
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON on stdout, used for `--json`, `--dry-run` and
//! operation results.

use serde::Serialize;
use std::io::{self, Write};

pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_is_pretty() {
        let mut out = Vec::new();
        write_json_to(&mut out, &json!({"id": "abc"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"id\": \"abc\"\n}\n");
    }
}
