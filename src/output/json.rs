//! JSON envelope for `--format json`
//!
//! Every JSON document the CLI prints has the shape
//! `{ "data": <command payload>, "meta": { "timestamp", "version" } }`.

use chrono::Utc;
use serde::Serialize;

/// Command payload plus the `meta` block
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Provenance of a JSON document: when it was printed and by which jwt-fetch build
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the document was produced
    pub timestamp: String,

    /// jwt-fetch package version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Wrap `data` in the envelope and render it pretty-printed
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Item {
        status: u16,
        body: String,
    }

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new("payload");

        assert_eq!(output.data, "payload");
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_wraps_data() {
        let item = Item {
            status: 200,
            body: "abc".to_string(),
        };

        let result = format_json(&item).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"status\": 200"));
        assert!(result.contains("\"body\": \"abc\""));
        assert!(result.contains("\"version\""));
    }
}
