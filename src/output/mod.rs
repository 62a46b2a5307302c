//! Output formatting for token responses

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::TokenResponse;
use crate::error::Result;

pub mod json;

/// Token response as rendered in JSON output
#[derive(Debug, Serialize)]
struct TokenOutput<'a> {
    endpoint: &'a str,
    status: u16,
    body: String,
}

/// Write a token response in the requested format.
///
/// `Raw` emits the body bytes exactly as received.
pub fn write_token<W: Write>(
    out: &mut W,
    endpoint: &str,
    response: &TokenResponse,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Raw => out.write_all(response.as_bytes())?,
        OutputFormat::Json => {
            let data = TokenOutput {
                endpoint,
                status: response.status(),
                body: String::from_utf8_lossy(response.as_bytes()).into_owned(),
            };
            writeln!(out, "{}", json::format_json(&data)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_output_is_verbatim() {
        let resp = TokenResponse::new(200, "tok.en\n");
        let mut buf = Vec::new();
        write_token(&mut buf, "http://h/jwt", &resp, OutputFormat::Raw).unwrap();
        assert_eq!(buf, b"tok.en\n");
    }

    #[test]
    fn test_json_output() {
        let resp = TokenResponse::new(200, "tok.en");
        let mut buf = Vec::new();
        write_token(&mut buf, "http://h/jwt", &resp, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["data"]["endpoint"], "http://h/jwt");
        assert_eq!(value["data"]["status"], 200);
        assert_eq!(value["data"]["body"], "tok.en");
        assert!(value["meta"]["timestamp"].is_string());
    }
}
