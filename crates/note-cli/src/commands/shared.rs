use std::io::Read;

use anyhow::Context;
use note_core::validation::require_content;
use serde::Serialize;

const CONTENT_REQUIRED: &str = "Journal entry content is required";

/// Body printed after a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted<'a> {
    pub deleted: &'a str,
}

/// Entry text from the argument, or stdin when absent, trimmed and non-blank.
pub fn entry_content(arg: Option<&str>) -> anyhow::Result<String> {
    let raw = match arg {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read entry text from stdin")?;
            buf
        }
    };
    Ok(require_content(Some(&raw), CONTENT_REQUIRED)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_argument() {
        assert_eq!(entry_content(Some("  hello \n")).unwrap(), "hello");
    }

    #[test]
    fn blank_argument_is_rejected() {
        let err = entry_content(Some("   ")).unwrap_err();
        assert!(err.to_string().contains("content is required"));
    }
}
