//! Resume text extraction. PDFs go through pdf-extract; anything else is read
//! as UTF-8 text. An unreadable PDF is a hard error for the caller to surface
//! before extraction ever runs.

use std::path::Path;

use anyhow::{Context, Result};

pub fn read_text(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        extract_from_bytes(&bytes)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("extracting text from PDF")
}
