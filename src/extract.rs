// ABOUTME: Text extraction from input files, one Result per file
// ABOUTME: Failures are errors, never error strings embedded into published content

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extract the raw text of a single file. Only UTF-8 text formats are
/// supported; anything else fails with the offending path rather than
/// producing placeholder content.
pub fn extract_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") | Some("md") | Some("markdown") | Some("text") | None => {
            let bytes = fs::read(path).map_err(|e| Error::Extraction {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

            String::from_utf8(bytes).map_err(|_| Error::Extraction {
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".into(),
            })
        }
        Some(other) => Err(Error::Extraction {
            path: path.to_path_buf(),
            reason: format!("unsupported file type .{}", other),
        }),
    }
}

/// Extract and concatenate all inputs in order. The first failing file
/// aborts the whole extraction.
pub fn extract_files(paths: &[PathBuf]) -> Result<String> {
    let mut texts = Vec::with_capacity(paths.len());

    for path in paths {
        texts.push(extract_file(path)?);
    }

    Ok(texts.join("\n"))
}
