//! Input document loading.
//!
//! This module reads the raw text of a JSON document from a file or stdin.
//! Gzip-compressed input is decompressed transparently: files by their `.gz`
//! extension, stdin by the gzip magic bytes. Parsing is left to the field
//! operations so that a malformed document is reported the same way whatever
//! its source.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a JSON document's text from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use fieldquill::file::loader::load_json_text;
///
/// let text = load_json_text("config.json").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid UTF-8
pub fn load_json_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    tracing::debug!(
        path = %path_ref.display(),
        bytes = content.len(),
        gzipped = is_gzipped,
        "Loaded document"
    );
    Ok(content)
}

/// Reads a JSON document's text from standard input until EOF.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - Gzip-looking input cannot be decompressed
/// - The input is not valid UTF-8
pub fn load_json_text_from_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    decode_input_bytes(buffer)
}

/// Turns raw input bytes into text, decompressing gzip data (magic 0x1f 0x8b).
pub fn decode_input_bytes(buffer: Vec<u8>) -> Result<String> {
    if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
