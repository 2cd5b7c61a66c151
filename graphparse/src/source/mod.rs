//! Input loading with encoding auto-detection.
//!
//! The simulator writes `output.csv` with the JVM default charset. Valid UTF-8
//! is taken as-is; anything else is sniffed with chardet and decoded with
//! encoding_rs before being cut into lines. No CSV structure is interpreted here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{SourceError, SourceResult};

/// Decoded input, one entry per record with its terminator already stripped.
#[derive(Debug, Clone)]
pub struct SourceText {
    /// Stripped lines in file order
    pub lines: Vec<String>,
    /// Detected encoding
    pub encoding: String,
}

/// Open the input file for reading.
pub fn open_source(path: &Path) -> SourceResult<File> {
    File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read everything from `reader`, decode it and split it into stripped lines.
///
/// `path` is only used for error context.
pub fn read_source<R: Read>(mut reader: R, path: &Path) -> SourceResult<SourceText> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let (content, encoding) = decode_source(&bytes);
    let lines = split_records(&content)
        .into_iter()
        .map(strip_terminator)
        .collect();

    Ok(SourceText { lines, encoding })
}

/// Decode input bytes, returning the text and the encoding used.
///
/// Valid UTF-8 is passed through untouched; chardet is only consulted for
/// bytes that are not.
pub fn decode_source(bytes: &[u8]) -> (String, String) {
    match std::str::from_utf8(bytes) {
        Ok(s) => (s.to_string(), "utf-8".to_string()),
        Err(_) => {
            let encoding = detect_encoding(bytes);
            (decode_content(bytes, &encoding), encoding)
        }
    }
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding.
///
/// Unknown encodings and invalid UTF-8 fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => String::from_utf8_lossy(bytes).into_owned(),
        },
        // WHATWG maps latin-1 labels onto windows-1252
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Split text into records, each keeping its terminator.
///
/// `"\r\n"`, a lone `'\r'` and `'\n'` all end a record and are folded to
/// `"\n"`, so each counts as one terminator character. A final record without
/// terminator is kept as-is.
pub fn split_records(content: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                records.push(std::mem::take(&mut current));
            }
            '\n' => {
                current.push('\n');
                records.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        records.push(current);
    }

    records
}

/// Remove exactly one trailing character, whatever it is.
pub fn strip_terminator(mut record: String) -> String {
    record.pop();
    record
}
