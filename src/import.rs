//! Reading thread drafts from local files.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read a plain-text file for splitting.
///
/// The content is returned as-is; normalization happens when it is split.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, [`Error::NotText`] if its
/// content is not UTF-8 or contains NUL bytes.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode(bytes).ok_or_else(|| Error::NotText {
        path: path.to_path_buf(),
    })?;

    debug!(path = %path.display(), bytes = text.len(), "imported text file");
    Ok(text)
}

fn decode(bytes: Vec<u8>) -> Option<String> {
    if bytes.contains(&0) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "line one\r\nline two").unwrap();

        assert_eq!(read_text(&path).unwrap(), "line one\r\nline two");
    }

    #[test]
    fn test_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x00, 0x1a]).unwrap();

        assert!(matches!(read_text(&path), Err(Error::NotText { .. })));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [b'c', b'a', b'f', 0xe9]).unwrap();

        assert!(matches!(read_text(&path), Err(Error::NotText { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = read_text("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("here.txt"));
    }
}
