use std::path::Path;

use super::error::{DataError, Result};
use super::model::Token;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load newline-delimited tokens from a text file.
///
/// One token per line, in file order, without the `\n` / `\r\n` terminator.
/// A terminator after the last line does not produce an extra empty token.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load_file(path: &Path) -> Result<Vec<Token>> {
    let bytes = std::fs::read(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let tokens: Vec<Token> = text.lines().map(str::to_string).collect();

    log::info!("Loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn crlf_and_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"b\r\n\r\na\n").unwrap();

        let tokens = load_file(file.path()).unwrap();
        assert_eq!(tokens, vec!["b", "", "a"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok\n\xff\n").unwrap();

        let tokens = load_file(file.path()).unwrap();
        assert_eq!(tokens[0], "ok");
        assert_eq!(tokens[1], "\u{fffd}");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
