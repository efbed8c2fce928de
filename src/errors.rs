use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a validation run.
///
/// Everything recoverable is reported as a [`Diagnostic`](crate::diagnostics::Diagnostic)
/// instead; only the inputs every check depends on can fail this way.
#[derive(Error, Debug)]
pub enum MarketcheckError {
    /// An input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An input file is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience alias for `Result<T, MarketcheckError>`.
pub type Result<T> = std::result::Result<T, MarketcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_path() {
        let err = MarketcheckError::Read {
            path: PathBuf::from(".claude-plugin/marketplace.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot read .claude-plugin/marketplace.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn json_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = MarketcheckError::Json {
            path: PathBuf::from("schema.json"),
            source,
        };
        assert!(err.to_string().starts_with("invalid JSON in schema.json"));
    }
}
