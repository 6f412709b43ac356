//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod codex_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let codex_error = CodexError::from(json_error);

        match codex_error {
            CodexError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let codex_error = CodexError::from(io_error);

        match codex_error {
            CodexError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("bad\nheader").unwrap_err();
        let codex_error = CodexError::from(header_error);

        match codex_error {
            CodexError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_csv_error_conversion() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader("a,b\n1,2,3\n".as_bytes());
        let csv_error = reader.records().next().unwrap().unwrap_err();

        match CodexError::from(csv_error) {
            CodexError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_invalid_category_display() {
        let error = CodexError::InvalidCategory {
            category: "invalid_type".to_string(),
            allowed: "raw, standings".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("\"invalid_type\""));
        assert!(message.contains("raw, standings"));
    }

    #[test]
    fn test_snapshot_not_found_display() {
        let error = CodexError::SnapshotNotFound {
            path: PathBuf::from("/tmp/2024/raw/missing.json"),
        };

        assert_eq!(
            error.to_string(),
            "No stored snapshot at /tmp/2024/raw/missing.json"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let error = CodexError::InvalidConfig {
            key: "RFFL_SEASON".to_string(),
            value: "twenty".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid value \"twenty\" for RFFL_SEASON");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodexError>();
    }
}
