//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Compilation and fragment generation are permissive and never fail; errors
//! only surface where text is decoded into descriptors, options or models.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// JSON decoding failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML decoding failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A model definition that cannot be registered.
    /// Excluded from `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Invalid Model: {_0}")]
    InvalidModel(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(app_err.to_string().starts_with("JSON Error:"));
    }

    #[test]
    fn test_invalid_model_manual_creation() {
        let app_err = AppError::InvalidModel("missing name".into());
        assert_eq!(format!("{}", app_err), "Invalid Model: missing name");
    }
}
