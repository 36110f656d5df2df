// src/application/error_handling.rs
//
// Error responses for machine-readable output
//
// ARCHITECTURE:
// - Maps internal errors -> stable, classified responses
// - Logs the full error before it is summarized

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Invalid input at a call boundary (e.g. unknown filter)
    Validation,

    /// Catalog or profile failed load-time validation
    DomainError,

    /// File system error
    FileSystem,

    /// Malformed catalog document
    Serialization,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(resource) => Self::not_found(&resource),

            AppError::InvalidArgument(message) => Self::validation(message),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: match domain_error {
                    DomainError::UnknownCategory(_) => "Unknown category".to_string(),
                    _ => "Catalog validation failed".to_string(),
                },
                details: Some(domain_error.to_string()),
            },

            AppError::Serialization(serde_error) => {
                error!("serialization error: {:?}", serde_error);
                Self {
                    success: false,
                    error_type: ErrorType::Serialization,
                    message: "Catalog document could not be parsed".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Io(io_error) => {
                error!("io error: {:?}", io_error);
                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }
        }
    }

    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    /// Pretty JSON, falling back to a plain message if encoding fails
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound("catalog.json".to_string()));
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "catalog.json not found");
    }

    #[test]
    fn test_invalid_argument_is_validation() {
        let error = ErrorResponse::from(AppError::InvalidArgument("Godot".to_string()));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Godot");
    }

    #[test]
    fn test_schema_violation_keeps_details() {
        let error = ErrorResponse::from(AppError::Domain(DomainError::SchemaViolation {
            record: "voxl-terra".to_string(),
            reason: "missing required attribute 'title'".to_string(),
        }));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("voxl-terra"));
    }

    #[test]
    fn test_serialization() {
        let json = ErrorResponse::not_found("Project").to_json();
        assert!(json.contains("not_found"));
        assert!(json.contains("Project not found"));
    }
}
