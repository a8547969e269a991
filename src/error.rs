use thiserror::Error;

use crate::directory::DoctorId;

/// Application-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur during
/// a booking session. They provide context and can be chained with anyhow.

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to reach doctor directory at {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Doctor directory returned status {status}")]
    Status { status: u16 },

    #[error("Failed to parse doctor directory response")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Which half of the date/time pair was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Date,
    Time,
    Both,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Back is not available on the first step")]
    BackDisabled,

    #[error("No doctor selected")]
    NoDoctorSelected,

    #[error("Unknown doctor id: {0}")]
    UnknownDoctor(DoctorId),

    #[error("Please select both date and time.")]
    IncompleteDateTime { missing: MissingField },

    #[error("Action not available on the {0} step")]
    WrongStep(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = BookingError::IncompleteDateTime {
            missing: MissingField::Time,
        };
        assert_eq!(err.to_string(), "Please select both date and time.");

        let err = DirectoryError::Status { status: 503 };
        assert_eq!(err.to_string(), "Doctor directory returned status 503");

        let err = BookingError::UnknownDoctor(DoctorId(9));
        assert_eq!(err.to_string(), "Unknown doctor id: 9");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
