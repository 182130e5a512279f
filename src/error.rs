//! Error types and handling for the `TripWise` service

use thiserror::Error;

/// Main error type for the `TripWise` service
#[derive(Error, Debug)]
pub enum TripWiseError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// One or more required request fields were absent
    #[error("Missing required fields: {}", .required.join(", "))]
    MissingFields { required: Vec<&'static str> },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Model API communication errors
    #[error("Model API error: {message}")]
    Model { message: String },

    /// The model answered, but not with the JSON it was asked for
    #[error("Malformed model reply: {message}")]
    MalformedReply { message: String },
}

impl TripWiseError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new missing-fields error carrying the endpoint's required list
    pub fn missing_fields(required: Vec<&'static str>) -> Self {
        Self::MissingFields { required }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new model API error
    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Create a new malformed-reply error
    pub fn malformed_reply<S: Into<String>>(message: S) -> Self {
        Self::MalformedReply {
            message: message.into(),
        }
    }

    /// Whether the failure is the caller's fault rather than a downstream one
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TripWiseError::MissingFields { .. } | TripWiseError::Validation { .. }
        )
    }
}
