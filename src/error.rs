//! Error types and handling for the `TripSmith` planner

use thiserror::Error;

/// Main error type for the `TripSmith` planner
#[derive(Error, Debug)]
pub enum TripSmithError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Provider communication errors
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Activity template errors (unresolved placeholder slots)
    #[error("Template error: {message}")]
    Template { message: String },

    /// Plan delivery errors
    #[error("Delivery error: {message}")]
    Delivery { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripSmithError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(message: S) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create a new delivery error
    pub fn delivery<S: Into<String>>(message: S) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripSmithError::Config { .. } => {
                "Configuration error. Please check your config file and SMTP settings.".to_string()
            }
            TripSmithError::Provider { .. } => {
                "Unable to reach external travel data sources. The plan will use generic content."
                    .to_string()
            }
            TripSmithError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripSmithError::Template { message } => {
                format!("Activity template problem: {message}")
            }
            TripSmithError::Delivery { .. } => {
                "The trip plan was built but could not be delivered. You can retry sending it."
                    .to_string()
            }
            TripSmithError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
