//! Error types and handling for the `EcoTravel` service

use thiserror::Error;

/// Main error type for the `EcoTravel` service
#[derive(Error, Debug)]
pub enum TravelError {
    /// Request validation errors, rejected before the engine runs
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A weather, air-quality or directions provider could not deliver data
    #[error("Upstream data unavailable from {provider}: {message}")]
    Upstream { provider: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Recommendation text could not be rendered
    #[error("Template rendering failed: {source}")]
    Render {
        #[from]
        source: handlebars::RenderError,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TravelError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new upstream error for the named provider
    pub fn upstream<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::Upstream {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the caller is at fault and should not retry unchanged
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, TravelError::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelError::Validation { message } => message.clone(),
            TravelError::Upstream { provider, .. } => {
                format!("The {provider} service is currently unavailable.")
            }
            TravelError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelError::Render { .. } => {
                "The recommendation could not be rendered.".to_string()
            }
            TravelError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let validation_err = TravelError::validation("origin missing");
        assert!(matches!(validation_err, TravelError::Validation { .. }));

        let upstream_err = TravelError::upstream("weather", "timeout");
        assert!(matches!(upstream_err, TravelError::Upstream { .. }));

        let config_err = TravelError::config("bad port");
        assert!(matches!(config_err, TravelError::Config { .. }));
    }

    #[test]
    fn test_user_messages() {
        let validation_err = TravelError::validation("Origin and destination are required");
        assert_eq!(
            validation_err.user_message(),
            "Origin and destination are required"
        );

        let upstream_err = TravelError::upstream("air quality", "503");
        assert!(upstream_err.user_message().contains("air quality"));

        let config_err = TravelError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));
    }

    #[test]
    fn test_only_validation_is_client_error() {
        assert!(TravelError::validation("x").is_client_error());
        assert!(!TravelError::upstream("weather", "x").is_client_error());
        assert!(!TravelError::general("x").is_client_error());
    }

    #[test]
    fn test_render_error_conversion() {
        let render_err = handlebars::Handlebars::new()
            .render("unregistered", &())
            .unwrap_err();
        let travel_err: TravelError = render_err.into();
        assert!(matches!(travel_err, TravelError::Render { .. }));
        assert!(!travel_err.is_client_error());
        assert!(travel_err.to_string().starts_with("Template rendering failed"));
    }
}
