use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Could not reach the remote service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote service answered with HTTP status {status}")]
    Protocol { status: u16 },

    #[error("Operation not supported: {operation}")]
    Unsupported { operation: String },

    #[error("Unknown tank size: {size}")]
    UnknownTankSize { size: String },

    #[error("No filter matches '{query}'")]
    FilterNotFound { query: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalogue error: {message}")]
    CatalogueError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::Transport(_) => ErrorCategory::Network,
            AdvisorError::Protocol { .. } => ErrorCategory::Remote,
            AdvisorError::Unsupported { .. }
            | AdvisorError::UnknownTankSize { .. }
            | AdvisorError::FilterNotFound { .. } => ErrorCategory::Input,
            AdvisorError::CatalogueError { .. }
            | AdvisorError::ConfigValidationError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AdvisorError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路問題稍後重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Remote | ErrorCategory::Input | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdvisorError::Transport(_) => {
                "Check your internet connection and try again later"
            }
            AdvisorError::Protocol { .. } => {
                "The remote form rejected the request; its markup or parameters may have changed"
            }
            AdvisorError::Unsupported { .. } => "Build a new stocking plan instead",
            AdvisorError::UnknownTankSize { .. } => {
                "Use one of the known sizes, e.g. 10g, 29g or 55g"
            }
            AdvisorError::FilterNotFound { .. } => {
                "Check the filter name or lower matching.min_filter_score"
            }
            AdvisorError::IoError(_) => "Check that the file exists and is readable",
            AdvisorError::CatalogueError { .. } => "Fix the catalogue data file",
            AdvisorError::ConfigValidationError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::MissingConfigError { .. } => "Fix the configuration and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::Transport(_) => {
                "Could not contact aqadvisor.com. Please try again later.".to_string()
            }
            AdvisorError::Protocol { status } => format!(
                "Could not complete the call to AqAdvisor.com. HTTP Status Code was {}",
                status
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_message_carries_status() {
        let err = AdvisorError::Protocol { status: 503 };
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("503"));
    }

    #[test]
    fn test_unsupported_is_input_error() {
        let err = AdvisorError::Unsupported {
            operation: "remove".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.to_string(), "Operation not supported: remove");
    }

    #[test]
    fn test_severity_drives_exit_code_tiers() {
        let io = AdvisorError::IoError(std::io::Error::other("disk gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let missing = AdvisorError::MissingConfigError {
            field: "fish".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::High);

        let transport = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let network = AdvisorError::from(transport);
        assert_eq!(network.category(), ErrorCategory::Network);
        assert_eq!(network.severity(), ErrorSeverity::Medium);
        assert!(network.severity() < missing.severity());
    }
}
