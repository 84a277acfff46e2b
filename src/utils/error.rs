use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No container element with id '{id}'")]
    MissingContainer { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Page,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::HttpClientError(_) => ErrorCategory::Network,
            FetchError::UrlError(_)
            | FetchError::ConfigError { .. }
            | FetchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FetchError::MissingContainer { .. } => ErrorCategory::Page,
            FetchError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Page => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::HttpClientError(_) => "Check that the directory server is reachable",
            FetchError::UrlError(_) => {
                "Use the directory page URL, e.g. http://localhost:8000/teachers/directory/"
            }
            FetchError::ConfigError { .. } => "Check the TOML configuration file syntax",
            FetchError::InvalidConfigValueError { .. } => "Correct the configuration value",
            FetchError::MissingContainer { .. } => {
                "Register the container element before fetching into it"
            }
            FetchError::IoError(_) => {
                "Check file permissions and that the output directory exists"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::MissingContainer { id } => {
                format!("The page has no '{}' container to render into", id)
            }
            FetchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container_is_page_error() {
        let err = FetchError::MissingContainer {
            id: "teachers-container".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Page);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("teachers-container"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let errors = [
            FetchError::from(url::Url::parse("list/").unwrap_err()),
            FetchError::ConfigError {
                message: "TOML parsing error".to_string(),
            },
            FetchError::InvalidConfigValueError {
                field: "server.base_url".to_string(),
                value: "http://localhost/teachers/directory".to_string(),
                reason: "path must end with '/'".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Configuration);
            assert_eq!(err.severity(), ErrorSeverity::High);
        }
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = FetchError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
