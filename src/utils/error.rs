use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code; every error exits non-zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
            ErrorSeverity::Low => 4,
        }
    }
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::ApiError(_) | StoreError::HttpStatus { .. } => ErrorCategory::Network,
            StoreError::IoError(_) => ErrorCategory::Io,
            StoreError::SerializationError(_) => ErrorCategory::Data,
            StoreError::ConfigError { .. }
            | StoreError::InvalidConfigValueError { .. }
            | StoreError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StoreError::InvalidCommand { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::ApiError(e) if e.is_timeout() => {
                "Increase catalog.timeout_seconds or check your connection"
            }
            StoreError::ApiError(_) => "Check your network connection and the API base URL",
            StoreError::HttpStatus { .. } => "The catalog API rejected the request; try again later",
            StoreError::IoError(_) => "Check that the file exists and is readable",
            StoreError::SerializationError(_) => {
                "The catalog API returned an unexpected payload; check the API base URL"
            }
            StoreError::ConfigError { .. } => "Fix the configuration file and retry",
            StoreError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value in your arguments or config file"
            }
            StoreError::MissingConfigError { .. } => "Add the missing setting to the config file",
            StoreError::InvalidCommand { .. } => "Type 'help' to list the available commands",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::ApiError(_) | StoreError::HttpStatus { .. } => {
                "Could not reach the product catalog".to_string()
            }
            StoreError::SerializationError(_) => "Could not read the product catalog".to_string(),
            other => other.to_string(),
        }
    }

    pub(crate) fn invalid_command(message: impl Into<String>) -> Self {
        StoreError::InvalidCommand {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
