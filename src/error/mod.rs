//! Error handling for the Bedrock latency probe

use thiserror::Error;

/// Custom error types for the latency probe
#[derive(Error, Debug)]
pub enum AppError {
    /// Client initialization errors (credential resolution, transport setup)
    #[error("Client initialization error: {0}")]
    ClientInit(String),

    /// Model invocation errors (transport failures, service-side rejections)
    #[error("Model invocation error: {0}")]
    Invocation(String),

    /// Response parsing errors (undecodable response bodies)
    #[error("Response parsing error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (console writes, file operations)
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new client initialization error
    pub fn client_init<S: Into<String>>(message: S) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new model invocation error
    pub fn invocation<S: Into<String>>(message: S) -> Self {
        Self::Invocation(message.into())
    }

    /// Create a new response parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::ClientInit(_) => "INIT",
            Self::Invocation(_) => "INVOKE",
            Self::Parse(_) => "PARSE",
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check whether this error stems from configuration or usage rather than
    /// the run itself
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Validation(_))
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::ClientInit(_) => {
                    format!("[{}] {}", category.magenta().bold(), message.magenta())
                }
                Self::Invocation(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Parse(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Io(_) => {
                    format!("[{}] {}", category.blue().bold(), message.blue())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        Self::config(format!("Invalid URL: {}", error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON decode error: {}", error))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::invocation(format!("Request timed out: {}", error))
        } else if error.is_connect() {
            Self::invocation(format!("Connection failed: {}", error))
        } else if error.is_builder() {
            Self::client_init(error.to_string())
        } else {
            Self::invocation(error.to_string())
        }
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let original_error = e.into();
            let context = f();
            AppError::internal(format!("{}: {}", context, original_error))
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}
