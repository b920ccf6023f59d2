use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Invalid receipt: {reason}")]
    InvalidReceipt { reason: String },

    #[error("No receipt found for id {id}")]
    NotFound { id: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Storage,
    Configuration,
}

impl ReceiptError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidReceipt {
            reason: reason.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidReceipt { .. } | Self::NotFound { .. } => ErrorCategory::Client,
            Self::Storage { .. } => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
        }
    }

    /// HTTP 狀態碼 (僅對請求期間的錯誤有意義)
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidReceipt { .. } => 400,
            Self::NotFound { .. } => 404,
            _ => 500,
        }
    }

    /// 對外顯示的固定訊息，不洩漏內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidReceipt { .. } => "The receipt is invalid.".to_string(),
            Self::NotFound { .. } => "No receipt found for that ID.".to_string(),
            Self::Storage { .. } => "Internal server error.".to_string(),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                format!("Invalid configuration: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
