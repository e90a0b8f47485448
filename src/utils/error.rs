use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeerError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Upstream API unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("Upstream response is not valid JSON: {message}")]
    BadUpstreamResponse { message: String },

    #[error("Upstream record does not fit the {projection} projection: field '{field}' {reason}")]
    InvalidUpstreamShape {
        projection: &'static str,
        field: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BeerError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// 對外回應使用的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::BadUpstreamResponse { .. } | Self::InvalidUpstreamShape { .. } => 406,
            _ => 500,
        }
    }

    /// 給客戶端判斷用的錯誤代碼
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            Self::BadUpstreamResponse { .. } => "BAD_UPSTREAM_RESPONSE",
            Self::InvalidUpstreamShape { .. } => "INVALID_UPSTREAM_SHAPE",
            Self::IoError(_) => "IO_ERROR",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => "CONFIG_ERROR",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { message } => message.clone(),
            Self::UpstreamUnavailable { .. } => "Error Api Server side".to_string(),
            Self::BadUpstreamResponse { .. } => "Response not JSONable".to_string(),
            Self::InvalidUpstreamShape { .. } => {
                "Received Json does not have required keys".to_string()
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BeerError>;
