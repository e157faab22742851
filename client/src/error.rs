use {crate::types::ExtrinsicError, serde_json::Value, thiserror::Error};

pub type Result<T> = std::result::Result<T, SdkError>;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Request to {url} failed: {message}")]
    Transport {
        url: String,
        status: Option<u16>,
        body: Value,
        message: String,
    },

    #[error("{message}")]
    Application {
        message: String,
        details: Option<Value>,
    },

    #[error("Account is not set, unable to sign {0}")]
    MissingAccount(String),

    #[error("Invalid secret uri: {0}")]
    Signing(String),

    #[error("Invalid address {0:?}: {1}")]
    InvalidAddress(String, String),

    #[error("Unable to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Unable to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SdkError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Transport { .. })
    }

    /// Structured details attached by the chain, if any.
    pub fn details(&self) -> Option<&Value> {
        match self {
            SdkError::Application { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Transport {
            url: e.url().map(|url| url.to_string()).unwrap_or_default(),
            status: e.status().map(|status| status.as_u16()),
            body: Value::Null,
            message: e.to_string(),
        }
    }
}

impl From<ExtrinsicError> for SdkError {
    fn from(e: ExtrinsicError) -> Self {
        let message = match e.name {
            Some(name) if !name.is_empty() => format!("{}: {}", name, e.message),
            _ => e.message,
        };

        SdkError::Application {
            message,
            details: e.details,
        }
    }
}
