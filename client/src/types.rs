use {
    crate::error::{Result, SdkError},
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

/// Attribute a token of the collection may carry, optionally restricted to a set of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub trait_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl AttributeSchema {
    pub fn new(trait_type: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            values: None,
        }
    }

    pub fn with_values(trait_type: &str, values: &[&str]) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            values: Some(values.iter().map(|v| v.to_string()).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    pub name: String,
    pub description: String,
    pub symbol: String,
    pub cover_image: Image,
    pub potential_attributes: Vec<AttributeSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

/// Resale revenue share. `percent` is a plain decimal: 5 is 5%, 0.99 is 0.99%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Royalty {
    pub address: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    /// Substrate or Ethereum address
    pub owner: String,
    pub name: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub royalties: Vec<Royalty>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCreated {
    pub collection_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenId {
    pub collection_id: u32,
    pub token_id: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtrinsicError {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ExtrinsicError {
    pub fn new(message: &str) -> Self {
        Self {
            name: None,
            message: message.to_string(),
            details: None,
        }
    }
}

/// Outcome of a chain mutation. At most one of `parsed` and `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResult<T> {
    pub parsed: Option<T>,
    pub error: Option<ExtrinsicError>,
}

impl<T> SubmitResult<T> {
    pub fn parsed(parsed: T) -> Self {
        Self {
            parsed: Some(parsed),
            error: None,
        }
    }

    pub fn failed(error: ExtrinsicError) -> Self {
        Self {
            parsed: None,
            error: Some(error),
        }
    }

    /// An absent `parsed` payload is a failure, whatever the transport said.
    pub fn into_parsed(self) -> Result<T> {
        match (self.parsed, self.error) {
            (Some(parsed), _) => Ok(parsed),
            (None, Some(error)) => Err(error.into()),
            (None, None) => Err(SdkError::Application {
                message: "Result has no parsed payload".to_string(),
                details: None,
            }),
        }
    }
}
