//! Document URL value object

use crate::core::error::QaError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A URL that has both a scheme and a network location (Value Object)
///
/// Only the shape is checked here. Whether the scheme is actually
/// fetchable is decided by the document source at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentUrl {
    url: Url,
}

impl DocumentUrl {
    /// Parse and validate user input.
    pub fn parse(input: &str) -> Result<Self, QaError> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed).map_err(|_| QaError::InvalidUrl(trimmed.to_string()))?;

        if url.scheme().is_empty() {
            return Err(QaError::InvalidUrl(trimmed.to_string()));
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(Self { url }),
            _ => Err(QaError::InvalidUrl(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host portion of the URL (always present after validation)
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }
}

impl std::fmt::Display for DocumentUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl std::str::FromStr for DocumentUrl {
    type Err = QaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DocumentUrl {
    type Error = QaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DocumentUrl> for String {
    fn from(value: DocumentUrl) -> Self {
        value.url.into()
    }
}
