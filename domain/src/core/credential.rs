//! API key value object

/// Opaque API key for the completion service.
///
/// The key is passed through verbatim and never validated locally.
/// It implements neither `Display` nor `Serialize`, and its `Debug`
/// output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    secret: String,
}

impl ApiKey {
    /// Wrap a user-supplied key. Returns None for blank input.
    pub fn try_new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            None
        } else {
            Some(Self { secret })
        }
    }

    /// Access the raw key. Only the outbound request builder should call this.
    pub fn expose_secret(&self) -> &str {
        &self.secret
    }

    /// Replace every occurrence of the key in `text` with a placeholder.
    pub fn redact(&self, text: &str) -> String {
        text.replace(&self.secret, "[REDACTED]")
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::try_new("sk-secret-123").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("sk-secret-123"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(ApiKey::try_new("").is_none());
        assert!(ApiKey::try_new("  ").is_none());
    }

    #[test]
    fn test_expose_is_verbatim() {
        let key = ApiKey::try_new(" sk-with-spaces ").unwrap();
        assert_eq!(key.expose_secret(), " sk-with-spaces ");
    }

    #[test]
    fn test_redact() {
        let key = ApiKey::try_new("sk-abc").unwrap();
        assert_eq!(
            key.redact("Incorrect API key provided: sk-abc."),
            "Incorrect API key provided: [REDACTED]."
        );
    }
}
