//! Shared secret guarding destructive operations.
//!
//! The configured key is kept in a buffer that is wiped on drop. Submitted
//! keys are compared through SHA-256 digests so the comparison always works on
//! fixed-length input, and only a truncated digest fingerprint is ever logged.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of the logged fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Configured API key.
///
/// # Examples
/// ```
/// use cafe_directory::domain::ApiKey;
///
/// let key = ApiKey::new("TopSecretAPIKey").expect("non-empty key");
/// assert!(key.matches("TopSecretAPIKey"));
/// assert!(!key.matches("guess"));
/// ```
#[derive(Clone)]
pub struct ApiKey {
    digest: Zeroizing<[u8; 32]>,
}

impl ApiKey {
    /// Build a key from its secret text. Blank secrets are rejected so an
    /// empty submission can never match.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = Zeroizing::new(secret.into());
        if secret.trim().is_empty() {
            return None;
        }
        Some(Self {
            digest: Zeroizing::new(digest(secret.as_bytes())),
        })
    }

    /// Whether `candidate` equals the configured secret.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = digest(candidate.as_bytes());
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0_u8, |acc, (left, right)| acc | (left ^ right))
            == 0
    }

    /// Short hex fingerprint safe to print in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        hex::encode(self.digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}
