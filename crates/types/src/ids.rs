//! The per-submission application identifier.
//!
//! The identifier joins an application record to its rendered document: it is
//! printed verbatim in the document and used to build the file name.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 6;

/// An opaque application identifier, e.g. `1700000000000-ab12cd`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Wraps an existing identifier without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates `<unix-millis>-<6 lowercase alphanumerics>`.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        Self(format!("{}-{}", millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The file name the rendered document is stored under.
    pub fn document_filename(&self) -> String {
        format!("membership-application-{}.pdf", self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApplicationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_embeds_identifier_verbatim() {
        let id = ApplicationId::from("1700000000000-ab12cd");
        assert_eq!(
            id.document_filename(),
            "membership-application-1700000000000-ab12cd.pdf"
        );
    }

    #[test]
    fn generated_ids_have_millis_and_suffix() {
        let id = ApplicationId::generate();
        let (millis, suffix) = id.as_str().split_once('-').unwrap();
        assert_eq!(millis.len(), 13);
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn blank_id_is_empty() {
        assert!(ApplicationId::new("  ").is_empty());
        assert!(ApplicationId::default().is_empty());
        assert!(!ApplicationId::new("test-001").is_empty());
    }
}
