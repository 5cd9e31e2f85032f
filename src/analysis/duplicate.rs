//! Duplicate-content detection by body fingerprint

use crate::analysis::types::DuplicateStatus;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Hex SHA-256 digest of a page body
pub fn fingerprint(body: &str) -> String {
    hex::encode(Sha256::digest(body.as_bytes()))
}

/// Fingerprint -> first URL seen with it
///
/// Lives as long as the analysis session that owns it. Entries are only ever
/// added.
#[derive(Debug, Clone, Default)]
pub struct FingerprintStore {
    first_seen: HashMap<String, String>,
}

impl FingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `body` and records it under `url` if it is new
    pub fn classify(&mut self, body: &str, url: &str) -> DuplicateStatus {
        let digest = fingerprint(body);

        if let Some(first_url) = self.first_seen.get(&digest) {
            tracing::debug!("{} duplicates {}", url, first_url);
            return DuplicateStatus::DuplicateOf(first_url.clone());
        }

        self.first_seen.insert(digest, url.to_string());
        DuplicateStatus::Unique
    }

    /// Number of distinct bodies seen
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }
}
