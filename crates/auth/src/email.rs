use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use glowdesk_core::{DomainError, DomainResult, ValueObject};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Email value object.
///
/// Stored lowercased and trimmed; construction is the only validation point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email {
    value: String,
}

impl Email {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.trim().is_empty() {
            return Err(DomainError::validation("Email cannot be empty"));
        }

        if !EMAIL_RE.is_match(raw.trim()) {
            return Err(DomainError::validation("Invalid email format"));
        }

        Ok(Self {
            value: raw.trim().to_lowercase(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.value
            .split_once('@')
            .map(|(_, d)| d)
            .unwrap_or_default()
    }
}

impl ValueObject for Email {}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}
