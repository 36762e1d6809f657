use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use glowdesk_core::{DomainError, DomainResult, ValueObject};

// Instagram usernames: 1-30 characters, alphanumeric, dots, underscores.
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]{1,30}$").expect("handle regex is valid"));

/// Instagram value object.
///
/// Stores the bare handle (no leading `@`); a single leading `@` in the
/// input is stripped before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instagram {
    handle: String,
}

impl Instagram {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Instagram handle cannot be empty"));
        }

        let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if !HANDLE_RE.is_match(handle) {
            return Err(DomainError::validation(
                "Invalid Instagram handle. Must be 1-30 characters (letters, numbers, dots, underscores)",
            ));
        }

        Ok(Self {
            handle: handle.to_string(),
        })
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Canonical profile URL.
    pub fn url(&self) -> String {
        format!("https://instagram.com/{}", self.handle)
    }
}

impl ValueObject for Instagram {}

impl core::fmt::Display for Instagram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.handle)
    }
}
