use serde::{Deserialize, Serialize};

use glowdesk_core::ValueObject;

/// LeadSource value object: how a client found the business.
///
/// Free-form tag normalized to lowercase; construction never fails. Blank
/// input falls back to [`LeadSource::other`]. Named constructors cover the
/// common sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadSource {
    value: String,
}

impl LeadSource {
    pub const INSTAGRAM: &'static str = "instagram";
    pub const REFERRAL: &'static str = "referral";
    pub const GOOGLE: &'static str = "google";
    pub const FACEBOOK: &'static str = "facebook";
    pub const WALK_IN: &'static str = "walk_in";
    pub const OTHER: &'static str = "other";

    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::other();
        }

        Self {
            value: trimmed.to_lowercase(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn instagram() -> Self {
        Self {
            value: Self::INSTAGRAM.to_string(),
        }
    }

    pub fn referral() -> Self {
        Self {
            value: Self::REFERRAL.to_string(),
        }
    }

    pub fn google() -> Self {
        Self {
            value: Self::GOOGLE.to_string(),
        }
    }

    pub fn facebook() -> Self {
        Self {
            value: Self::FACEBOOK.to_string(),
        }
    }

    pub fn walk_in() -> Self {
        Self {
            value: Self::WALK_IN.to_string(),
        }
    }

    pub fn other() -> Self {
        Self {
            value: Self::OTHER.to_string(),
        }
    }
}

impl ValueObject for LeadSource {}

impl core::fmt::Display for LeadSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}
