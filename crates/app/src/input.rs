//! Parsing of optional transport inputs into value objects.
//!
//! Blank strings arrive constantly from form submissions; they mean
//! "not provided", not "invalid".

use glowdesk_clients::{Instagram, PhoneNumber};
use glowdesk_core::DomainResult;

/// `None` or a blank string becomes `Ok(None)`; anything else must be a
/// valid phone number.
pub fn parse_optional_phone(raw: Option<&str>) -> DomainResult<Option<PhoneNumber>> {
    match raw {
        Some(s) if !s.trim().is_empty() => Ok(Some(PhoneNumber::new(s)?)),
        _ => Ok(None),
    }
}

/// Same contract as [`parse_optional_phone`], for instagram handles.
pub fn parse_optional_instagram(raw: Option<&str>) -> DomainResult<Option<Instagram>> {
    match raw {
        Some(s) if !s.trim().is_empty() => Ok(Some(Instagram::new(s)?)),
        _ => Ok(None),
    }
}
