use serde::{Deserialize, Serialize};

use glowdesk_core::{DomainError, DomainResult, ValueObject};

/// Calling-code prefix to ISO region, for best-effort country detection.
/// Longest-prefix match, 1 to 3 digits. Not exhaustive: numbers outside the
/// table still validate, they just carry no region.
const CALLING_CODES: &[(&str, &str)] = &[
    ("1", "US"),
    ("7", "RU"),
    ("20", "EG"),
    ("27", "ZA"),
    ("30", "GR"),
    ("31", "NL"),
    ("32", "BE"),
    ("33", "FR"),
    ("34", "ES"),
    ("36", "HU"),
    ("39", "IT"),
    ("40", "RO"),
    ("41", "CH"),
    ("43", "AT"),
    ("44", "GB"),
    ("45", "DK"),
    ("46", "SE"),
    ("47", "NO"),
    ("48", "PL"),
    ("49", "DE"),
    ("52", "MX"),
    ("55", "BR"),
    ("61", "AU"),
    ("62", "ID"),
    ("63", "PH"),
    ("64", "NZ"),
    ("65", "SG"),
    ("66", "TH"),
    ("81", "JP"),
    ("82", "KR"),
    ("84", "VN"),
    ("86", "CN"),
    ("90", "TR"),
    ("91", "IN"),
    ("212", "MA"),
    ("213", "DZ"),
    ("216", "TN"),
    ("234", "NG"),
    ("254", "KE"),
    ("351", "PT"),
    ("352", "LU"),
    ("353", "IE"),
    ("358", "FI"),
    ("370", "LT"),
    ("371", "LV"),
    ("372", "EE"),
    ("380", "UA"),
    ("420", "CZ"),
    ("421", "SK"),
    ("966", "SA"),
    ("971", "AE"),
    ("972", "IL"),
    ("974", "QA"),
    ("995", "GE"),
];

/// PhoneNumber value object.
///
/// Accepts international-format numbers (E.164-shaped): a leading `+`
/// followed by 7 to 15 digits, common separators tolerated. Stores the
/// cleaned raw value, an international display string, and a best-effort
/// detected country code. Numbers whose calling code is not recognised still
/// construct; they fall back to `formatted == value` with no country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    value: String,
    formatted: String,
    country_code: Option<String>,
}

impl PhoneNumber {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Phone number cannot be empty"));
        }

        let cleaned = clean(trimmed)
            .filter(|c| is_e164_shaped(c))
            .ok_or_else(|| DomainError::validation("Invalid phone number format"))?;

        match detect_region(&cleaned) {
            Some((region, code_len)) => {
                let formatted = format_international(&cleaned, code_len);
                Ok(Self {
                    value: cleaned,
                    formatted,
                    country_code: Some(region.to_string()),
                })
            }
            // Valid shape but unknown calling code: keep the cleaned value
            // as the display form.
            None => Ok(Self {
                formatted: cleaned.clone(),
                value: cleaned,
                country_code: None,
            }),
        }
    }

    /// Cleaned raw value, e.g. `+33612345678`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// International display form, e.g. `+33 612 345 678`.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Detected ISO region, e.g. `FR`, when the calling code is recognised.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}

impl ValueObject for PhoneNumber {}

impl core::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Strip separators; reject anything that is not a digit, a separator, or a
/// leading `+`.
fn clean(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for (i, ch) in raw.chars().enumerate() {
        match ch {
            '+' if i == 0 => out.push('+'),
            '0'..='9' => out.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }
    Some(out)
}

fn is_e164_shaped(cleaned: &str) -> bool {
    let Some(digits) = cleaned.strip_prefix('+') else {
        return false;
    };
    (7..=15).contains(&digits.len())
        && digits.starts_with(|c: char| ('1'..='9').contains(&c))
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// Longest-prefix match against the calling-code table.
fn detect_region(cleaned: &str) -> Option<(&'static str, usize)> {
    let digits = cleaned.strip_prefix('+')?;
    for len in (1..=3).rev() {
        if digits.len() <= len {
            continue;
        }
        let prefix = &digits[..len];
        if let Some((_, region)) = CALLING_CODES.iter().find(|(code, _)| *code == prefix) {
            return Some((region, len));
        }
    }
    None
}

/// `+CC` then the national part in groups of three digits.
fn format_international(cleaned: &str, code_len: usize) -> String {
    let digits = &cleaned[1..];
    let (code, national) = digits.split_at(code_len);

    let mut out = String::with_capacity(cleaned.len() + 6);
    out.push('+');
    out.push_str(code);
    for (i, ch) in national.chars().enumerate() {
        if i % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
