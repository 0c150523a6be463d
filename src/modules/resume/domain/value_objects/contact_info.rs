use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use super::optional_text;
use crate::resume::domain::errors::ValidationError;

const MAX_ADDRESS_LEN: usize = 200;

// ============================================================================
// PhoneNumber
// ============================================================================

static PHONE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn phone_patterns() -> &'static [Regex] {
    PHONE_PATTERNS.get_or_init(|| {
        [
            // Korean mobile: 010-1234-5678
            r"^01[016789]\d{7,8}$",
            // Korean landline: 02-123-4567, 031-1234-5678
            r"^0(2|[3-6][1-5])\d{7,8}$",
            // Internet telephony: 070-1234-5678
            r"^070\d{8}$",
            // E.164
            r"^\+[1-9]\d{7,14}$",
        ]
        .into_iter()
        .map(|p| Regex::new(p).expect("phone pattern must compile"))
        .collect()
    })
}

/// Phone number stored without separators, e.g. `01012345678` or `+821012345678`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn try_new(value: &str) -> Result<Self, ValidationError> {
        let raw = value.trim();
        if raw.is_empty() {
            return Err(ValidationError::EmptyField("phone"));
        }

        let normalized = normalize_phone(raw)?;
        if !phone_patterns().iter().any(|re| re.is_match(&normalized)) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drops spaces, dashes, dots and parentheses. A leading `+` survives.
/// Any other character makes the number invalid.
fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let mut normalized = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => normalized.push(c),
            '+' if i == 0 => normalized.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(ValidationError::InvalidPhone(raw.to_string())),
        }
    }
    Ok(normalized)
}

// ============================================================================
// Email
// ============================================================================

/// Lowercased, syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn try_new(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }

        if !EmailAddress::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ContactInfo
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    phone: Option<PhoneNumber>,
    email: Option<Email>,
    address: Option<String>,
}

impl ContactInfo {
    /// At least one of `phone` and `email` must be present.
    pub fn try_new(
        phone: Option<PhoneNumber>,
        email: Option<Email>,
        address: Option<String>,
    ) -> Result<Self, ValidationError> {
        if phone.is_none() && email.is_none() {
            return Err(ValidationError::MissingContact);
        }

        let address = optional_text("address", address, MAX_ADDRESS_LEN)?;

        Ok(Self {
            phone,
            email,
            address,
        })
    }

    /// Convenience for raw strings coming from a parser or a form.
    pub fn parse(
        phone: Option<&str>,
        email: Option<&str>,
        address: Option<String>,
    ) -> Result<Self, ValidationError> {
        let phone = phone
            .filter(|p| !p.trim().is_empty())
            .map(PhoneNumber::try_new)
            .transpose()?;
        let email = email
            .filter(|e| !e.trim().is_empty())
            .map(Email::try_new)
            .transpose()?;

        Self::try_new(phone, email, address)
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// True only when both sides carry an email and the emails are equal.
    pub fn shares_email(&self, other: &ContactInfo) -> bool {
        matches!((&self.email, &other.email), (Some(a), Some(b)) if a == b)
    }

    pub fn shares_phone(&self, other: &ContactInfo) -> bool {
        matches!((&self.phone, &other.phone), (Some(a), Some(b)) if a == b)
    }
}
