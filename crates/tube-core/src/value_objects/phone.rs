//! Phone number value object

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Validated phone number in loose E.164 form.
///
/// Accepts an optional leading `+` followed by 10 to 15 digits. Spaces and
/// hyphens in the input are stripped before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and normalize a raw phone number
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

        if digits.len() < 10 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(raw.to_string()));
        }

        Ok(Self(cleaned))
    }

    /// The normalized form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}
