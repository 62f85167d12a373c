use once_cell::sync::Lazy;
use regex::Regex;

use super::RuleViolation;

/// Something, an `@`, something, a dot, something. None of the parts may hold
/// whitespace or a byte order mark.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(value: String) -> Result<ContactEmail, RuleViolation> {
        if EMAIL_SHAPE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(RuleViolation::InvalidEmail)
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
