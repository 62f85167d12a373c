use super::RuleViolation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LENGTH: usize = 2;

    /// Construct a valid [`ContactName`] from an already trimmed String.
    pub fn parse(value: String) -> Result<ContactName, RuleViolation> {
        // Length is counted in UTF-16 code units, so an empty value is always too short
        let is_too_short = value.encode_utf16().count() < Self::MIN_LENGTH;

        if is_too_short {
            Err(RuleViolation::NameTooShort)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
