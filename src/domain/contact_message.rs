use super::RuleViolation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub const MIN_LENGTH: usize = 10;

    pub fn parse(value: String) -> Result<ContactMessage, RuleViolation> {
        if value.encode_utf16().count() < Self::MIN_LENGTH {
            Err(RuleViolation::MessageTooShort)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
