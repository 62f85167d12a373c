use super::RuleViolation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubject(String);

impl ContactSubject {
    pub const MIN_LENGTH: usize = 3;

    pub fn parse(value: String) -> Result<ContactSubject, RuleViolation> {
        if value.encode_utf16().count() < Self::MIN_LENGTH {
            Err(RuleViolation::SubjectTooShort)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
