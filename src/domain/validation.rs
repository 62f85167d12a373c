use std::fmt::{Display, Formatter};

use super::{
    form_input::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD, SUBJECT_FIELD},
    ContactEmail, ContactMessage, ContactName, ContactRequest, ContactSubject, FormInput,
};

/// A single failed validation rule. The `Display` output is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("Name must be at least {} characters", ContactName::MIN_LENGTH)]
    NameTooShort,
    #[error("Please provide a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least {} characters", ContactSubject::MIN_LENGTH)]
    SubjectTooShort,
    #[error("Message must be at least {} characters", ContactMessage::MIN_LENGTH)]
    MessageTooShort,
}

impl RuleViolation {
    /// Name of the form field the rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            RuleViolation::NameTooShort => NAME_FIELD,
            RuleViolation::InvalidEmail => EMAIL_FIELD,
            RuleViolation::SubjectTooShort => SUBJECT_FIELD,
            RuleViolation::MessageTooShort => MESSAGE_FIELD,
        }
    }
}

/// Every rule a form input failed, in rule order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<RuleViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[RuleViolation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ContactRequest),
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Check a form input against every rule. All rules are evaluated so the user
/// sees every problem at once.
pub fn validate(input: &FormInput) -> ValidationResult {
    let name = ContactName::parse(input.name.clone());
    let email = ContactEmail::parse(input.email.clone());
    let subject = ContactSubject::parse(input.subject.clone());
    let message = ContactMessage::parse(input.message.clone());

    match (name, email, subject, message) {
        (Ok(name), Ok(email), Ok(subject), Ok(message)) => ValidationResult::Valid(ContactRequest {
            name,
            email,
            subject,
            message,
        }),
        (name, email, subject, message) => {
            let violations = [
                name.err(),
                email.err(),
                subject.err(),
                message.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            ValidationResult::Invalid(ValidationErrors(violations))
        }
    }
}
