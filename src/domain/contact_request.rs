use super::{ContactEmail, ContactMessage, ContactName, ContactSubject};

/// A contact form that passed every validation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}
