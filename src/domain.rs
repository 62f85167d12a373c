mod contact_email;
mod contact_message;
mod contact_name;
mod contact_request;
mod contact_subject;
mod form_input;
mod validation;

pub use contact_email::ContactEmail;
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_request::ContactRequest;
pub use contact_subject::ContactSubject;
pub use form_input::{FormInput, EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD, SUBJECT_FIELD};
pub use validation::{validate, RuleViolation, ValidationErrors, ValidationResult};
