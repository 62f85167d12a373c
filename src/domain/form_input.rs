use crate::form::FormSurface;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const SUBJECT_FIELD: &str = "subject";
pub const MESSAGE_FIELD: &str = "message";

/// The four validated fields of a contact form, trimmed.
///
/// Built fresh from the form on every submit attempt and never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// `str::trim` plus the byte order mark, which browsers also strip from form values.
fn trim(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_owned()
}

impl FormInput {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: trim(name),
            email: trim(email),
            subject: trim(subject),
            message: trim(message),
        }
    }

    /// Read the current field values. Fields the form does not have read as empty.
    pub fn read_from<F>(form: &F) -> Self
    where
        F: FormSurface + ?Sized,
    {
        Self::new(
            &form.read_field(NAME_FIELD),
            &form.read_field(EMAIL_FIELD),
            &form.read_field(SUBJECT_FIELD),
            &form.read_field(MESSAGE_FIELD),
        )
    }
}
