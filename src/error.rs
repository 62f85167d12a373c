use reqwest::StatusCode;

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Oops! An error occurred and your message could not be sent.";
pub const BAD_REQUEST_MESSAGE: &str = "Please check your input and try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Why a validated contact form did not reach the endpoint.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Failed to get a response from the contact form endpoint")]
    Transport(#[source] reqwest::Error),
    #[error("The contact form endpoint answered with {status}")]
    Server { status: StatusCode, body: String },
}

impl SubmissionError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmissionError::Transport(_) => None,
            SubmissionError::Server { status, .. } => Some(*status),
        }
    }

    /// The text to show the user. Whatever the server said wins over anything
    /// derived from the status code.
    pub fn feedback_message(&self) -> String {
        match self {
            SubmissionError::Server { body, .. } if !body.is_empty() => body.clone(),
            SubmissionError::Server { status, .. } if *status == StatusCode::BAD_REQUEST => {
                BAD_REQUEST_MESSAGE.to_owned()
            }
            SubmissionError::Server { status, .. }
                if *status == StatusCode::INTERNAL_SERVER_ERROR =>
            {
                SERVER_ERROR_MESSAGE.to_owned()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Format an error followed by every error in its source chain.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
