use reqwest::Client;

use crate::error::SubmissionError;

/// Delivers contact forms to their endpoint as url-encoded POST requests.
#[derive(Clone, Debug, Default)]
pub struct SubmissionClient {
    http_client: Client,
}

impl SubmissionClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// POST the given name/value pairs to `action`, returning the response body
    /// on any 2xx status.
    ///
    /// There is no timeout: a server that never answers keeps the future pending.
    #[tracing::instrument(
        name = "Posting contact form",
        skip(self, pairs),
        fields(field_count = pairs.len())
    )]
    pub async fn post_form(
        &self,
        action: &str,
        pairs: &[(String, String)],
    ) -> Result<String, SubmissionError> {
        let response = self
            .http_client
            .post(action)
            .form(pairs)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        // An unreadable body is treated as an empty one, the status still decides the outcome
        let body = response.text().await.unwrap_or_else(|e| {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to read the contact form response body"
            );
            String::new()
        });

        if status.is_success() {
            Ok(body)
        } else {
            Err(SubmissionError::Server { status, body })
        }
    }
}
