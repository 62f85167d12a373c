use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinSet;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    domain::{validate, ContactRequest, FormInput, ValidationResult},
    form::{FeedbackMode, FormSurface, SubmitEvent, SubmitRequests, SubmitTrigger},
    submission_client::SubmissionClient,
};

/// Labels of the submit affordance while it is ready and while a request is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffordanceLabels {
    pub ready: String,
    pub sending: String,
}

impl Default for AffordanceLabels {
    fn default() -> Self {
        Self {
            ready: "SEND MESSAGE".into(),
            sending: "SENDING...".into(),
        }
    }
}

/// Where the controller is in the submission lifecycle.
///
/// `Succeeded` and `Failed` only remember the last outcome; like `Idle` they
/// accept a new submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Validates a contact form, posts it to the form's action and renders the outcome.
pub struct ContactFormController<F> {
    form: Arc<F>,
    client: SubmissionClient,
    labels: Arc<AffordanceLabels>,
    state: Arc<Mutex<SubmissionState>>,
}

impl<F> Clone for ContactFormController<F> {
    fn clone(&self) -> Self {
        Self {
            form: Arc::clone(&self.form),
            client: self.client.clone(),
            labels: Arc::clone(&self.labels),
            state: Arc::clone(&self.state),
        }
    }
}

impl<F: FormSurface> ContactFormController<F> {
    pub fn new(form: Arc<F>, client: SubmissionClient, labels: AffordanceLabels) -> Self {
        Self {
            form,
            client,
            labels: Arc::new(labels),
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
        }
    }

    pub fn form(&self) -> &Arc<F> {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        lock_state(&self.state).clone()
    }

    /// Handle a submit event from start to finish.
    pub async fn on_submit(&self, event: &mut SubmitEvent) {
        if let Some(submission) = self.begin(event) {
            submission.await;
        }
    }

    /// The synchronous half of [`Self::on_submit`]: suppress the native submission,
    /// reset feedback, validate, and either render the validation errors or
    /// lock the affordance and hand back the request to await.
    #[tracing::instrument(
        name = "Handling submit event",
        skip_all,
        fields(trigger = ?event.trigger())
    )]
    pub fn begin(&self, event: &mut SubmitEvent) -> Option<PendingSubmission<F>> {
        if !event.cancelable() {
            tracing::warn!("Submit event is not cancelable, the native submission will go ahead");
        }
        event.prevent_default();

        self.form.clear_field_errors();
        self.form.set_feedback(FeedbackMode::Neutral, "");

        let input = FormInput::read_from(self.form.as_ref());
        match validate(&input) {
            ValidationResult::Invalid(errors) => {
                tracing::info!(violations = %errors, "Contact form rejected before sending");
                self.form.set_feedback(FeedbackMode::Error, &errors.to_string());
                None
            }
            ValidationResult::Valid(request) => Some(self.submit(request)),
        }
    }

    /// Disable the affordance and prepare the request. The affordance comes back
    /// when the returned submission completes, panics, or is dropped.
    pub fn submit(&self, request: ContactRequest) -> PendingSubmission<F> {
        let guard = AffordanceGuard::engage(
            Arc::clone(&self.form),
            Arc::clone(&self.state),
            &self.labels,
        );
        PendingSubmission {
            controller: self.clone(),
            request,
            action: self.form.action(),
            pairs: self.form.fields(),
            guard,
        }
    }

    /// Serve submit requests until every [`crate::form::SubmitHandle`] is dropped,
    /// then wait for the submissions still in flight.
    ///
    /// Requests raised by the affordance while it is disabled are dropped, like
    /// clicks on a disabled button. Programmatic requests always go through.
    #[tracing::instrument(name = "Contact form event loop", skip_all)]
    pub async fn run_until_stopped(self, mut requests: SubmitRequests) {
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    log_join_failure(joined);
                }
                request = requests.recv() => {
                    let Some(mut event) = request else {
                        break;
                    };
                    let blocked = event.trigger() == SubmitTrigger::Affordance
                        && !self.form.affordance_enabled();
                    if blocked {
                        tracing::debug!("Ignoring submit request from the disabled affordance");
                    } else if let Some(submission) = self.begin(&mut event) {
                        in_flight.spawn(submission.into_future());
                    }
                }
            }
        }

        while let Some(joined) = in_flight.join_next().await {
            log_join_failure(joined);
        }
    }

    fn set_state(&self, state: SubmissionState) {
        *lock_state(&self.state) = state;
    }
}

/// A validated contact form whose request has not completed yet. Await it to send.
#[must_use = "the contact form is only sent when the submission is awaited"]
pub struct PendingSubmission<F: FormSurface> {
    controller: ContactFormController<F>,
    request: ContactRequest,
    action: String,
    pairs: Vec<(String, String)>,
    guard: AffordanceGuard<F>,
}

impl<F: FormSurface> PendingSubmission<F> {
    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    async fn send(self) {
        let Self {
            controller,
            action,
            pairs,
            guard,
            ..
        } = self;
        let form = &controller.form;

        match controller.client.post_form(&action, &pairs).await {
            Ok(body) => {
                tracing::info!("Contact form delivered");
                controller.set_state(SubmissionState::Succeeded(body.clone()));
                form.set_feedback(FeedbackMode::Success, &body);
                form.clear_inputs();
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver contact form"
                );
                let message = e.feedback_message();
                controller.set_state(SubmissionState::Failed(message.clone()));
                form.set_feedback(FeedbackMode::Error, &message);
            }
        }

        drop(guard);
    }
}

impl<F: FormSurface> std::fmt::Debug for PendingSubmission<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("request", &self.request)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

impl<F: FormSurface> IntoFuture for PendingSubmission<F> {
    type Output = ();
    type IntoFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        let span = tracing::info_span!(
            "Submitting contact form",
            submission_id = %Uuid::new_v4(),
            contact_email = %self.request.email,
        );
        Box::pin(self.send().instrument(span))
    }
}

/// Keeps the affordance disabled for as long as it lives.
struct AffordanceGuard<F: FormSurface> {
    form: Arc<F>,
    state: Arc<Mutex<SubmissionState>>,
    ready_label: String,
}

impl<F: FormSurface> AffordanceGuard<F> {
    fn engage(
        form: Arc<F>,
        state: Arc<Mutex<SubmissionState>>,
        labels: &AffordanceLabels,
    ) -> Self {
        form.set_affordance(false, &labels.sending);
        *lock_state(&state) = SubmissionState::Submitting;
        Self {
            form,
            state,
            ready_label: labels.ready.clone(),
        }
    }
}

impl<F: FormSurface> Drop for AffordanceGuard<F> {
    fn drop(&mut self) {
        {
            let mut state = lock_state(&self.state);
            // No outcome was recorded, the submission was abandoned
            if *state == SubmissionState::Submitting {
                *state = SubmissionState::Idle;
            }
        }
        self.form.set_affordance(true, &self.ready_label);
    }
}

fn lock_state(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn log_join_failure(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "A contact form submission task did not complete"
        );
    }
}
