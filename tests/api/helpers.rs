use std::sync::Arc;

use contact_form::{
    controller::{AffordanceLabels, ContactFormController},
    form::{FeedbackMode, InMemoryForm, SubmitEvent, SubmitTrigger},
    submission_client::SubmissionClient,
    telemetry::{get_subscriber, init_subscriber},
};
use fake::{
    faker::{internet::en::SafeEmail, lorem::en::Paragraph, name::en::Name},
    Fake,
};
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber("contact_form=debug,info".into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber("contact_form=debug,info".into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestForm {
    pub endpoint: MockServer,
    pub controller: ContactFormController<InMemoryForm>,
}

/// Bind a controller to an empty in-memory form posting to a fresh mock endpoint.
pub async fn spawn_form() -> TestForm {
    // Set up subscriber for logging, only first time per run. Other times use existing subscriber.
    Lazy::force(&TRACING);

    let endpoint = MockServer::start().await;
    let form = InMemoryForm::new(format!("{}/contact", endpoint.uri()));
    let controller = ContactFormController::new(
        Arc::new(form),
        SubmissionClient::new(),
        AffordanceLabels::default(),
    );

    TestForm {
        endpoint,
        controller,
    }
}

impl TestForm {
    pub fn form(&self) -> &InMemoryForm {
        self.controller.form()
    }

    pub fn fill(&self, name: &str, email: &str, subject: &str, message: &str) {
        let form = self.form();
        form.set_field("name", name);
        form.set_field("email", email);
        form.set_field("subject", subject);
        form.set_field("message", message);
    }

    /// Fill every field with values that pass validation.
    pub fn fill_valid(&self) {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let message: String = Paragraph(2..4).fake();
        self.fill(&name, &email, "Question about an order", &message);
    }

    pub async fn click_submit(&self) {
        let mut event = SubmitEvent::new(SubmitTrigger::Affordance);
        self.controller.on_submit(&mut event).await;
        assert!(event.default_prevented());
    }

    pub fn feedback(&self) -> (FeedbackMode, String) {
        self.form().feedback()
    }

    pub fn assert_affordance_ready(&self) {
        assert_eq!(
            self.form().affordance(),
            (true, "SEND MESSAGE".to_string()),
            "The submit affordance was not restored"
        );
    }

    /// Name/value pairs of every request the endpoint received.
    pub async fn received_forms(&self) -> Vec<Vec<(String, String)>> {
        self.endpoint
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_urlencoded::from_bytes(&request.body).unwrap())
            .collect()
    }
}
