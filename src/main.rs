use std::sync::Arc;

use anyhow::Context;
use contact_form::{
    configuration::get_configuration,
    controller::ContactFormController,
    form::{SubmitEvent, SubmitTrigger, TerminalForm},
    submission_client::SubmissionClient,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up configuration
    let configuration = get_configuration().context("Failed to read configuration")?;

    // Set up tracing. Logs go to stderr, the form owns stdout.
    telemetry::init_from_settings(
        "contact_form".into(),
        &configuration.telemetry,
        std::io::stderr,
    );

    let form = Arc::new(TerminalForm::stdout(configuration.form.action.clone()));
    let controller = ContactFormController::new(
        Arc::clone(&form),
        SubmissionClient::new(),
        configuration.form.labels(),
    );
    tracing::info!("Contact form posting to {}", configuration.form.action);

    let stdin = std::io::stdin();
    while form
        .prompt(&mut stdin.lock())
        .context("Failed to read the contact form from stdin")?
    {
        let mut event = SubmitEvent::new(SubmitTrigger::Affordance);
        controller.on_submit(&mut event).await;
    }

    Ok(())
}
