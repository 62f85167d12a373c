use std::time::Duration;

use contact_form::form::{submit_channel, FeedbackMode, SubmitTrigger};
use wiremock::{matchers::path, Mock, ResponseTemplate};

use crate::helpers::spawn_form;

#[tokio::test]
async fn repeated_clicks_while_sending_produce_a_single_request() {
    // Arrange
    let app = spawn_form().await;
    app.fill_valid();
    Mock::given(path("/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Thanks!")
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&app.endpoint)
        .await;

    let (handle, requests) = submit_channel();
    for _ in 0..3 {
        handle.request_submit(SubmitTrigger::Affordance).unwrap();
    }
    drop(handle);

    // Act
    app.controller.clone().run_until_stopped(requests).await;

    // Assert
    assert_eq!(app.feedback(), (FeedbackMode::Success, "Thanks!".to_string()));
    app.assert_affordance_ready();
}

#[tokio::test]
async fn programmatic_requests_are_not_held_back_by_the_affordance() {
    // Arrange
    let app = spawn_form().await;
    app.fill_valid();
    Mock::given(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
        .expect(2)
        .mount(&app.endpoint)
        .await;

    let (handle, requests) = submit_channel();
    handle.request_submit(SubmitTrigger::Affordance).unwrap();
    handle.request_submit(SubmitTrigger::Programmatic).unwrap();
    drop(handle);

    // Act
    app.controller.clone().run_until_stopped(requests).await;

    // Assert
    app.assert_affordance_ready();
}

#[tokio::test]
async fn the_loop_serves_requests_until_the_handle_is_dropped() {
    // Arrange
    let app = spawn_form().await;
    Mock::given(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Thanks!"))
        .expect(1)
        .mount(&app.endpoint)
        .await;

    let (handle, requests) = submit_channel();
    let event_loop = tokio::spawn(app.controller.clone().run_until_stopped(requests));

    // Act: an invalid attempt, then a valid one once the user fixed the form
    app.fill("J", "x@y.com", "Hi", "short");
    handle.request_submit(SubmitTrigger::Affordance).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(app.feedback().0, FeedbackMode::Error);

    app.fill_valid();
    handle.request_submit(SubmitTrigger::Affordance).unwrap();
    drop(handle);
    event_loop.await.unwrap();

    // Assert
    assert_eq!(app.feedback(), (FeedbackMode::Success, "Thanks!".to_string()));
    app.assert_affordance_ready();
}
