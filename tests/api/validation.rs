use contact_form::{controller::SubmissionState, form::FeedbackMode};
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helpers::spawn_form;

#[tokio::test]
async fn invalid_fields_are_reported_together_and_nothing_is_sent() {
    // Arrange
    let app = spawn_form().await;
    app.fill("J", "x@y.com", "Hi", "short");

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // Assert that no request reaches the endpoint
        .expect(0)
        .mount(&app.endpoint)
        .await;

    // Act
    app.click_submit().await;

    // Assert
    assert_eq!(
        app.feedback(),
        (
            FeedbackMode::Error,
            "Name must be at least 2 characters, \
            Subject must be at least 3 characters, \
            Message must be at least 10 characters"
                .to_string()
        )
    );
    assert!(app.form().affordance_history().is_empty());
    assert_eq!(app.controller.state(), SubmissionState::Idle);
    assert_eq!(app.form().field("name").as_deref(), Some("J"));
}

#[tokio::test]
async fn each_invalid_field_is_rejected_locally() {
    let test_cases = vec![
        (
            ["", "ada@example.com", "Engines", "Is the engine for rent?"],
            "Name must be at least 2 characters",
            "empty name",
        ),
        (
            ["Ada", "not-an-email", "Engines", "Is the engine for rent?"],
            "Please provide a valid email address",
            "email without an at symbol",
        ),
        (
            ["Ada", "ada@example", "Engines", "Is the engine for rent?"],
            "Please provide a valid email address",
            "email domain without a dot",
        ),
        (
            ["Ada", "ada@example.com", "  Hi  ", "Is the engine for rent?"],
            "Subject must be at least 3 characters",
            "short subject padded with spaces",
        ),
        (
            ["Ada", "ada@example.com", "Engines", "         "],
            "Message must be at least 10 characters",
            "whitespace only message",
        ),
    ];

    for ([name, email, subject, message], expected, description) in test_cases {
        // Arrange
        let app = spawn_form().await;
        app.fill(name, email, subject, message);
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.endpoint)
            .await;

        // Act
        app.click_submit().await;

        // Assert
        assert_eq!(
            app.feedback(),
            (FeedbackMode::Error, expected.to_string()),
            "The form was not rejected correctly when the payload had an {}",
            description
        );
    }
}

#[tokio::test]
async fn an_empty_form_reports_every_rule() {
    // Arrange
    let app = spawn_form().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.endpoint)
        .await;

    // Act
    app.click_submit().await;

    // Assert
    let (mode, text) = app.feedback();
    assert_eq!(mode, FeedbackMode::Error);
    assert_eq!(
        text.split(", ").collect::<Vec<_>>(),
        vec![
            "Name must be at least 2 characters",
            "Please provide a valid email address",
            "Subject must be at least 3 characters",
            "Message must be at least 10 characters",
        ]
    );
}

#[tokio::test]
async fn surrounding_whitespace_does_not_fail_validation() {
    // Arrange
    let app = spawn_form().await;
    app.fill("  Bob  ", " bob@example.com\t", " Hey ", "\n1234567890\n");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("Thanks!"))
        .expect(1)
        .mount(&app.endpoint)
        .await;

    // Act
    app.click_submit().await;

    // Assert
    assert_eq!(app.feedback(), (FeedbackMode::Success, "Thanks!".to_string()));
}

#[tokio::test]
async fn a_new_attempt_clears_the_previous_feedback_and_field_errors() {
    // Arrange
    let app = spawn_form().await;
    app.fill("J", "x@y.com", "Hi", "short");
    app.click_submit().await;
    assert_eq!(app.feedback().0, FeedbackMode::Error);

    app.form().set_field_error("name", "Too short");
    app.fill_valid();
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("Thanks!"))
        .expect(1)
        .mount(&app.endpoint)
        .await;

    // Act
    app.click_submit().await;

    // Assert
    assert_eq!(app.feedback(), (FeedbackMode::Success, "Thanks!".to_string()));
    assert_eq!(app.form().field_error("name"), None);
}
