use crate::e2e::helpers;

use helpers::mocks::MOCK_STORY;
use helpers::{TestContext, TestOptions};
use storybook_backend::client::{ClientOutcome, StoryClient};
use storybook_backend::domain::story::StoryRequest;
use test_context::test_context;

fn intake_request(age: i64, theme: &str) -> StoryRequest {
    StoryRequest {
        age,
        reading_level: "Intermediate".to_string(),
        theme: theme.to_string(),
        gender: "Male".to_string(),
        description: Some(String::new()),
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_the_returned_storybook(ctx: &TestContext) {
    let client = StoryClient::new(ctx.client.base_url());

    let outcome = client.submit(&intake_request(10, "magic")).await.unwrap();

    match outcome {
        ClientOutcome::Story(markdown) => {
            assert!(markdown.contains("# 📖 Adaptive Storybook: Magic"));
            assert!(markdown.contains(MOCK_STORY));
        }
        other => panic!("expected a story, got {:?}", other),
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_validation_warning_on_rejection(ctx: &TestContext) {
    let client = StoryClient::new(ctx.client.base_url());

    let outcome = client.submit(&intake_request(10, "")).await.unwrap();

    assert_eq!(
        outcome,
        ClientOutcome::Rejected {
            status: 422,
            message: Some("⚠️ Theme must be provided.".to_string()),
        }
    );
    assert!(outcome
        .error_message()
        .unwrap()
        .starts_with("Error generating story. Please try again."));
}

#[tokio::test]
async fn it_should_show_legacy_warning_document_as_story() {
    let ctx = TestContext::start(TestOptions {
        soft_validation_errors: true,
        ..Default::default()
    })
    .await;
    let client = StoryClient::new(ctx.client.base_url());

    let outcome = client.submit(&intake_request(10, "")).await.unwrap();

    assert_eq!(
        outcome,
        ClientOutcome::Story("⚠️ Theme must be provided.".to_string())
    );
}
