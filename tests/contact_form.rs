use portfolio_client::error::Error;
use portfolio_client::resources::MessageDraft;
use portfolio_client::Portfolio;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn draft() -> MessageDraft {
    MessageDraft {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Love the projects page.".to_string(),
        phone: None,
    }
}

#[tokio::test]
async fn send_posts_the_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Love the projects page.",
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "message": "Message received" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    portfolio.contact().send(&draft()).await.unwrap();
}

#[tokio::test]
async fn send_includes_a_phone_number_when_given() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Love the projects page.",
            "phone": "555-0100",
        })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    let mut draft = draft();
    draft.phone = Some("555-0100".to_string());

    portfolio.contact().send(&draft).await.unwrap();
}

#[tokio::test]
async fn invalid_message_never_reaches_the_backend() {
    let server = MockServer::start().await;

    let portfolio = Portfolio::new(&server.uri());
    let mut draft = draft();
    draft.email = "".to_string();
    let err = portfolio.contact().send(&draft).await.unwrap_err();

    match err {
        Error::Validation(problems) => {
            assert_eq!(problems.problems(), ["email is required"]);
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn backend_rejection_surfaces_the_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    let err = portfolio.contact().send(&draft()).await.unwrap_err();

    match err {
        Error::Api { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected an api error, got {:?}", other),
    }
}
