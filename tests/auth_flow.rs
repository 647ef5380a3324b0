use portfolio_client::error::Error;
use portfolio_client::Portfolio;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sign_in_posts_the_credentials_and_stores_a_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auths/admin-login"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-123" })))
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    let session = portfolio
        .auth()
        .sign_in("admin@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.token(), "jwt-123");
    assert_eq!(session.email(), "admin@example.com");
    assert!(portfolio.auth().is_signed_in());
    assert_eq!(
        portfolio.auth().session().map(|s| s.token().to_string()),
        Some("jwt-123".to_string())
    );
}

#[tokio::test]
async fn rejected_credentials_surface_the_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auths/admin-login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    let err = portfolio
        .auth()
        .sign_in("admin@example.com", "wrong")
        .await
        .unwrap_err();

    match err {
        Error::Auth(message) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected an auth error, got {:?}", other),
    }
    assert!(!portfolio.auth().is_signed_in());
}

#[tokio::test]
async fn rejection_without_a_body_message_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auths/admin-login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    let err = portfolio
        .auth()
        .sign_in("admin@example.com", "wrong")
        .await
        .unwrap_err();

    match err {
        Error::Auth(message) => assert_eq!(message, "Login failed"),
        other => panic!("expected an auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_backend_maps_to_a_friendly_message() {
    // Bind a port, then free it so the connection is refused. A pooled
    // server (`MockServer::start`) keeps its port bound after drop, so
    // build a dedicated one.
    let server = MockServer::builder().start().await;
    let url = server.uri();
    drop(server);

    let portfolio = Portfolio::new(&url);
    let err = portfolio
        .auth()
        .sign_in("admin@example.com", "hunter2")
        .await
        .unwrap_err();

    match err {
        Error::Auth(message) => assert_eq!(message, "Something went wrong. Try again."),
        other => panic!("expected an auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn a_successful_response_still_needs_a_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auths/admin-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    let err = portfolio
        .auth()
        .sign_in("admin@example.com", "hunter2")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth(_)));
    assert!(!portfolio.auth().is_signed_in());
}

#[tokio::test]
async fn sign_out_clears_the_session_locally() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auths/admin-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-123" })))
        // Signing out must not call the backend.
        .expect(1)
        .mount(&server)
        .await;

    let portfolio = Portfolio::new(&server.uri());
    portfolio
        .auth()
        .sign_in("admin@example.com", "hunter2")
        .await
        .unwrap();
    assert!(portfolio.auth().is_signed_in());

    portfolio.auth().sign_out();

    assert!(!portfolio.auth().is_signed_in());
    assert!(portfolio.auth().session().is_none());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
