//! ApiClient tests against a mocked SmartSearch backend
//!
//! Covers every endpoint the client uses, the request shapes it sends, and
//! how error responses are classified.

mod common;

use common::mocks::{client_for, history_entry, mount_ok, preferences, user_json};
use rstest::rstest;
use serde_json::json;
use smartsearch_ui::api::ApiClient;
use smartsearch_ui::error::ApiError;
use smartsearch_ui::types::{LoginRequest, MessageRole, SignupRequest};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Auth =============

#[tokio::test]
async fn test_current_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("a@b.c")))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).current_user().await.unwrap();
    assert_eq!(user.email.as_deref(), Some("a@b.c"));
    assert_eq!(user.full_name.as_deref(), Some("Ada Lovelace"));
    assert!(user.extra.contains_key("profilePic"));
}

#[tokio::test]
async fn test_current_user_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized - No Token Provided" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("Unauthorized - No Token Provided"));
}

#[tokio::test]
async fn test_login_sends_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "a@b.c", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("a@b.c")))
        .expect(1)
        .mount(&server)
        .await;

    let body = LoginRequest { email: "a@b.c".into(), password: "secret".into() };
    let user = client_for(&server).login(&body).await.unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_login_rejected_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid credentials" })))
        .mount(&server)
        .await;

    let body = LoginRequest { email: "a@b.c".into(), password: "wrong".into() };
    let err = client_for(&server).login(&body).await.unwrap_err();
    assert_eq!(err.message_or("Login failed"), "Invalid credentials");
}

#[tokio::test]
async fn test_signup_uses_full_name_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({ "fullName": "Ada Lovelace", "email": "a@b.c", "password": "secret" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json("a@b.c")))
        .expect(1)
        .mount(&server)
        .await;

    let body = SignupRequest {
        full_name: "Ada Lovelace".into(),
        email: "a@b.c".into(),
        password: "secret".into(),
    };
    assert!(client_for(&server).signup(&body).await.is_ok());
}

#[tokio::test]
async fn test_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out successfully" })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).logout().await.is_ok());
}

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "jwt=token123; Path=/; HttpOnly")
                .set_body_json(user_json("a@b.c")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user/me"))
        .and(header("cookie", "jwt=token123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("a@b.c")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = LoginRequest { email: "a@b.c".into(), password: "secret".into() };
    client.login(&body).await.unwrap();
    assert!(client.current_user().await.is_ok());
}

// ============= Search =============

#[tokio::test]
async fn test_search_returns_backend_payload_unchanged() {
    let server = MockServer::start().await;
    let payload = json!({
        "summary": "Cats are...",
        "results": [
            { "title": "B", "link": "http://b", "snippet": "second" },
            { "title": "A", "link": "http://a", "snippet": "first" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/search/search"))
        .and(query_param("query", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search("cats").await.unwrap();
    assert_eq!(results.summary, "Cats are...");
    let titles: Vec<_> = results.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["B", "A"]);
}

#[rstest]
#[case("cats & dogs")]
#[case("c++ vs rust?")]
#[case("naïve #hash")]
#[tokio::test]
async fn test_search_query_is_encoded(#[case] query: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/search"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "", "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search(query).await.unwrap();
    assert!(results.results.is_empty());
}

#[rstest]
#[case::wrapped(json!({ "history": [history_entry("h1", "cats")] }), 1)]
#[case::bare(json!([history_entry("h1", "cats"), history_entry("h2", "dogs")]), 2)]
#[case::unexpected(json!({ "status": "ok" }), 0)]
#[case::epoch_timestamp(json!({ "history": [
    history_entry("h1", "cats"),
    { "_id": "h2", "query": "dogs", "timestamp": 1735787045000i64 }
] }), 2)]
#[case::entry_without_id(json!({ "history": [history_entry("h1", "cats"), { "query": "no id" }] }), 1)]
#[tokio::test]
async fn test_search_history_shapes(#[case] payload: serde_json::Value, #[case] expected: usize) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/history"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .expect(1)
        .mount(&server)
        .await;

    let history = client_for(&server).search_history(20).await.unwrap();
    assert_eq!(history.len(), expected);
}

#[tokio::test]
async fn test_clear_and_delete_history() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/search/history/clear"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/search/history/h42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.clear_search_history().await.unwrap();
    client.delete_search_history_entry("h42").await.unwrap();
}

// ============= Chat =============

#[tokio::test]
async fn test_chat_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [
                { "_id": "m1", "role": "user", "text": "hello", "timestamp": "2025-01-02T03:04:05Z" },
                { "_id": "m2", "role": "bot", "text": "hi", "timestamp": "2025-01-02T03:04:06Z" }
            ]
        })))
        .mount(&server)
        .await;

    let messages = client_for(&server).chat_history().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[1].text, "hi");
}

#[tokio::test]
async fn test_chat_history_keeps_readable_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [
                { "_id": "m1", "role": "user", "text": "hello" },
                { "_id": "m2", "role": "tool", "text": "lookup" },
                { "_id": "m3", "role": "bot", "text": "hi", "timestamp": 1735787045000i64 }
            ]
        })))
        .mount(&server)
        .await;

    let messages = client_for(&server).chat_history().await.unwrap();
    let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["hello", "hi"]);
}

#[tokio::test]
async fn test_chat_history_without_messages_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert!(client_for(&server).chat_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_send_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({ "text": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "hi there" })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).send_chat("hello").await.unwrap(), "hi there");
}

#[tokio::test]
async fn test_send_chat_without_reply_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let err = client_for(&server).send_chat("hello").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_send_chat_server_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Model overloaded" })))
        .mount(&server)
        .await;

    let err = client_for(&server).send_chat("hello").await.unwrap_err();
    assert_eq!(err.server_error(), Some("Model overloaded"));
}

// ============= Website preferences =============

#[tokio::test]
async fn test_website_preferences() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/website-preference"))
        .respond_with(ResponseTemplate::new(200).set_body_json(preferences(&["spam.com"], &["docs.rs"])))
        .mount(&server)
        .await;

    let prefs = client_for(&server).website_preferences().await.unwrap();
    assert_eq!(prefs.blocked, ["spam.com"]);
    assert_eq!(prefs.boosted, ["docs.rs"]);
}

#[tokio::test]
async fn test_preference_mutations_send_website_body() {
    let server = MockServer::start().await;
    let routes = [
        ("POST", "/api/website-preference/blocked"),
        ("DELETE", "/api/website-preference/unblock"),
        ("POST", "/api/website-preference/boosted"),
        ("DELETE", "/api/website-preference/unboost"),
    ];
    for (verb, route) in routes {
        Mock::given(method(verb))
            .and(path(route))
            .and(body_json(json!({ "website": "example.com" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    client.block_website("example.com").await.unwrap();
    client.unblock_website("example.com").await.unwrap();
    client.boost_website("example.com").await.unwrap();
    client.unboost_website("example.com").await.unwrap();
}

// ============= Errors =============

#[tokio::test]
async fn test_error_without_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).logout().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.message_or("Logout failed"), "Logout failed");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9
    let client = ApiClient::new("http://127.0.0.1:9/api").unwrap();
    let err = client.logout().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.message_or("Logout failed"), "Logout failed");
}

#[tokio::test]
async fn test_unknown_mutation_route_is_status_error() {
    let server = MockServer::start().await;
    mount_ok(&server, "POST", "/api/website-preference/blocked").await;

    let err = client_for(&server).boost_website("a.com").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}
