//! Mock backend helpers shared by the integration tests.
//!
//! Every helper mounts canned SmartSearch responses on a `wiremock` server
//! under the `/api` prefix the real backend uses.

use serde_json::{json, Value};
use smartsearch_ui::api::ApiClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server's `/api` prefix
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri())).expect("client builds")
}

pub fn user_json(email: &str) -> Value {
    json!({
        "_id": "u1",
        "email": email,
        "fullName": "Ada Lovelace",
        "profilePic": ""
    })
}

pub fn history_entry(id: &str, query: &str) -> Value {
    json!({ "_id": id, "query": query, "timestamp": "2025-01-02T03:04:05Z" })
}

pub fn preferences(blocked: &[&str], boosted: &[&str]) -> Value {
    json!({ "blockedWebsites": blocked, "boostedWebsites": boosted })
}

/// Mount a single-use GET response; later mounts answer once this is spent
pub async fn mount_get_once(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

/// Mount an empty 200 for a mutating call
pub async fn mount_ok(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(server)
        .await;
}
