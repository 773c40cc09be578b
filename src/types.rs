//! API types matching the SmartSearch backend

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing list
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a list entry by entry, dropping (and logging) entries that do not
/// fit instead of failing the whole list. `null` reads as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping malformed entry: {}", e);
                None
            }
        })
        .collect())
}

/// List decoded with [`lenient_list`]; usable inside untagged enums
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientList<T>(pub Vec<T>);

impl<'de, T: DeserializeOwned> Deserialize<'de> for LenientList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
        lenient_list(serde_json::Value::Array(raw))
            .map(LenientList)
            .map_err(D::Error::custom)
    }
}

/// Timestamps arrive as RFC 3339 strings or as epoch milliseconds
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(DateTime<Utc>),
    Millis(i64),
}

fn flexible_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(ts) => Ok(ts),
        RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", ms))),
    }
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============= Auth =============

/// Login request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Authenticated user as returned by the backend.
///
/// Only the fields the client displays are typed; everything else the
/// backend sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "fullName", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("there")
    }
}

// ============= Search =============

/// One result card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// Response of `GET /search/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SearchHit>,
}

/// A past query stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub query: String,
    #[serde(alias = "createdAt", default = "Utc::now", deserialize_with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Response of `GET /search/history`, which comes in more than one shape.
/// Only a payload with no list at all falls through to `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchHistoryPayload {
    Wrapped { history: LenientList<HistoryEntry> },
    Bare(LenientList<HistoryEntry>),
    Other(serde_json::Value),
}

impl SearchHistoryPayload {
    pub fn into_entries(self) -> Vec<HistoryEntry> {
        match self {
            SearchHistoryPayload::Wrapped { history } => history.0,
            SearchHistoryPayload::Bare(entries) => entries.0,
            SearchHistoryPayload::Other(_) => Vec::new(),
        }
    }
}

// ============= Chat =============

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    #[serde(alias = "assistant")]
    Bot,
}

/// Message in the chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "_id", alias = "id", default = "new_message_id")]
    pub id: String,
    pub role: MessageRole,
    #[serde(default)]
    pub text: String,
    #[serde(alias = "createdAt", default = "Utc::now", deserialize_with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: format!("user-{}", new_message_id()),
            role: MessageRole::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: format!("bot-{}", new_message_id()),
            role: MessageRole::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Bot-side stand-in for a failed send
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            id: format!("error-{}", new_message_id()),
            role: MessageRole::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Response of `GET /chat/history`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatHistoryResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub messages: Vec<ChatMessage>,
}

/// Chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Chat response; a body without `reply` fails to decode
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

// ============= Website preferences =============

/// Block and boost lists, as `GET /website-preference` returns them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsitePreferences {
    #[serde(rename = "blockedWebsites", default, deserialize_with = "null_as_empty")]
    pub blocked: Vec<String>,
    #[serde(rename = "boostedWebsites", default, deserialize_with = "null_as_empty")]
    pub boosted: Vec<String>,
}

/// Body for every add/remove preference call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebsiteRequest {
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "email": "a@b.c",
            "fullName": "Ada",
            "profilePic": "x.png"
        }))
        .unwrap();

        assert_eq!(user.id.as_deref(), Some("u1"));
        assert_eq!(user.display_name(), "Ada");
        assert_eq!(user.extra.get("profilePic"), Some(&json!("x.png")));
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user: User = serde_json::from_value(json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn test_signup_request_uses_backend_field_names() {
        let body = serde_json::to_value(SignupRequest {
            full_name: "Ada".into(),
            email: "a@b.c".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "fullName": "Ada", "email": "a@b.c", "password": "secret" }));
    }

    #[test]
    fn test_search_results_defaults() {
        let results: SearchResults = serde_json::from_value(json!({ "results": null })).unwrap();
        assert_eq!(results, SearchResults::default());
    }

    #[test]
    fn test_history_payload_shapes() {
        let entry = json!({ "_id": "h1", "query": "cats", "timestamp": "2025-01-02T03:04:05Z" });

        let wrapped: SearchHistoryPayload =
            serde_json::from_value(json!({ "history": [entry.clone()] })).unwrap();
        assert_eq!(wrapped.into_entries().len(), 1);

        let bare: SearchHistoryPayload = serde_json::from_value(json!([entry])).unwrap();
        assert_eq!(bare.into_entries()[0].query, "cats");

        let other: SearchHistoryPayload =
            serde_json::from_value(json!({ "unexpected": true })).unwrap();
        assert!(other.into_entries().is_empty());
    }

    #[test]
    fn test_history_skips_malformed_entries() {
        let good = json!({ "_id": "h1", "query": "cats", "timestamp": "2025-01-02T03:04:05Z" });
        let no_id = json!({ "query": "no id" });

        let wrapped: SearchHistoryPayload =
            serde_json::from_value(json!({ "history": [good.clone(), no_id.clone()] })).unwrap();
        let entries = wrapped.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "h1");

        let bare: SearchHistoryPayload = serde_json::from_value(json!([no_id, good])).unwrap();
        assert_eq!(bare.into_entries()[0].query, "cats");
    }

    #[test]
    fn test_history_accepts_epoch_millis() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "_id": "h2",
            "query": "dogs",
            "timestamp": 1735787045000i64
        }))
        .unwrap();
        assert_eq!(entry.timestamp.to_rfc3339(), "2025-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_chat_history_skips_unknown_roles() {
        let resp: ChatHistoryResponse = serde_json::from_value(json!({
            "messages": [
                { "_id": "m1", "role": "user", "text": "hello" },
                { "_id": "m2", "role": "system", "text": "internal" },
                { "_id": "m3", "role": "bot", "text": "hi" }
            ]
        }))
        .unwrap();
        let ids: Vec<_> = resp.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m3"]);
    }

    #[test]
    fn test_chat_message_from_backend() {
        let message: ChatMessage = serde_json::from_value(json!({
            "_id": "m1",
            "role": "bot",
            "text": "hi",
            "timestamp": "2025-01-02T03:04:05Z"
        }))
        .unwrap();
        assert_eq!(message.id, "m1");
        assert_eq!(message.role, MessageRole::Bot);
    }

    #[test]
    fn test_chat_message_without_id_gets_one() {
        let message: ChatMessage =
            serde_json::from_value(json!({ "role": "user", "text": "hello" })).unwrap();
        assert!(!message.id.is_empty());
        assert_eq!(message.role, MessageRole::User);
    }

    #[test]
    fn test_local_message_ids_are_unique() {
        let a = ChatMessage::user("x");
        let b = ChatMessage::user("x");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("user-"));
        assert!(ChatMessage::error("boom").id.starts_with("error-"));
    }

    #[test]
    fn test_chat_reply_requires_reply_field() {
        assert!(serde_json::from_value::<ChatReply>(json!({ "message": "x" })).is_err());
    }

    #[test]
    fn test_website_preferences_null_lists() {
        let prefs: WebsitePreferences = serde_json::from_value(json!({
            "blockedWebsites": null,
            "boostedWebsites": ["docs.rs"]
        }))
        .unwrap();
        assert!(prefs.blocked.is_empty());
        assert_eq!(prefs.boosted, vec!["docs.rs".to_string()]);
    }
}
