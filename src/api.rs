//! API client for communicating with the SmartSearch backend
//!
//! One configured `reqwest::Client`, one method per endpoint. Every call is a
//! single round trip: no retries, no caching. Session credentials ride along
//! implicitly (`credentials: include` in the browser, a cookie jar natively).

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ErrorBody};
use crate::types::*;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = with_credentials(req).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = match resp.text().await {
                Ok(text) => serde_json::from_str::<ErrorBody>(&text).unwrap_or_default(),
                Err(_) => ErrorBody::default(),
            };
            return Err(ApiError::Status { status, body });
        }

        Ok(resp)
    }

    async fn fetch<R: DeserializeOwned>(&self, req: RequestBuilder) -> Result<R, ApiError> {
        let resp = self.dispatch(req).await?;
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.dispatch(req).await.map(|_| ())
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.http.post(self.url(path)).json(body)
    }

    // ============= Auth =============

    /// `GET /auth/user/me`
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(self.http.get(self.url("auth/user/me"))).await
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, body: &SignupRequest) -> Result<User, ApiError> {
        self.fetch(self.post("auth/signup", body)).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, body: &LoginRequest) -> Result<User, ApiError> {
        self.fetch(self.post("auth/login", body)).await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.http.post(self.url("auth/logout"))).await
    }

    // ============= Search =============

    /// `GET /search/search?query=`
    pub async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        let req = self.http.get(self.url("search/search")).query(&[("query", query)]);
        self.fetch(req).await
    }

    /// `GET /search/history?limit=`
    pub async fn search_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, ApiError> {
        let req = self.http.get(self.url("search/history")).query(&[("limit", limit)]);
        let payload: SearchHistoryPayload = self.fetch(req).await?;
        Ok(payload.into_entries())
    }

    /// `DELETE /search/history/clear`
    pub async fn clear_search_history(&self) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url("search/history/clear"))).await
    }

    /// `DELETE /search/history/:id`
    pub async fn delete_search_history_entry(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("search/history/{}", id);
        self.execute(self.http.delete(self.url(&path))).await
    }

    // ============= Chat =============

    /// `GET /chat/history`
    pub async fn chat_history(&self) -> Result<Vec<ChatMessage>, ApiError> {
        let resp: ChatHistoryResponse = self.fetch(self.http.get(self.url("chat/history"))).await?;
        Ok(resp.messages)
    }

    /// `POST /chat`, returning the bot's reply text
    pub async fn send_chat(&self, text: &str) -> Result<String, ApiError> {
        let body = ChatRequest { text: text.to_string() };
        let resp: ChatReply = self.fetch(self.post("chat", &body)).await?;
        Ok(resp.reply)
    }

    // ============= Website preferences =============

    /// `GET /website-preference`
    pub async fn website_preferences(&self) -> Result<WebsitePreferences, ApiError> {
        self.fetch(self.http.get(self.url("website-preference"))).await
    }

    /// `POST /website-preference/blocked`
    pub async fn block_website(&self, website: &str) -> Result<(), ApiError> {
        let body = WebsiteRequest { website: website.to_string() };
        self.execute(self.post("website-preference/blocked", &body)).await
    }

    /// `DELETE /website-preference/unblock` (the host travels in the body)
    pub async fn unblock_website(&self, website: &str) -> Result<(), ApiError> {
        let body = WebsiteRequest { website: website.to_string() };
        let req = self.http.delete(self.url("website-preference/unblock")).json(&body);
        self.execute(req).await
    }

    /// `POST /website-preference/boosted`
    pub async fn boost_website(&self, website: &str) -> Result<(), ApiError> {
        let body = WebsiteRequest { website: website.to_string() };
        self.execute(self.post("website-preference/boosted", &body)).await
    }

    /// `DELETE /website-preference/unboost` (the host travels in the body)
    pub async fn unboost_website(&self, website: &str) -> Result<(), ApiError> {
        let body = WebsiteRequest { website: website.to_string() };
        let req = self.http.delete(self.url("website-preference/unboost")).json(&body);
        self.execute(req).await
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(req: RequestBuilder) -> RequestBuilder {
    req.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(req: RequestBuilder) -> RequestBuilder {
    req
}
