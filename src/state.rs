//! Global application state
//!
//! Provided once through context by [`crate::App`]; pages and components pull
//! it out with `expect_context::<AppState>()`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::StartupError;
use crate::store::{AuthStore, SearchStore};
use crate::toast::{Toast, ToastQueue};
use crate::types::{LoginRequest, SignupRequest, User};

/// Shared state: the API client plus the auth and search containers
#[derive(Clone, Copy)]
pub struct AppState {
    config: StoredValue<ClientConfig>,
    api: StoredValue<ApiClient, LocalStorage>,
    /// Current user and session-check flags
    pub auth: RwSignal<AuthStore>,
    /// Last query and its results, shared between Home and Search
    pub search: RwSignal<SearchStore>,
    /// Toasts on screen
    pub toasts: RwSignal<ToastQueue>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let api = ApiClient::new(config.api_base.clone())?;

        Ok(Self {
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
            auth: RwSignal::new(AuthStore::default()),
            search: RwSignal::new(SearchStore::default()),
            toasts: RwSignal::new(ToastQueue::default()),
        })
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.with(|a| a.is_authenticated())
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, toast: Toast) {
        let duration = toast.duration_ms(&self.config.get_value());
        let id = self.toasts.try_update(|q| q.push(toast));
        let Some(id) = id else { return };

        let toasts = self.toasts;
        Timeout::new(duration, move || {
            toasts.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    // ============= Auth actions =============

    pub async fn check_auth(self) {
        let outcome = self.api().current_user().await;
        self.auth.update(|a| a.finish_check_auth(outcome));
    }

    /// Returns the user on success; failures have already been toasted
    pub async fn login(self, body: LoginRequest) -> Option<User> {
        if !self.auth.try_update(|a| a.begin_submit()).unwrap_or(false) {
            return None;
        }
        let outcome = self.api().login(&body).await;
        let result = self.auth.try_update(|a| a.finish_login(outcome))?;
        self.settle(result)
    }

    pub async fn signup(self, body: SignupRequest) -> Option<User> {
        if !self.auth.try_update(|a| a.begin_submit()).unwrap_or(false) {
            return None;
        }
        let outcome = self.api().signup(&body).await;
        let result = self.auth.try_update(|a| a.finish_signup(outcome))?;
        self.settle(result)
    }

    pub async fn logout(self) {
        let outcome = self.api().logout().await;
        if let Some(toast) = self.auth.try_update(|a| a.finish_logout(outcome)) {
            self.notify(toast);
        }
    }

    fn settle(&self, result: Result<User, Toast>) -> Option<User> {
        match result {
            Ok(user) => Some(user),
            Err(toast) => {
                self.notify(toast);
                None
            }
        }
    }

    // ============= Search actions =============

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.search.update(|s| s.set_query(query));
    }

    /// Run a search through the shared store. Blank queries and searches
    /// started while another is running are dropped.
    pub async fn fetch_search_results(self, query: String) {
        let Some(query) = self.search.try_update(|s| s.begin_fetch(&query)).flatten() else {
            return;
        };
        self.set_query(query.clone());

        let outcome = self.api().search(&query).await;
        self.search.update(|s| s.finish_fetch(outcome));

        if let Some(error) = self.search.with_untracked(|s| s.error().map(String::from)) {
            self.notify(Toast::error(error));
        }
    }
}
