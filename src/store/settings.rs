//! Settings page state: search history and site preferences
//!
//! Every mutation is a single request followed by a refetch of the list it
//! touched; nothing is updated locally ahead of the server.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::toast::Toast;
use crate::types::{HistoryEntry, WebsitePreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteList {
    Blocked,
    Preferred,
}

/// Which list has to be fetched again after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refetch {
    History,
    Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    ClearHistory,
    DeleteHistory(String),
    Block(String),
    Unblock(String),
    Boost(String),
    Unboost(String),
}

impl SettingsAction {
    pub fn failure_message(&self) -> &'static str {
        match self {
            SettingsAction::ClearHistory => "Failed to clear search history",
            SettingsAction::DeleteHistory(_) => "Failed to delete search item",
            SettingsAction::Block(_) => "Failed to add blocked site",
            SettingsAction::Unblock(_) => "Failed to remove blocked site",
            SettingsAction::Boost(_) => "Failed to add preferred site",
            SettingsAction::Unboost(_) => "Failed to remove preferred site",
        }
    }

    pub fn refetch(&self) -> Refetch {
        match self {
            SettingsAction::ClearHistory | SettingsAction::DeleteHistory(_) => Refetch::History,
            _ => Refetch::Preferences,
        }
    }

    /// The add form this action came from, if any
    fn added_to(&self) -> Option<SiteList> {
        match self {
            SettingsAction::Block(_) => Some(SiteList::Blocked),
            SettingsAction::Boost(_) => Some(SiteList::Preferred),
            _ => None,
        }
    }

    pub async fn perform(&self, api: &ApiClient) -> Result<(), ApiError> {
        match self {
            SettingsAction::ClearHistory => api.clear_search_history().await,
            SettingsAction::DeleteHistory(id) => api.delete_search_history_entry(id).await,
            SettingsAction::Block(site) => api.block_website(site).await,
            SettingsAction::Unblock(site) => api.unblock_website(site).await,
            SettingsAction::Boost(site) => api.boost_website(site).await,
            SettingsAction::Unboost(site) => api.unboost_website(site).await,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    history: Vec<HistoryEntry>,
    preferences: WebsitePreferences,
    pub new_blocked: String,
    pub new_preferred: String,
}

impl SettingsState {
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn blocked(&self) -> &[String] {
        &self.preferences.blocked
    }

    pub fn preferred(&self) -> &[String] {
        &self.preferences.boosted
    }

    pub fn input(&self, list: SiteList) -> &str {
        match list {
            SiteList::Blocked => &self.new_blocked,
            SiteList::Preferred => &self.new_preferred,
        }
    }

    pub fn input_mut(&mut self, list: SiteList) -> &mut String {
        match list {
            SiteList::Blocked => &mut self.new_blocked,
            SiteList::Preferred => &mut self.new_preferred,
        }
    }

    /// A failed load keeps whatever was shown before
    pub fn apply_history(&mut self, outcome: Result<Vec<HistoryEntry>, ApiError>) -> Option<Toast> {
        match outcome {
            Ok(history) => {
                self.history = history;
                None
            }
            Err(e) => {
                tracing::error!("Error fetching search history: {}", e);
                Some(Toast::error(e.error_or("Failed to load search history")))
            }
        }
    }

    pub fn apply_preferences(
        &mut self,
        outcome: Result<WebsitePreferences, ApiError>,
    ) -> Option<Toast> {
        match outcome {
            Ok(preferences) => {
                self.preferences = preferences;
                None
            }
            Err(e) => {
                tracing::error!("Error fetching website preferences: {}", e);
                Some(Toast::error(e.error_or("Failed to load website preferences")))
            }
        }
    }

    /// Turn the add form's contents into an action. Whitespace-only input is
    /// ignored; anything else is sent as typed.
    pub fn add_action(&self, list: SiteList) -> Option<SettingsAction> {
        let site = self.input(list);
        if site.trim().is_empty() {
            return None;
        }
        let site = site.to_string();
        Some(match list {
            SiteList::Blocked => SettingsAction::Block(site),
            SiteList::Preferred => SettingsAction::Boost(site),
        })
    }

    /// Outcome of a mutation: the list to refetch, or the toast to show
    pub fn after_action(
        &mut self,
        action: &SettingsAction,
        outcome: Result<(), ApiError>,
    ) -> Result<Refetch, Toast> {
        match outcome {
            Ok(()) => {
                if let Some(list) = action.added_to() {
                    self.input_mut(list).clear();
                }
                Ok(action.refetch())
            }
            Err(e) => {
                tracing::error!("{}: {}", action.failure_message(), e);
                Err(Toast::error(e.error_or(action.failure_message())))
            }
        }
    }
}
