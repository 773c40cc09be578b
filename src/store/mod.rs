//! Client-side state containers
//!
//! Each store is a plain struct whose transitions take the outcome of an
//! API call; the UI keeps them in signals and runs the calls.

pub mod auth;
pub mod chat;
pub mod search;
pub mod settings;

pub use auth::AuthStore;
pub use chat::ChatSession;
pub use search::{ResultCard, SearchBox, SearchStore, SearchView};
pub use settings::{Refetch, SettingsAction, SettingsState, SiteList};
