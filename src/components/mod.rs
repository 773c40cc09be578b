//! Reusable UI components

pub mod chat_message;
pub mod landing;
pub mod loading;
pub mod navbar;
pub mod result_card;
pub mod search_bar;
pub mod toaster;

pub use chat_message::ChatBubble;
pub use landing::{LandingFeatures, LandingFooter, LandingHeader};
pub use loading::{LoadingDots, LoadingOverlay, LoadingSpinner, TypingIndicator};
pub use navbar::{LandingNavbar, Navbar};
pub use result_card::ResultCard;
pub use search_bar::SearchBar;
pub use toaster::Toaster;
