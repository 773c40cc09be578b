//! Page components

pub mod chat;
pub mod home;
pub mod landing;
pub mod login;
pub mod search;
pub mod settings;
pub mod signup;

pub use chat::ChatPage;
pub use home::HomePage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use search::SearchPage;
pub use settings::SettingsPage;
pub use signup::SignupPage;
