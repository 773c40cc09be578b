//! Authentication state container

use crate::error::ApiError;
use crate::toast::Toast;
use crate::types::User;

/// Who is signed in, and whether we still don't know
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStore {
    auth_user: Option<User>,
    is_checking_auth: bool,
    is_submitting: bool,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self {
            auth_user: None,
            is_checking_auth: true,
            is_submitting: false,
        }
    }
}

impl AuthStore {
    pub fn auth_user(&self) -> Option<&User> {
        self.auth_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_user.is_some()
    }

    pub fn is_checking_auth(&self) -> bool {
        self.is_checking_auth
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// The shell shows a full-page loader until the session check settles
    pub fn show_loader(&self) -> bool {
        self.is_checking_auth && self.auth_user.is_none()
    }

    /// Result of the session check. Failures clear the user silently.
    pub fn finish_check_auth(&mut self, outcome: Result<User, ApiError>) {
        match outcome {
            Ok(user) => self.auth_user = Some(user),
            Err(e) => {
                tracing::debug!("Session check failed: {}", e);
                self.auth_user = None;
            }
        }
        self.is_checking_auth = false;
    }

    /// Guard for the login/signup forms; `false` while a submit is in flight
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    pub fn finish_login(&mut self, outcome: Result<User, ApiError>) -> Result<User, Toast> {
        self.finish_credentials(outcome, "Login failed")
    }

    pub fn finish_signup(&mut self, outcome: Result<User, ApiError>) -> Result<User, Toast> {
        self.finish_credentials(outcome, "Signup failed")
    }

    fn finish_credentials(
        &mut self,
        outcome: Result<User, ApiError>,
        fallback: &str,
    ) -> Result<User, Toast> {
        self.is_submitting = false;
        match outcome {
            Ok(user) => {
                self.auth_user = Some(user.clone());
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("{}: {}", fallback, e);
                self.auth_user = None;
                Err(Toast::error(e.message_or(fallback)))
            }
        }
    }

    /// Result of the logout call. The user is kept if the backend refused.
    pub fn finish_logout(&mut self, outcome: Result<(), ApiError>) -> Toast {
        match outcome {
            Ok(()) => {
                self.auth_user = None;
                Toast::success("Logged out successfully")
            }
            Err(e) => {
                tracing::warn!("Logout failed: {}", e);
                Toast::error(e.message_or("Logout failed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorBody;
    use crate::toast::ToastKind;

    fn user(email: &str) -> User {
        User { email: Some(email.to_string()), ..User::default() }
    }

    fn rejected(message: Option<&str>) -> ApiError {
        ApiError::Status {
            status: 401,
            body: ErrorBody { message: message.map(String::from), error: None },
        }
    }

    #[test]
    fn test_initial_state_shows_loader() {
        let store = AuthStore::default();
        assert!(store.is_checking_auth());
        assert!(store.show_loader());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_check_auth_success_sets_user() {
        let mut store = AuthStore::default();
        store.finish_check_auth(Ok(user("a@b.c")));

        assert!(store.is_authenticated());
        assert!(!store.is_checking_auth());
        assert!(!store.show_loader());
        assert_eq!(store.auth_user().map(|u| u.display_name()), Some("a@b.c"));
    }

    #[test]
    fn test_check_auth_failure_clears_user() {
        let mut store = AuthStore::default();
        store.finish_check_auth(Ok(user("a@b.c")));
        store.finish_check_auth(Err(ApiError::Network("offline".into())));

        assert!(!store.is_authenticated());
        assert!(!store.is_checking_auth());
    }

    #[test]
    fn test_login_success_returns_user() {
        let mut store = AuthStore::default();
        assert!(store.begin_submit());

        let result = store.finish_login(Ok(user("a@b.c")));
        assert_eq!(result.unwrap().email.as_deref(), Some("a@b.c"));
        assert!(store.is_authenticated());
        assert!(!store.is_submitting());
    }

    #[test]
    fn test_login_failure_uses_server_message() {
        let mut store = AuthStore::default();
        let toast = store.finish_login(Err(rejected(Some("Invalid credentials")))).unwrap_err();

        assert_eq!(toast, Toast::error("Invalid credentials"));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_signup_failure_falls_back() {
        let mut store = AuthStore::default();
        let toast = store.finish_signup(Err(rejected(None))).unwrap_err();
        assert_eq!(toast.text, "Signup failed");
    }

    #[test]
    fn test_begin_submit_blocks_duplicates() {
        let mut store = AuthStore::default();
        assert!(store.begin_submit());
        assert!(!store.begin_submit());

        let _ = store.finish_login(Err(rejected(None)));
        assert!(store.begin_submit());
    }

    #[test]
    fn test_logout_success_clears_user() {
        let mut store = AuthStore::default();
        store.finish_check_auth(Ok(user("a@b.c")));

        let toast = store.finish_logout(Ok(()));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.text, "Logged out successfully");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_network_failure_has_fallback_text() {
        let mut store = AuthStore::default();
        store.finish_check_auth(Ok(user("a@b.c")));

        let toast = store.finish_logout(Err(ApiError::Network("offline".into())));
        assert_eq!(toast, Toast::error("Logout failed"));
        assert!(store.is_authenticated());
    }
}
