//! Client-side route table and auth gating

/// Pages the shell can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Signup,
    Home,
    Settings,
    Search,
    Chat,
}

/// What the shell does for a route given the current auth state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(AppRoute),
}

/// Which navigation bar sits above the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarKind {
    Landing,
    Main,
    Hidden,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Home,
        AppRoute::Settings,
        AppRoute::Search,
        AppRoute::Chat,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/landing",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Home => "/",
            AppRoute::Settings => "/settings",
            AppRoute::Search => "/search",
            AppRoute::Chat => "/chat",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Document title shown in the browser tab
    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Landing => "SmartSearch",
            AppRoute::Login => "Log In · SmartSearch",
            AppRoute::Signup => "Sign Up · SmartSearch",
            AppRoute::Home => "Home · SmartSearch",
            AppRoute::Settings => "Settings · SmartSearch",
            AppRoute::Search => "Search · SmartSearch",
            AppRoute::Chat => "AI Chat · SmartSearch",
        }
    }

    /// Gate a route on the presence of an authenticated user
    pub fn resolve(self, authenticated: bool) -> RouteDecision {
        match (self, authenticated) {
            (AppRoute::Landing, _) => RouteDecision::Render,
            (AppRoute::Login | AppRoute::Signup, true) => RouteDecision::Redirect(AppRoute::Home),
            (AppRoute::Login | AppRoute::Signup, false) => RouteDecision::Render,
            (AppRoute::Home, false) => RouteDecision::Redirect(AppRoute::Landing),
            (AppRoute::Settings | AppRoute::Search | AppRoute::Chat, false) => {
                RouteDecision::Redirect(AppRoute::Login)
            }
            (_, true) => RouteDecision::Render,
        }
    }
}

/// Landing gets its own bar, the auth forms get none, everything else the main bar
pub fn navbar_for_path(path: &str) -> NavbarKind {
    match AppRoute::from_path(path) {
        Some(AppRoute::Landing) => NavbarKind::Landing,
        Some(AppRoute::Login | AppRoute::Signup) => NavbarKind::Hidden,
        _ => NavbarKind::Main,
    }
}
