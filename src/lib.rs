//! SmartSearch UI - Leptos frontend
//!
//! Search, voice search, AI chat and search preferences, backed by the
//! SmartSearch HTTP API.

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod pages;
pub mod routes;
pub mod state;
pub mod store;
pub mod toast;
pub mod types;
pub mod voice;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path,
};

use components::{LandingNavbar, LoadingOverlay, Navbar, Toaster};
use config::ClientConfig;
use pages::{ChatPage, HomePage, LandingPage, LoginPage, SearchPage, SettingsPage, SignupPage};
use routes::{navbar_for_path, AppRoute, NavbarKind, RouteDecision};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match AppState::new(ClientConfig::from_env()) {
        Ok(app_state) => {
            provide_context(app_state);
            spawn_local(app_state.check_auth());
            view! { <Shell /> }.into_any()
        }
        Err(e) => {
            tracing::error!("SmartSearch failed to start: {}", e);
            view! { <StartupFailure message=e.to_string() /> }.into_any()
        }
    }
}

#[component]
fn Shell() -> impl IntoView {
    let state = expect_context::<AppState>();
    let show_loader = move || state.auth.with(|a| a.show_loader());

    view! {
        <Router>
            <Toaster />
            <Show
                when=move || !show_loader()
                fallback=|| view! { <LoadingOverlay /> }
            >
                <NavbarSlot />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/landing") view=|| view! {
                            <Guarded route=AppRoute::Landing><LandingPage /></Guarded>
                        } />
                        <Route path=path!("/login") view=|| view! {
                            <Guarded route=AppRoute::Login><LoginPage /></Guarded>
                        } />
                        <Route path=path!("/signup") view=|| view! {
                            <Guarded route=AppRoute::Signup><SignupPage /></Guarded>
                        } />
                        <Route path=path!("/") view=|| view! {
                            <Guarded route=AppRoute::Home><HomePage /></Guarded>
                        } />
                        <Route path=path!("/settings") view=|| view! {
                            <Guarded route=AppRoute::Settings><SettingsPage /></Guarded>
                        } />
                        <Route path=path!("/search") view=|| view! {
                            <Guarded route=AppRoute::Search><SearchPage /></Guarded>
                        } />
                        <Route path=path!("/chat") view=|| view! {
                            <Guarded route=AppRoute::Chat><ChatPage /></Guarded>
                        } />
                    </Routes>
                </main>
            </Show>
        </Router>
    }
}

/// Which navigation bar the current path gets
#[component]
fn NavbarSlot() -> impl IntoView {
    let location = use_location();

    move || match navbar_for_path(&location.pathname.get()) {
        NavbarKind::Landing => view! { <LandingNavbar /> }.into_any(),
        NavbarKind::Main => view! { <Navbar /> }.into_any(),
        NavbarKind::Hidden => view! {}.into_any(),
    }
}

/// Renders its children or redirects, depending on who is signed in
#[component]
fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Title text=route.title() />
        {move || match route.resolve(state.is_authenticated()) {
            RouteDecision::Render => children().into_any(),
            RouteDecision::Redirect(to) => view! { <Redirect path=to.path() /> }.into_any(),
        }}
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found · SmartSearch" />
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}

#[component]
fn StartupFailure(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center max-w-md px-4">
                <h1 class="text-2xl font-bold text-red-600 mb-4">"SmartSearch could not start"</h1>
                <p class="text-slate-500">{message}</p>
            </div>
        </div>
    }
}
