//! Navigation bars

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::AppState;

#[component]
fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="font-bold flex items-center text-lg md:text-xl hover:opacity-80 transition-opacity">
            "🔍"
            <span class="text-[#a48df0] ml-1 sm:ml-2">"SmartSearch"</span>
        </a>
    }
}

/// Bar shown on the signed-in pages
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let is_open = RwSignal::new(false);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            state.logout().await;
            if !state.auth.with_untracked(|a| a.is_authenticated()) {
                navigate(AppRoute::Landing.path(), Default::default());
            }
        });
    };

    view! {
        <nav class="bg-[#0d0d1a] text-[#b0b0b0] px-4 sm:px-6 md:px-12 py-3 flex items-center justify-between relative">
            <Logo />

            // Mobile menu button
            <button
                class="md:hidden text-[#b0b0b0] focus:outline-none"
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                {move || if is_open.get() { "✕" } else { "☰" }}
            </button>

            <div class=move || format!(
                "md:flex items-center gap-4 {}",
                if is_open.get() {
                    "flex flex-col absolute top-16 right-4 bg-[#0d0d1a] p-4 rounded-md shadow-lg z-40"
                } else {
                    "hidden md:flex"
                }
            )>
                <span class="text-sm text-gray-400">
                    {move || state.auth.with(|a| {
                        a.auth_user().map(|user| format!("Hi, {}", user.display_name()))
                    })}
                </span>
                <a href=AppRoute::Home.path() class="hover:text-white transition">"Home"</a>
                <a href=AppRoute::Chat.path() class="hover:text-white transition">"AI Chat"</a>
                <a href=AppRoute::Settings.path() class="hover:text-white transition">"Settings"</a>
                <button
                    on:click=on_logout
                    class="bg-red-600 text-white px-3 py-1 rounded-md hover:bg-red-700 transition"
                >
                    "Logout"
                </button>
            </div>
        </nav>
    }
}

/// Bar shown on the landing page
#[component]
pub fn LandingNavbar() -> impl IntoView {
    view! {
        <nav class="bg-[#0d0d1a] text-[#b0b0b0] px-4 sm:px-6 md:px-12 py-3 flex items-center justify-between">
            <Logo />

            <div class="flex flex-nowrap items-center gap-2">
                <a
                    href=AppRoute::Login.path()
                    class="px-3 py-1 min-w-[80px] text-xs sm:text-sm md:text-base bg-[#16162a] text-[#d0d0d0] rounded-md hover:bg-[#1e1e36] transition text-center"
                >
                    "Log In"
                </a>
                <a
                    href=AppRoute::Signup.path()
                    class="px-3 py-1 min-w-[80px] text-xs sm:text-sm md:text-base bg-[#a48df0] text-white rounded-md hover:bg-[#8b72e8] transition text-center"
                >
                    "Get Started"
                </a>
            </div>
        </nav>
    }
}
