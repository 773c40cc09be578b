//! Login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::AppState;
use crate::types::LoginRequest;

/// Password input with a show/hide toggle
#[component]
pub(crate) fn PasswordField(value: RwSignal<String>) -> impl IntoView {
    let show_password = RwSignal::new(false);

    view! {
        <div class="relative">
            <input
                type=move || if show_password.get() { "text" } else { "password" }
                name="password"
                placeholder="Password"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                required=true
                class="w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-md text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500"
            />
            <button
                type="button"
                on:click=move |_| show_password.update(|v| *v = !*v)
                class="absolute inset-y-0 right-3 flex items-center text-gray-400 hover:text-white"
                aria-label="Toggle password visibility"
            >
                {move || if show_password.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = move || state.auth.with(|a| a.is_submitting());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let body = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if state.login(body).await.is_some() {
                navigate(AppRoute::Home.path(), Default::default());
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4">
            <div class="w-full max-w-md bg-[#0d0d1a] p-8 rounded-xl shadow-lg">
                <h1 class="text-3xl font-bold text-center text-white mb-2">"Welcome Back"</h1>
                <p class="text-center text-gray-400 mb-8">"Log in to continue to SmartSearch"</p>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required=true
                        class="w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-md text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500"
                    />
                    <PasswordField value=password />
                    <button
                        type="submit"
                        disabled=is_submitting
                        class="w-full py-3 bg-[#a48df0] hover:bg-[#8b72e8] disabled:opacity-60 text-white rounded-md font-medium transition-colors"
                    >
                        {move || if is_submitting() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="mt-6 text-center text-gray-400">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path() class="text-[#a48df0] hover:underline">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
