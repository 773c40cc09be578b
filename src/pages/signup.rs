//! Signup page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::pages::login::PasswordField;
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::types::SignupRequest;

#[component]
pub fn SignupPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = move || state.auth.with(|a| a.is_submitting());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let body = SignupRequest {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if state.signup(body).await.is_some() {
                navigate(AppRoute::Home.path(), Default::default());
            }
        });
    };

    let input_class = "w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-md text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500";

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4">
            <div class="w-full max-w-md bg-[#0d0d1a] p-8 rounded-xl shadow-lg">
                <h1 class="text-3xl font-bold text-center text-white mb-2">"Create Account"</h1>
                <p class="text-center text-gray-400 mb-8">"Sign up to start searching smarter"</p>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        name="fullName"
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                        required=true
                        class=input_class
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required=true
                        class=input_class
                    />
                    <PasswordField value=password />
                    <button
                        type="submit"
                        disabled=is_submitting
                        class="w-full py-3 bg-[#a48df0] hover:bg-[#8b72e8] disabled:opacity-60 text-white rounded-md font-medium transition-colors"
                    >
                        {move || if is_submitting() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="mt-6 text-center text-gray-400">
                    "Already have an account? "
                    <a href=AppRoute::Login.path() class="text-[#a48df0] hover:underline">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
