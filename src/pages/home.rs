//! Home page - search entry point

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::SearchBar;
use crate::routes::AppRoute;
use crate::state::AppState;
use crate::store::SearchBox;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🔍", "AI-Powered Results", "Get intelligent summaries and context-aware search results"),
    ("🎤", "Voice Search", "Search hands-free with advanced voice recognition"),
    ("🔒", "Custom Preferences", "Personalize your search with site preferences and filters"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let search_box = RwSignal::new(SearchBox::default());

    // Failures are only logged here; the page stays as it is
    let on_search = move || {
        let Some(query) = search_box.try_update(|b| b.begin()).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = state.api().search(&query).await;
            if let Some(results) = search_box.try_update(|b| b.finish(outcome)).flatten() {
                state.search.update(|s| s.record(query, results));
                navigate(AppRoute::Search.path(), Default::default());
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white px-4 sm:px-6 md:px-8">
            <h1 class="text-3xl sm:text-4xl font-bold text-blue-500 text-center">"SmartSearch"</h1>
            <p class="text-gray-400 text-center mb-6">"AI-powered search engine for smarter results"</p>

            <SearchBar
                search_box=search_box
                loading=Signal::derive(move || search_box.with(|b| b.is_loading()))
                on_search=on_search
            />

            <div class="mt-32 w-full max-w-5xl px-4">
                <h2 class="text-2xl font-semibold text-center text-gray-300">"Intelligent Search Features"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-6">
                    {FEATURES.iter().map(|(icon, title, description)| view! {
                        <div class="bg-gray-800 p-6 rounded-lg flex flex-col items-center text-center">
                            <div class="w-12 h-12 flex items-center justify-center bg-blue-500 rounded-full mb-3">
                                <span class="text-white text-lg">{*icon}</span>
                            </div>
                            <h3 class="text-lg font-semibold text-white">{*title}</h3>
                            <p class="text-gray-400 text-sm">{*description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
