//! Search results page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ResultCard, SearchBar};
use crate::state::AppState;
use crate::store::{SearchBox, SearchView};

/// Renders whatever the shared search store holds; new searches run
/// through the store as well
#[component]
pub fn SearchPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let search_box = RwSignal::new(SearchBox::new(state.search.with_untracked(|s| s.query().to_string())));

    let results = Memo::new(move |_| {
        state.search.with(|s| SearchView::build(s.results(), s.query(), s.is_loading()))
    });

    let on_search = move || {
        let query = search_box.with_untracked(|b| b.query.clone());
        spawn_local(state.fetch_search_results(query));
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center p-4 md:p-6">
            <div class="w-full max-w-4xl mb-8 flex flex-col items-center">
                <h1 class="text-3xl font-bold mb-6 text-blue-400">"SmartSearch"</h1>
                <SearchBar
                    search_box=search_box
                    loading=Signal::derive(move || state.search.with(|s| s.is_loading()))
                    on_search=on_search
                />
            </div>

            {move || results.with(|v| v.overview.clone()).map(|summary| view! {
                <div class="w-full max-w-4xl mb-6">
                    <div class="bg-gray-800 rounded-lg shadow-md overflow-hidden">
                        <div class="border-b border-gray-700 px-4 py-3">
                            <h2 class="text-lg font-medium text-blue-400">"AI Overview"</h2>
                        </div>
                        <div class="p-4">
                            <p class="text-gray-300">{summary}</p>
                        </div>
                    </div>
                </div>
            })}

            {move || results.with(|v| v.count_label()).map(|label| view! {
                <div class="w-full max-w-4xl">
                    <div class="text-sm text-gray-400 mb-2 px-4">{label}</div>
                    <div class="space-y-6">
                        {results.get().cards.into_iter()
                            .map(|card| view! { <ResultCard card=card /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            })}

            {move || results.with(|v| v.no_results.clone()).map(|heading| view! {
                <div class="w-full max-w-4xl text-center py-10">
                    <div class="text-4xl mb-4">"🔍"</div>
                    <h2 class="text-xl font-medium mb-2">{heading}</h2>
                    <p class="text-gray-400">"Try different keywords or check your spelling"</p>
                </div>
            })}
        </div>
    }
}
