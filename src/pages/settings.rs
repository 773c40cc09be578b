//! Settings page - search history and site preferences

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::format::format_history_timestamp;
use crate::state::AppState;
use crate::store::{Refetch, SettingsAction, SettingsState, SiteList};

/// Fetch one list again and toast on failure
async fn reload(state: AppState, settings: RwSignal<SettingsState>, target: Refetch) {
    let api = state.api();
    let toast = match target {
        Refetch::History => {
            let outcome = api.search_history(state.config().history_limit).await;
            settings.try_update(|s| s.apply_history(outcome)).flatten()
        }
        Refetch::Preferences => {
            let outcome = api.website_preferences().await;
            settings.try_update(|s| s.apply_preferences(outcome)).flatten()
        }
    };
    if let Some(toast) = toast {
        state.notify(toast);
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let settings = RwSignal::new(SettingsState::default());

    spawn_local(reload(state, settings, Refetch::History));
    spawn_local(reload(state, settings, Refetch::Preferences));

    let run = move |action: SettingsAction| {
        spawn_local(async move {
            let outcome = action.perform(&state.api()).await;
            match settings.try_update(|s| s.after_action(&action, outcome)) {
                Some(Ok(target)) => reload(state, settings, target).await,
                Some(Err(toast)) => state.notify(toast),
                None => {}
            }
        });
    };

    view! {
        <div class="bg-gray-900 text-white min-h-screen p-4 md:p-8">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-3xl md:text-4xl font-bold mb-2">"Settings"</h1>
                <p class="text-gray-400 mb-6 md:mb-8">"Manage your search preferences and history"</p>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 md:gap-8">
                    <div class="bg-gray-800 rounded-lg p-4 md:p-6">
                        <h2 class="text-xl md:text-2xl font-bold mb-1 md:mb-2">"Search History"</h2>
                        <p class="text-gray-400 mb-3 md:mb-4 text-sm md:text-base">"View and manage your search history"</p>
                        <div class="max-h-60 md:max-h-72 overflow-y-auto mb-4 pr-2">
                            <Show
                                when=move || settings.with(|s| !s.history().is_empty())
                                fallback=|| view! { <p class="text-center text-gray-400 py-4">"No search history"</p> }
                            >
                                <ul class="space-y-2">
                                    <For
                                        each=move || settings.with(|s| s.history().to_vec())
                                        key=|entry| entry.id.clone()
                                        children=move |entry| {
                                            let id = entry.id.clone();
                                            let when = format_history_timestamp(&entry.timestamp.with_timezone(&chrono::Local));
                                            view! {
                                                <li class="flex justify-between items-center py-2 border-b border-gray-700">
                                                    <div>
                                                        <div class="font-medium">{entry.query}</div>
                                                        <div class="text-xs md:text-sm text-gray-400">{when}</div>
                                                    </div>
                                                    <button
                                                        on:click=move |_| run(SettingsAction::DeleteHistory(id.clone()))
                                                        aria-label="Delete"
                                                        class="text-gray-400 hover:text-red-500 p-1"
                                                    >
                                                        "✕"
                                                    </button>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </Show>
                        </div>
                        <div class="flex justify-center md:justify-start">
                            <button
                                on:click=move |_| run(SettingsAction::ClearHistory)
                                class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-md transition-colors"
                            >
                                "🗑 Clear History"
                            </button>
                        </div>
                    </div>

                    <SiteListSection
                        list=SiteList::Blocked
                        settings=settings
                        on_action=run
                    />

                    <SiteListSection
                        list=SiteList::Preferred
                        settings=settings
                        on_action=run
                    />
                </div>
            </div>
        </div>
    }
}

/// Add form plus the current list, for blocked or preferred sites
#[component]
fn SiteListSection(
    list: SiteList,
    settings: RwSignal<SettingsState>,
    on_action: impl Fn(SettingsAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let (title, description, empty, add_label, remove_label, wide) = match list {
        SiteList::Blocked => (
            "Blocked Sites",
            "Sites that won't appear in your search results",
            "No blocked sites",
            "Add blocked site",
            "Unblock site",
            false,
        ),
        SiteList::Preferred => (
            "Preferred Sites",
            "Sites that will be boosted in your search results",
            "No preferred sites",
            "Add preferred site",
            "Remove preferred site",
            true,
        ),
    };

    let sites = move || {
        settings.with(|s| match list {
            SiteList::Blocked => s.blocked().to_vec(),
            SiteList::Preferred => s.preferred().to_vec(),
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(action) = settings.with_untracked(|s| s.add_action(list)) {
            on_action(action);
        }
    };

    view! {
        <div class=format!("bg-gray-800 rounded-lg p-4 md:p-6 {}", if wide { "md:col-span-2" } else { "" })>
            <h2 class="text-xl md:text-2xl font-bold mb-1 md:mb-2">{title}</h2>
            <p class="text-gray-400 mb-3 md:mb-4 text-sm md:text-base">{description}</p>

            <form on:submit=on_submit class="flex mb-4">
                <input
                    type="text"
                    placeholder="example.com"
                    prop:value=move || settings.with(|s| s.input(list).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        settings.update(|s| *s.input_mut(list) = value);
                    }
                    class="flex-1 px-3 py-2 bg-gray-700 border border-gray-600 rounded-l-md text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
                <button
                    type="submit"
                    aria-label=add_label
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-r-md transition-colors"
                >
                    "+"
                </button>
            </form>

            <div class="max-h-60 md:max-h-72 overflow-y-auto pr-2">
                <Show
                    when=move || !sites().is_empty()
                    fallback=move || view! { <p class="text-center text-gray-400 py-4">{empty}</p> }
                >
                    <ul class="space-y-2">
                        {move || sites().into_iter().map(|site| {
                            let action = match list {
                                SiteList::Blocked => SettingsAction::Unblock(site.clone()),
                                SiteList::Preferred => SettingsAction::Unboost(site.clone()),
                            };
                            view! {
                                <li class="flex justify-between items-center py-2 border-b border-gray-700">
                                    <span class="break-all mr-2">{site}</span>
                                    <button
                                        on:click=move |_| on_action(action.clone())
                                        aria-label=remove_label
                                        class="text-gray-400 hover:text-red-500 p-1"
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}
