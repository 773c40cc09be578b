//! Search input with voice capture

use leptos::prelude::*;

use crate::components::LoadingSpinner;
use crate::state::AppState;
use crate::store::SearchBox;
use crate::voice::{self, SpeechSession};

/// Query field, microphone and search button.
///
/// The field is backed by `search_box`; a finished voice session overwrites
/// its query. `on_search` runs on the button and on Enter.
#[component]
pub fn SearchBar(
    search_box: RwSignal<SearchBox>,
    /// Spinner instead of the button label
    #[prop(into)]
    loading: Signal<bool>,
    on_search: impl Fn() + 'static,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = StoredValue::new_local(Option::<SpeechSession>::None);
    let supported = voice::is_supported();
    let listening = move || search_box.with(|b| b.is_listening());

    on_cleanup(move || {
        session.try_update_value(|s| s.take());
    });

    let toggle_voice = move |_| {
        if search_box.with_untracked(|b| b.is_listening()) {
            // Dropping the session aborts it without firing `onend`
            session.update_value(|s| *s = None);
            search_box.update(|b| b.stop_listening());
            return;
        }

        search_box.update(|b| b.start_listening());
        let locale = state.config().voice_locale;
        let started = SpeechSession::start(
            &locale,
            move |text| {
                search_box.try_update(|b| b.on_transcript(text));
            },
            move || {
                search_box.try_update(|b| b.stop_listening());
            },
        );
        match started {
            Ok(s) => session.update_value(|slot| *slot = Some(s)),
            Err(e) => {
                tracing::warn!("Could not start speech recognition: {:?}", e);
                search_box.update(|b| b.stop_listening());
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search();
    };

    view! {
        <form
            on:submit=on_submit
            class="flex items-center w-full max-w-2xl shadow-lg rounded-full overflow-hidden bg-gray-800 hover:shadow-xl transition-shadow duration-200"
        >
            <div class="flex-1 flex items-center pl-4">
                <span class="text-gray-400 mr-3">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search anything..."
                    prop:value=move || search_box.with(|b| b.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        search_box.update(|b| b.query = value);
                    }
                    class="w-full py-3 bg-transparent outline-none text-white"
                />
            </div>
            <div class="flex items-center">
                {supported.then(|| view! {
                    <button
                        type="button"
                        on:click=toggle_voice
                        title="Voice search"
                        class="p-3 hover:bg-gray-700 transition-colors"
                    >
                        <span class=move || if listening() {
                            "text-red-500 animate-pulse"
                        } else {
                            "text-gray-400"
                        }>"🎤"</span>
                    </button>
                })}
                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white px-6 py-3 transition-colors"
                >
                    {move || if loading.get() {
                        view! { <LoadingSpinner size="w-5 h-5" /> }.into_any()
                    } else {
                        view! { <span>"Search"</span> }.into_any()
                    }}
                </button>
            </div>
        </form>

        <Show when=move || !supported>
            <p class="mt-2 text-sm text-gray-400">"Your browser does not support voice search."</p>
        </Show>

        <Show when=listening>
            <div class="mt-2 text-green-400 flex items-center">
                <span class="inline-block w-2 h-2 rounded-full bg-green-500 mr-2 animate-pulse"></span>
                "Listening..."
            </div>
        </Show>
    }
}
