//! Chat page - conversation with the AI assistant

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{ChatBubble, LoadingSpinner, TypingIndicator};
use crate::state::AppState;
use crate::store::ChatSession;

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = RwSignal::new(ChatSession::default());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // History is fetched once per visit; the result is dropped if the page is gone
    spawn_local(async move {
        let outcome = state.api().chat_history().await;
        session.try_update(|s| s.load_history(outcome));
    });

    // Keep the newest message in view
    Effect::new(move |_| {
        session.track();
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = session.try_update(|s| s.begin_send()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = state.api().send_chat(&text).await;
            session.try_update(|s| s.finish_send(outcome));
        });
    };

    let is_loading = move || session.with(|s| s.is_loading());
    let is_empty = move || session.with(|s| s.messages().is_empty() && !s.is_loading());

    view! {
        <div class="flex items-center justify-center min-h-screen bg-[#0f172a]">
            <div class="w-full max-w-4xl h-[90vh] flex flex-col bg-[#020617] rounded-lg shadow-xl overflow-hidden">
                <div class="p-4 border-b border-gray-800">
                    <h1 class="text-xl font-bold text-white">"AI Assistant"</h1>
                    <p class="text-gray-400 text-sm">"Ask questions or have a conversation with the AI"</p>
                </div>

                <div class="flex-1 overflow-y-auto p-4 space-y-4">
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <div class="flex items-center justify-center h-full">
                                <p class="text-gray-500">"Start a conversation with the AI assistant"</p>
                            </div>
                        }
                    >
                        <For
                            each=move || session.with(|s| s.messages().to_vec())
                            key=|message| message.id.clone()
                            children=|message| view! { <ChatBubble message=message /> }
                        />
                    </Show>

                    <Show when=move || session.with(|s| s.show_typing())>
                        <TypingIndicator />
                    </Show>

                    <div node_ref=messages_end_ref></div>
                </div>

                <div class="border-t border-gray-800 p-4">
                    <form on:submit=on_submit class="flex gap-2">
                        <input
                            type="text"
                            placeholder="Type your message..."
                            prop:value=move || session.with(|s| s.input.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| s.input = value);
                            }
                            disabled=is_loading
                            class="flex-1 px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                        />
                        <button
                            type="submit"
                            disabled=move || !session.with(|s| s.can_send())
                            class="px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-700 disabled:cursor-not-allowed text-white rounded-lg transition-colors"
                        >
                            {move || if is_loading() {
                                view! { <LoadingSpinner /> }.into_any()
                            } else {
                                view! { <span>"Send"</span> }.into_any()
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
