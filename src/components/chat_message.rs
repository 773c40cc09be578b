//! Chat message component

use leptos::prelude::*;

use crate::format::format_clock;
use crate::types::{ChatMessage, MessageRole};

/// Render a single chat bubble
#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let clock = format_clock(&message.timestamp.with_timezone(&chrono::Local));

    view! {
        <div class=format!("flex {}", if is_user { "justify-end" } else { "justify-start" })>
            <div class=format!(
                "max-w-[80%] px-4 py-3 rounded-2xl {}",
                if is_user {
                    "bg-blue-600 text-white rounded-tr-sm"
                } else {
                    "bg-gray-700 text-gray-100 rounded-tl-sm"
                }
            )>
                <p class="whitespace-pre-wrap break-words">{message.text}</p>
                <span class=format!(
                    "block text-xs mt-1 {}",
                    if is_user { "text-blue-200 text-right" } else { "text-gray-400" }
                )>
                    {clock}
                </span>
            </div>
        </div>
    }
}
