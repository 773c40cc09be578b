//! Search result card

use leptos::prelude::*;

use crate::store::ResultCard as Card;

/// One search hit: title opening in a new tab, shortened link, snippet
#[component]
pub fn ResultCard(card: Card) -> impl IntoView {
    view! {
        <div class="bg-gray-800 p-4 rounded-lg shadow-sm hover:shadow-md transition-shadow duration-200">
            <a
                href=card.link
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-400 hover:underline text-lg font-medium flex items-start"
            >
                {card.title}
                <span class="ml-2 text-gray-400 text-xs">"↗"</span>
            </a>
            <div class="text-green-500 text-xs mt-1 mb-2">{card.display_link}</div>
            <p class="text-gray-300 text-sm">{card.snippet}</p>
        </div>
    }
}
