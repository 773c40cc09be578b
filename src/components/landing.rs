//! Marketing sections of the landing page

use leptos::prelude::*;

use crate::routes::AppRoute;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "⭐",
        "AI Summaries",
        "Get instant AI-generated overviews for every search query, saving you time and providing key insights.",
    ),
    (
        "📄",
        "Rich Snippets",
        "View contextual snippets from top results to quickly find exactly what you're looking for.",
    ),
    (
        "🌐",
        "Comprehensive Results",
        "Search across the entire web with AI-powered relevance ranking for better results.",
    ),
    (
        "👍",
        "Boost Websites",
        "Prioritize results from your trusted sources to see them ranked higher in future searches.",
    ),
    (
        "🚫",
        "Block Websites",
        "Filter out unwanted sources or low-quality websites from your search results.",
    ),
    (
        "💬",
        "AI Chatbot",
        "Ask follow-up questions about your search or dive deeper into topics with our AI assistant.",
    ),
];

#[component]
pub fn LandingHeader() -> impl IntoView {
    view! {
        <header class="bg-gradient-to-b from-black to-gray-900 text-white py-20 text-center">
            <h1 class="text-4xl md:text-6xl font-bold">
                "AI-Powered Search for Smarter Results"
            </h1>
            <p class="mt-4 text-lg text-gray-300">
                "Experience a new era of intelligent search."
            </p>
            <div class="mt-8 flex justify-center">
                <a
                    href=AppRoute::Signup.path()
                    class="bg-purple-600 px-6 py-3 rounded-md font-medium hover:bg-purple-700 transition-colors"
                >
                    "Get Started"
                </a>
            </div>
        </header>
    }
}

#[component]
pub fn LandingFeatures() -> impl IntoView {
    view! {
        <section class="bg-[#0F172A] text-white py-16 px-6">
            <div class="text-center">
                <h2 class="text-3xl font-bold">"Powerful Search Features"</h2>
                <p class="text-gray-400 mt-2">"Discover a smarter way to search online."</p>
            </div>

            <div class="mt-10 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {FEATURES.iter().map(|(icon, title, description)| view! {
                    <div class="bg-[#1E293B] p-6 rounded-xl shadow-md flex flex-col space-y-3">
                        <div class="text-purple-400 text-2xl">{*icon}</div>
                        <h3 class="text-xl font-semibold">{*title}</h3>
                        <p class="text-gray-400">{*description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn LandingFooter() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-b from-gray-900 to-black text-white py-16 text-center">
            <h2 class="text-3xl font-bold">"Ready to Transform Your Search Experience?"</h2>
            <p class="text-gray-400 mt-2">"Try SmartSearch today and unlock smarter results."</p>
        </section>
    }
}
