use leptos::prelude::*;

use crate::components::{LandingFeatures, LandingFooter, LandingHeader};

/// Public marketing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black">
            <LandingHeader />
            <LandingFeatures />
            <LandingFooter />
        </div>
    }
}
