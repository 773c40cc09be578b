//! Toast notifications

use leptos::prelude::*;

use crate::state::AppState;
use crate::toast::ToastKind;

/// Stack of live toasts; click one to dismiss it early
#[component]
pub fn Toaster() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Show when=move || !state.toasts.with(|q| q.is_empty())>
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2">
                <For
                    each=move || state.toasts.with(|q| q.items().to_vec())
                    key=|(id, _)| *id
                    children=move |(id, toast)| {
                        let color = match toast.kind {
                            ToastKind::Success => "bg-green-600",
                            ToastKind::Error => "bg-red-600",
                        };
                        view! {
                            <div
                                role="status"
                                on:click=move |_| state.toasts.update(|q| q.dismiss(id))
                                class=format!("{} text-white px-4 py-3 rounded-lg shadow-lg cursor-pointer animate-fade-in", color)
                            >
                                {toast.text}
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
