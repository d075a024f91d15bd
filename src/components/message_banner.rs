//! Message Banner Component
//!
//! Shows the current success or error message, if any.

use leptos::*;

use crate::state::ActivityBoard;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let board = use_context::<ActivityBoard>().expect("ActivityBoard not found");

    move || match board.banner() {
        Some(message) => view! {
            <div id="message" class=message.kind.class()>
                {message.text}
            </div>
        }
        .into_view(),
        None => view! {
            <div id="message" class="hidden" />
        }
        .into_view(),
    }
}
