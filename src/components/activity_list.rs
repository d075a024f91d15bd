//! Activity List Component
//!
//! Activity cards with per-participant unregister controls.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::render::{Listing, LOAD_FAILED_TEXT};
use crate::state::ActivityBoard;

/// Listing of all activities in the current snapshot
#[component]
pub fn ActivityList() -> impl IntoView {
    let board = use_context::<ActivityBoard>().expect("ActivityBoard not found");

    view! {
        <div id="activities-list">
            {move || match board.listing() {
                Listing::Loading => view! {
                    <p>"Loading activities..."</p>
                }.into_view(),
                Listing::Failed => view! {
                    <p>{LOAD_FAILED_TEXT}</p>
                }.into_view(),
                Listing::Cards(cards) => cards
                    .into_iter()
                    .map(|card| {
                        let board = board.clone();
                        view! {
                            <div
                                class="activity-card"
                                inner_html=card.markup
                                on:click=move |ev: web_sys::MouseEvent| on_card_click(&board, &ev)
                            />
                        }
                    })
                    .collect_view(),
            }}
        </div>
    }
}

/// Card markup is static HTML, so delete buttons are handled by one
/// delegated listener per card
fn on_card_click(board: &ActivityBoard, ev: &web_sys::MouseEvent) {
    let Some(target) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let Some((email, activity)) = unregister_target(&target) else {
        return;
    };

    let board = board.clone();
    spawn_local(async move {
        board.unregister(&email, &activity).await;
    });
}

/// Email and activity of the participant whose delete button contains `target`
pub fn unregister_target(target: &web_sys::Element) -> Option<(String, String)> {
    let button = target.closest(".delete-btn").ok()??;
    let item = button.closest("li").ok()??;

    let email = item.get_attribute("data-email").filter(|e| !e.is_empty())?;
    let activity = item
        .get_attribute("data-activity")
        .filter(|a| !a.is_empty())?;

    Some((email, activity))
}
