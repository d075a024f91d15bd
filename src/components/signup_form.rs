//! Signup Form Component

use leptos::*;

use crate::render::SELECT_PLACEHOLDER;
use crate::state::ActivityBoard;

/// Email input and activity selector
#[component]
pub fn SignupForm() -> impl IntoView {
    let board = use_context::<ActivityBoard>().expect("ActivityBoard not found");
    let email = board.email;
    let selected = board.selected_activity;

    let on_submit = {
        let board = board.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let board = board.clone();
            spawn_local(async move {
                board.submit_signup().await;
            });
        }
    };

    view! {
        <section id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="your-email@school.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        required=true
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        // Placeholder first, so repeat renders never duplicate options
                        <option value="">{SELECT_PLACEHOLDER}</option>
                        {move || {
                            board.activity_options()
                                .into_iter()
                                .map(|name| view! {
                                    <option value=name.clone()>{name}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <button type="submit">"Sign Up"</button>
            </form>
        </section>
    }
}
