//! App Root Component
//!
//! Builds the activity board once and provides it to the page.

use std::rc::Rc;

use leptos::*;

use crate::api::HttpActivitiesApi;
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::BoardConfig;
use crate::platform::BrowserPlatform;
use crate::state::ActivityBoard;

/// Root application component
#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    tracing::info!(api_base = %config.api_base, "starting activity board");

    let board = ActivityBoard::new(
        Rc::new(HttpActivitiesApi::new(config.api_base)),
        Rc::new(BrowserPlatform),
    );
    provide_context(board.clone());

    // Initial load
    spawn_local(async move {
        board.render_activities().await;
    });

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <SignupForm />
            <MessageBanner />
        </main>
    }
}
