//! Activity Board
//!
//! The single view-controller behind the page. It owns every piece of
//! reactive state the view reads, talks to the API and decides what the
//! listing, the selector and the banner show after each call.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use super::message::{TransientMessage, MESSAGE_DISPLAY_MS};
use super::snapshot::ActivitiesSnapshot;
use crate::api::{ActivitiesApi, ApiError};
use crate::platform::Platform;
use crate::render::Listing;

const SIGNUP_FAILED: &str = "An error occurred";
const SIGNUP_UNREACHABLE: &str = "Failed to sign up. Please try again.";
const UNREGISTER_FAILED: &str = "Failed to unregister participant.";

/// Activity board state, provided to the component tree
#[derive(Clone)]
pub struct ActivityBoard {
    api: Rc<dyn ActivitiesApi>,
    platform: Rc<dyn Platform>,
    /// Last successfully fetched snapshot
    snapshot: RwSignal<Option<ActivitiesSnapshot>>,
    /// Whether the most recent fetch failed
    load_failed: RwSignal<bool>,
    /// Message currently shown in the banner
    banner: RwSignal<Option<TransientMessage>>,
    /// Bumped for every new banner so stale timers leave it alone
    banner_generation: Rc<Cell<u64>>,
    /// Signup form email field
    pub email: RwSignal<String>,
    /// Signup form activity selector
    pub selected_activity: RwSignal<String>,
}

impl ActivityBoard {
    pub fn new(api: Rc<dyn ActivitiesApi>, platform: Rc<dyn Platform>) -> Self {
        Self {
            api,
            platform,
            snapshot: create_rw_signal(None),
            load_failed: create_rw_signal(false),
            banner: create_rw_signal(None),
            banner_generation: Rc::new(Cell::new(0)),
            email: create_rw_signal(String::new()),
            selected_activity: create_rw_signal(String::new()),
        }
    }

    // ============ View Projections ============

    /// What the activities listing shows
    pub fn listing(&self) -> Listing {
        if self.load_failed.get() {
            return Listing::Failed;
        }
        self.snapshot.with(|snapshot| match snapshot {
            Some(snapshot) => Listing::from_snapshot(snapshot),
            None => Listing::Loading,
        })
    }

    /// Selector options after the placeholder, from the last good snapshot
    pub fn activity_options(&self) -> Vec<String> {
        self.snapshot
            .with(|snapshot| snapshot.as_ref().map(ActivitiesSnapshot::names))
            .unwrap_or_default()
    }

    pub fn banner(&self) -> Option<TransientMessage> {
        self.banner.get()
    }

    // ============ Operations ============

    /// Fetch the snapshot and replace the listing and selector with it
    pub async fn render_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(snapshot) => {
                tracing::info!(activities = snapshot.len(), "loaded activities");
                self.snapshot.set(Some(snapshot));
                self.load_failed.set(false);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch activities");
                self.load_failed.set(true);
            }
        }
    }

    /// Submit the signup form as currently filled in
    pub async fn submit_signup(&self) {
        let email = self.email.get_untracked();
        let activity = self.selected_activity.get_untracked();
        self.signup(&email, &activity).await;
    }

    /// Register `email` for `activity`, refreshing the listing on success
    pub async fn signup(&self, email: &str, activity: &str) {
        match self.api.signup(activity, email).await {
            Ok(response) => {
                tracing::info!(%email, %activity, "signed up participant");
                let text = response
                    .message
                    .unwrap_or_else(|| format!("Signed up {} for {}", email, activity));
                self.show_message(TransientMessage::success(text));
                self.email.set(String::new());
                self.selected_activity.set(String::new());
                self.render_activities().await;
            }
            Err(e) => {
                tracing::error!(%email, %activity, error = %e, "signup failed");
                let fallback = if e.is_status() {
                    SIGNUP_FAILED
                } else {
                    SIGNUP_UNREACHABLE
                };
                self.show_error(&e, fallback);
            }
        }
    }

    /// Remove `email` from `activity` once the user confirms
    pub async fn unregister(&self, email: &str, activity: &str) {
        let prompt = format!("Unregister {} from {}?", email, activity);
        if !self.platform.confirm(&prompt) {
            tracing::debug!(%email, %activity, "unregister declined");
            return;
        }

        match self.api.unregister(activity, email).await {
            Ok(response) => {
                tracing::info!(%email, %activity, "unregistered participant");
                let text = response
                    .message
                    .unwrap_or_else(|| format!("Unregistered {} from {}", email, activity));
                self.show_message(TransientMessage::success(text));
                self.render_activities().await;
            }
            Err(e) => {
                tracing::error!(%email, %activity, error = %e, "unregister failed");
                self.show_error(&e, UNREGISTER_FAILED);
            }
        }
    }

    // ============ Banner ============

    fn show_error(&self, error: &ApiError, fallback: &str) {
        let text = error.detail().unwrap_or(fallback);
        self.show_message(TransientMessage::error(text));
    }

    /// Show a message, replacing any current one, and hide it after the display window
    pub fn show_message(&self, message: TransientMessage) {
        let generation = self.banner_generation.get() + 1;
        self.banner_generation.set(generation);
        self.banner.set(Some(message));

        let banner = self.banner;
        let current = Rc::clone(&self.banner_generation);
        self.platform.schedule(
            MESSAGE_DISPLAY_MS,
            Box::new(move || {
                if current.get() == generation {
                    banner.set(None);
                }
            }),
        );
    }
}
