//! UI Components
//!
//! Leptos components for the activity board page.

pub mod activity_list;
pub mod message_banner;
pub mod signup_form;

pub use activity_list::ActivityList;
pub use message_banner::MessageBanner;
pub use signup_form::SignupForm;
