//! # Activity Board
//!
//! Browser client for an activities API: lists activities with their
//! participants, signs participants up and unregisters them.
//!
//! This is a client-side rendered (CSR) Leptos application compiled to
//! WebAssembly. Every action refetches the full activities snapshot and
//! rebuilds the listing from it; nothing is cached between fetches.
//!
//! ## Modules
//!
//! - [`state`]: The board controller, snapshot model and banner messages
//! - [`api`]: Client for the activities REST API
//! - [`render`]: Escaped card markup
//! - [`components`]: Leptos components for the page
//! - [`platform`]: Confirmation dialogs and timers

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod platform;
pub mod render;
pub mod state;

pub use api::{ActivitiesApi, ApiError, ApiMessage, HttpActivitiesApi};
pub use config::{BoardConfig, ConfigError};
pub use platform::{BrowserPlatform, Platform};
pub use state::{ActivitiesSnapshot, ActivityBoard, ActivityDetails, MessageKind, TransientMessage};
