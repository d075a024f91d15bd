//! Activities REST API
//!
//! Client side of the activities API.
//!
//! # Endpoints
//!
//! - `GET /activities` - Full activities snapshot
//! - `POST /activities/{activity}/signup?email=` - Register a participant
//! - `DELETE /activities/{activity}/participants?email=` - Remove a participant

pub mod client;
pub mod error;

pub use client::{ActivitiesApi, ApiMessage, HttpActivitiesApi};
pub use error::ApiError;
