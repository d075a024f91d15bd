//! State Management
//!
//! The activity board controller and the data it projects into the view.

pub mod board;
pub mod message;
pub mod snapshot;

pub use board::ActivityBoard;
pub use message::{MessageKind, TransientMessage, MESSAGE_DISPLAY_MS};
pub use snapshot::{ActivitiesSnapshot, Activity, ActivityDetails};
