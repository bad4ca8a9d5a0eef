//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the engine and
//! catalog layers. It follows a unidirectional data flow:
//!
//! ```text
//! User Input / Web Responses → Events → Event Handler → Engine Mutations → Actions
//!                                  ↑                                          ↓
//!                                  └──────────── Web Requests ────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and favourite view types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FavouriteView, InputMode, SearchFocus};
pub use state::{AppState, TypePicker};
