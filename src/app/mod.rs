//! Application layer coordinating state, events, and actions.
//!
//! This layer is the navigation controller: it owns the session state and
//! implements the mode-based input state machine. The binary translates raw
//! key presses into [`Event`]s, [`handle_event`] mutates [`AppState`] and
//! returns [`Action`]s, and the binary executes those side effects.
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Session state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
