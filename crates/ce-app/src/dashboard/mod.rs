//! Dashboard view-model.
//!
//! All state lives in [`DashboardState`]; [`DashboardState::apply`] is the only
//! transition function. It never performs I/O itself: it returns [`Effect`]s
//! that the front end executes, feeding each completion back in as an
//! [`Event`] tagged with the sequence number it was issued under.

mod event;
mod notify;
mod slot;
mod state;

pub use event::{Effect, Event, Request};
pub use notify::{Level, Notification};
pub use slot::{Slot, SlotStatus};
pub use state::{DashboardState, Selection};
