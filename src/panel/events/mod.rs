//! # Events Module
//!
//! Re-exports the event system components: the state-change event type
//! and the observer bus that distributes it to view bindings.

pub mod event_bus;
pub mod state_events;

pub use event_bus::{EventBus, SimpleEventBus, StateEventHandler};
pub use state_events::StateEvent;
