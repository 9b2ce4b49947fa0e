//! # Event Bus
//!
//! Central event distribution for decoupled communication between the
//! panel state and its view bindings using the observer pattern.

use super::state_events::StateEvent;

/// Type alias for state event handlers to reduce complexity
pub type StateEventHandler = Box<dyn Fn(&StateEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a state event to every subscriber, synchronously.
    fn publish_state_event(&mut self, event: StateEvent);

    /// Subscribe to state events
    fn subscribe_to_state_events(&mut self, handler: StateEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    handlers: Vec<StateEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_state_event(&mut self, event: StateEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }

    fn subscribe_to_state_events(&mut self, handler: StateEventHandler) {
        self.handlers.push(handler);
    }
}
