//! # Article Panel
//!
//! The panel's clean MVVM-style core: an observable store holding the
//! list/modal state, a controller exposing the commands that mutate it
//! and talk to the backend, and the injected collaborator seams. All
//! components are designed with clear separation of concerns and
//! testability.

pub mod controller;
pub mod debounce;
pub mod events;
pub mod models;
pub mod services;
pub mod store;

// Re-export core types
pub use controller::{AfterRefreshHook, ArticleListController, DELETE_CONFIRM_MESSAGE};
pub use debounce::SearchDebouncer;
pub use events::*;
pub use models::*;
pub use services::*;
pub use store::ArticleStore;
