//! # Draftline - Reactive Article Manager Panel
//!
//! A client-side controller for listing, searching, filtering, creating,
//! editing and deleting articles against a REST backend, without
//! full-page reloads. Built with a clean observable-store architecture
//! for maintainability and testability.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Commands   ┌────────────┐
//! │    View     │◄─────────────│ ArticleStore │◄──────────────│ Controller │
//! │  bindings   │              │              │               │            │
//! │ - subscribe │              │ - list state │               │ - refresh  │
//! │ - render    │              │ - modal state│               │ - submit   │
//! └─────────────┘              │ - draft      │               │ - remove   │
//!                              └──────────────┘               └─────┬──────┘
//!                                                                   │ HTTP
//!                                                                   ▼
//!                                                            ┌────────────┐
//!                                                            │ ArticleApi │
//!                                                            │  backend   │
//!                                                            └────────────┘
//! ```
//!
//! The store notifies subscribed view bindings synchronously on every
//! mutation; the controller owns all asynchronous orchestration and
//! never lets a network error escape to the view layer.

pub mod cmd_args;
pub mod config;
pub mod panel;

// Re-export main types for easy access
pub use panel::*;
