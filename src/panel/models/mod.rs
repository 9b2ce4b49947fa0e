//! # Models Module
//!
//! Re-exports the panel's data model organized by category: the article
//! wire/domain types and the complete list state with its transitions.

pub mod article;
pub mod list_state;

pub use article::{Article, ArticleId, Draft, ListQuery, StatusFilter};
pub use list_state::ArticleListState;
