//! # State Events
//!
//! Events emitted when the panel state changes. View bindings subscribe
//! to these for reactive updates; delivery is synchronous with the
//! mutation, before the next cooperative suspension point.

use crate::panel::models::{ArticleId, StatusFilter};

/// Change notification for a tracked state field.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// The article list was replaced wholesale by a fetch.
    ArticlesReplaced { count: usize },

    /// The search input changed.
    SearchTermChanged { term: String },

    /// The status filter changed.
    StatusFilterChanged { filter: StatusFilter },

    /// A list fetch started or finished.
    LoadingChanged { loading: bool },

    /// The modal opened; `None` for create mode, `Some(id)` for edit.
    ModalOpened { editing_id: Option<ArticleId> },

    /// The modal was dismissed.
    ModalClosed,

    /// Some field of the draft buffer changed.
    DraftChanged,
}
