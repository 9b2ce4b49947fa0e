//! # Services Module
//!
//! Re-exports the panel's injected collaborators: the backend API seam,
//! the notification surface, and the confirmation gate.

pub mod api;
pub mod confirmation;
pub mod notification;

pub use api::{
    ApiError, ArticleApi, HttpArticleApi, HEADER_CSRF_TOKEN, HEADER_REQUESTED_WITH,
    REQUESTED_WITH_AJAX,
};
pub use confirmation::{AutoConfirm, ConfirmationPrompt, StdinConfirmationPrompt};
pub use notification::{ConsoleNotificationSink, NotificationSink};
