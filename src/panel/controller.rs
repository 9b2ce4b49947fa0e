//! # Article List Controller
//!
//! The panel's command surface. Owns the observable store and talks to
//! the injected collaborators: the backend API, the notification sink,
//! and the confirmation prompt. All network and server errors are
//! handled at the command boundary; nothing propagates to the view
//! layer as an uncaught failure, and no command retries on its own.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use scopeguard::guard;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::panel::debounce::SearchDebouncer;
use crate::panel::models::{Article, ArticleId, StatusFilter};
use crate::panel::services::{ArticleApi, ConfirmationPrompt, NotificationSink};
use crate::panel::store::ArticleStore;

/// Confirmation shown before a delete request is issued.
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this article?";

const SAVE_FAILED_MESSAGE: &str = "Failed to save the article";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete the article";

/// Callback run after a successful list refresh, once the new articles
/// are in the store (the view layer hangs post-render decoration work
/// off this; defaults to nothing).
pub type AfterRefreshHook = Box<dyn Fn() + Send + Sync>;

/// Shared slot for the hook so debounced background refreshes see it too
type AfterRefreshSlot = Arc<Mutex<Option<AfterRefreshHook>>>;

/// Stateful command surface over [`ArticleStore`].
pub struct ArticleListController {
    store: Arc<ArticleStore>,
    api: Arc<dyn ArticleApi>,
    notifications: Arc<dyn NotificationSink>,
    confirmation: Arc<dyn ConfirmationPrompt>,
    search_debounce: Arc<SearchDebouncer>,
    after_refresh: AfterRefreshSlot,
}

impl ArticleListController {
    pub fn new(
        store: Arc<ArticleStore>,
        api: Arc<dyn ArticleApi>,
        notifications: Arc<dyn NotificationSink>,
        confirmation: Arc<dyn ConfirmationPrompt>,
    ) -> Self {
        Self {
            store,
            api,
            notifications,
            confirmation,
            search_debounce: Arc::new(SearchDebouncer::new(Duration::from_millis(
                SEARCH_DEBOUNCE_MS,
            ))),
            after_refresh: Arc::new(Mutex::new(None)),
        }
    }

    /// Override the search quiescence delay (tests use short windows).
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.search_debounce = Arc::new(SearchDebouncer::new(delay));
        self
    }

    pub fn store(&self) -> &Arc<ArticleStore> {
        &self.store
    }

    /// Install the post-refresh callback.
    pub fn set_after_refresh_hook(&self, hook: AfterRefreshHook) {
        *self.after_refresh.lock().expect("hook lock poisoned") = Some(hook);
    }

    /// Fetch the list with the current filters and replace `articles`
    /// wholesale on success.
    ///
    /// Safe to call concurrently: calls carry no sequencing token, so
    /// when fetches overlap, the last response to resolve wins. On
    /// failure the list is left as it is and the error is only logged;
    /// a stale list is non-destructive.
    pub async fn refresh_list(&self) {
        Self::run_refresh(&self.store, &self.api, &self.after_refresh).await;
    }

    /// The refresh itself, free of `&self` so the debounce task can run
    /// it from clones of the collaborators.
    async fn run_refresh(
        store: &Arc<ArticleStore>,
        api: &Arc<dyn ArticleApi>,
        after_refresh: &AfterRefreshSlot,
    ) {
        store.set_loading(true);
        // Clears the flag however this future ends, dropped mid-flight included.
        let _loading_reset = guard(Arc::clone(store), |store| store.set_loading(false));

        let query = store.list_query();
        match api.list(&query).await {
            Ok(articles) => {
                store.set_articles(articles);
                if let Some(hook) = after_refresh.lock().expect("hook lock poisoned").as_ref() {
                    hook();
                }
            }
            Err(err) => {
                tracing::error!("failed to load articles: {err}");
            }
        }
    }

    /// Open the modal in create mode with a fresh draft.
    pub fn open_create_modal(&self) {
        self.store.open_create_modal();
    }

    /// Open the modal in edit mode for `article`.
    pub fn open_edit_modal(&self, article: &Article) {
        self.store.open_edit_modal(article);
    }

    /// Dismiss the modal without submitting.
    pub fn close_modal(&self) {
        self.store.close_modal();
    }

    /// Submit the whole draft buffer: UPDATE when an article is being
    /// edited, CREATE otherwise.
    ///
    /// On success the modal closes and the list refreshes; a create
    /// additionally clears the search term so the new article is
    /// guaranteed to be visible under the active filter. On failure the
    /// modal stays open with the draft intact and the server message
    /// (or a generic fallback) goes to the notification sink.
    pub async fn submit(&self) {
        let (editing_id, draft) = self.store.draft_snapshot();

        let result = match editing_id {
            Some(id) => self.api.update(id, &draft).await,
            None => self.api.create(&draft).await,
        };

        match result {
            Ok(()) => {
                self.store.close_modal();
                if editing_id.is_none() {
                    self.store.set_search_term(String::new());
                }
                self.refresh_list().await;
            }
            Err(err) => {
                tracing::warn!("saving article failed: {err}");
                let message = match err.server_message() {
                    Some(server) => format!("{SAVE_FAILED_MESSAGE}: {server}"),
                    None => SAVE_FAILED_MESSAGE.to_string(),
                };
                self.notifications.error(&message);
            }
        }
    }

    /// Delete an article after an explicit confirmation.
    ///
    /// Declining the confirmation is a no-op: no request, no state
    /// change. The article is never removed locally before the server
    /// confirms; a failed delete leaves it listed until a later refresh.
    pub async fn remove(&self, id: ArticleId) {
        if !self.confirmation.confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => self.refresh_list().await,
            Err(err) => {
                tracing::warn!("deleting article {id} failed: {err}");
                self.notifications.error(DELETE_FAILED_MESSAGE);
            }
        }
    }

    /// Record a search keystroke: the term updates (and notifies)
    /// immediately, the refresh fires only once the input has been
    /// quiescent for the debounce window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn search_input(&self, term: impl Into<String>) {
        self.store.set_search_term(term.into());

        let store = Arc::clone(&self.store);
        let api = Arc::clone(&self.api);
        let debouncer = Arc::clone(&self.search_debounce);
        let after_refresh = Arc::clone(&self.after_refresh);
        tokio::spawn(async move {
            if debouncer.quiesce().await {
                Self::run_refresh(&store, &api, &after_refresh).await;
            }
        });
    }

    /// Change the status filter and refresh immediately.
    pub async fn set_status_filter(&self, filter: StatusFilter) {
        self.store.set_status_filter(filter);
        self.refresh_list().await;
    }
}
