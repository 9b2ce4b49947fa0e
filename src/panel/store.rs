//! # Article Store
//!
//! Observable owner of [`ArticleListState`]. Every mutation applies the
//! state transition under the lock, releases it, then publishes the
//! resulting [`StateEvent`]s synchronously, so subscribers always
//! observe a change before the next cooperative suspension point. The
//! lock is never held across an `.await`.

use std::sync::{Mutex, MutexGuard};

use crate::panel::events::{EventBus, SimpleEventBus, StateEvent, StateEventHandler};
use crate::panel::models::{Article, ArticleId, ArticleListState, Draft, ListQuery, StatusFilter};

/// Shared, observable panel state.
pub struct ArticleStore {
    state: Mutex<ArticleListState>,
    bus: Mutex<Box<dyn EventBus>>,
}

impl ArticleStore {
    /// Seed the store from the server-rendered bootstrap payload.
    pub fn new(initial_articles: Vec<Article>, initial_search: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ArticleListState::new(initial_articles, initial_search)),
            bus: Mutex::new(Box::new(SimpleEventBus::new())),
        }
    }

    /// Subscribe a view binding to state changes.
    ///
    /// Handlers run synchronously on the mutating call; they may read
    /// the store but must not subscribe from within a handler.
    pub fn subscribe(&self, handler: StateEventHandler) {
        self.bus
            .lock()
            .expect("event bus lock poisoned")
            .subscribe_to_state_events(handler);
    }

    fn state(&self) -> MutexGuard<'_, ArticleListState> {
        self.state.lock().expect("state lock poisoned")
    }

    fn publish(&self, events: impl IntoIterator<Item = StateEvent>) {
        let mut bus = self.bus.lock().expect("event bus lock poisoned");
        for event in events {
            bus.publish_state_event(event);
        }
    }

    // ─── Reads ───

    pub fn articles(&self) -> Vec<Article> {
        self.state().articles.clone()
    }

    pub fn search_term(&self) -> String {
        self.state().search_term.clone()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.state().status_filter
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.state().is_modal_open
    }

    pub fn editing_id(&self) -> Option<ArticleId> {
        self.state().editing_id
    }

    pub fn draft(&self) -> Draft {
        self.state().draft.clone()
    }

    /// Current filters, snapshotted for a list request.
    pub fn list_query(&self) -> ListQuery {
        self.state().list_query()
    }

    /// Editing id and draft buffer in one atomic read, for submission.
    pub fn draft_snapshot(&self) -> (Option<ArticleId>, Draft) {
        let state = self.state();
        (state.editing_id, state.draft.clone())
    }

    /// Full state clone for the view layer.
    pub fn snapshot(&self) -> ArticleListState {
        self.state().clone()
    }

    // ─── Mutations ───

    pub fn set_loading(&self, loading: bool) {
        let events = self.state().set_loading(loading);
        self.publish(events);
    }

    pub fn set_articles(&self, articles: Vec<Article>) {
        let events = self.state().set_articles(articles);
        self.publish(events);
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        let events = self.state().set_search_term(term.into());
        self.publish(events);
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        let events = self.state().set_status_filter(filter);
        self.publish(events);
    }

    pub fn open_create_modal(&self) {
        let events = self.state().open_create_modal();
        self.publish(events);
    }

    pub fn open_edit_modal(&self, article: &Article) {
        let events = self.state().open_edit_modal(article);
        self.publish(events);
    }

    pub fn close_modal(&self) {
        let events = self.state().close_modal();
        self.publish(events);
    }

    pub fn set_draft_title(&self, title: impl Into<String>) {
        let events = self.state().set_draft_title(title.into());
        self.publish(events);
    }

    pub fn set_draft_content(&self, content: impl Into<String>) {
        let events = self.state().set_draft_content(content.into());
        self.publish(events);
    }

    pub fn set_draft_published(&self, published: bool) {
        let events = self.state().set_draft_published(published);
        self.publish(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1),
            title: "A".to_string(),
            content: "x".to_string(),
            is_published: true,
        }
    }

    #[test]
    fn store_should_notify_subscribers_synchronously() {
        let store = ArticleStore::new(vec![], "");
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();

        store.subscribe(Box::new(move |event| {
            received_clone.lock().unwrap().push(event.clone());
        }));

        store.set_search_term("foo");

        // Delivered before set_search_term returned, nothing deferred.
        assert_eq!(
            *received.lock().unwrap(),
            vec![StateEvent::SearchTermChanged {
                term: "foo".to_string()
            }]
        );
    }

    #[test]
    fn store_should_allow_handlers_to_read_state() {
        let store = Arc::new(ArticleStore::new(vec![], ""));
        let seen_term = Arc::new(Mutex::new(String::new()));

        let store_clone = Arc::clone(&store);
        let seen_clone = seen_term.clone();
        store.subscribe(Box::new(move |_| {
            *seen_clone.lock().unwrap() = store_clone.search_term();
        }));

        store.set_search_term("bar");

        assert_eq!(*seen_term.lock().unwrap(), "bar");
    }

    #[test]
    fn open_edit_modal_should_publish_draft_then_modal_events() {
        let store = ArticleStore::new(vec![], "");
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        store.subscribe(Box::new(move |event| {
            received_clone.lock().unwrap().push(event.clone());
        }));

        store.open_edit_modal(&sample_article());

        assert_eq!(
            *received.lock().unwrap(),
            vec![
                StateEvent::DraftChanged,
                StateEvent::ModalOpened {
                    editing_id: Some(ArticleId::new(1))
                },
            ]
        );
        assert!(store.is_modal_open());
        assert_eq!(store.draft().title, "A");
    }

    #[test]
    fn draft_snapshot_should_capture_id_and_buffer_together() {
        let store = ArticleStore::new(vec![], "");
        store.open_edit_modal(&sample_article());
        store.set_draft_title("B");

        let (editing_id, draft) = store.draft_snapshot();

        assert_eq!(editing_id, Some(ArticleId::new(1)));
        assert_eq!(draft.title, "B");
    }

    #[test]
    fn snapshot_should_clone_full_state() {
        let store = ArticleStore::new(vec![sample_article()], "seed");

        let snapshot = store.snapshot();

        assert_eq!(snapshot.articles.len(), 1);
        assert_eq!(snapshot.search_term, "seed");
    }
}
