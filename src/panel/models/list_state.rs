//! # Article List State
//!
//! The panel's complete UI state and its pure transitions. Transition
//! methods return the [`StateEvent`]s they imply so the owning store can
//! publish them to view bindings after the mutation lands.

use crate::panel::events::StateEvent;
use crate::panel::models::article::{Article, ArticleId, Draft, ListQuery, StatusFilter};

/// Everything the view binds to, in one place.
///
/// Created once per session from the server-rendered bootstrap payload,
/// mutated only through the controller's commands, discarded on
/// navigation away.
#[derive(Debug, Clone, Default)]
pub struct ArticleListState {
    /// Server-ordered article list; replaced wholesale on every
    /// successful fetch, never merged incrementally.
    pub articles: Vec<Article>,
    /// User-controlled search input.
    pub search_term: String,
    /// Publication-status filter.
    pub status_filter: StatusFilter,
    /// True strictly while a list fetch is outstanding.
    pub is_loading: bool,
    /// Whether the create/edit modal is showing.
    pub is_modal_open: bool,
    /// `None` means create mode; `Some(id)` means editing that article.
    pub editing_id: Option<ArticleId>,
    /// The unsaved form buffer.
    pub draft: Draft,
}

impl ArticleListState {
    /// Seed the state from the server-rendered initial payload.
    pub fn new(initial_articles: Vec<Article>, initial_search: impl Into<String>) -> Self {
        Self {
            articles: initial_articles,
            search_term: initial_search.into(),
            ..Self::default()
        }
    }

    pub fn set_loading(&mut self, loading: bool) -> [StateEvent; 1] {
        self.is_loading = loading;
        [StateEvent::LoadingChanged { loading }]
    }

    pub fn set_articles(&mut self, articles: Vec<Article>) -> [StateEvent; 1] {
        self.articles = articles;
        [StateEvent::ArticlesReplaced {
            count: self.articles.len(),
        }]
    }

    pub fn set_search_term(&mut self, term: String) -> [StateEvent; 1] {
        self.search_term = term.clone();
        [StateEvent::SearchTermChanged { term }]
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) -> [StateEvent; 1] {
        self.status_filter = filter;
        [StateEvent::StatusFilterChanged { filter }]
    }

    /// Enter create mode: fresh draft, no editing id, modal showing.
    pub fn open_create_modal(&mut self) -> [StateEvent; 2] {
        self.editing_id = None;
        self.draft = Draft::default();
        self.is_modal_open = true;
        [
            StateEvent::DraftChanged,
            StateEvent::ModalOpened { editing_id: None },
        ]
    }

    /// Enter edit mode for `article`: copy its editable fields into the
    /// draft buffer and remember its id.
    pub fn open_edit_modal(&mut self, article: &Article) -> [StateEvent; 2] {
        self.editing_id = Some(article.id);
        self.draft = Draft::from_article(article);
        self.is_modal_open = true;
        [
            StateEvent::DraftChanged,
            StateEvent::ModalOpened {
                editing_id: Some(article.id),
            },
        ]
    }

    /// Dismiss the modal. The draft and `editing_id` stay as they are;
    /// every open-transition resets them.
    pub fn close_modal(&mut self) -> [StateEvent; 1] {
        self.is_modal_open = false;
        [StateEvent::ModalClosed]
    }

    pub fn set_draft_title(&mut self, title: String) -> [StateEvent; 1] {
        self.draft.title = title;
        [StateEvent::DraftChanged]
    }

    pub fn set_draft_content(&mut self, content: String) -> [StateEvent; 1] {
        self.draft.content = content;
        [StateEvent::DraftChanged]
    }

    pub fn set_draft_published(&mut self, published: bool) -> [StateEvent; 1] {
        self.draft.is_published = published;
        [StateEvent::DraftChanged]
    }

    /// Snapshot of the current filters for a list request.
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            search: self.search_term.clone(),
            status: self.status_filter,
        }
    }
}
