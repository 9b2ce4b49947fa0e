//! Common test utilities and infrastructure
//!
//! Hand-written recording mocks of the panel's collaborator seams so the
//! integration tests exercise the real controller with no network: a
//! scriptable `ArticleApi`, a recording notification sink, and a
//! fixed-answer confirmation prompt.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use draftline::{
    ApiError, Article, ArticleApi, ArticleId, ArticleListController, ArticleStore,
    ConfirmationPrompt, Draft, ListQuery, NotificationSink,
};

/// One recorded API interaction, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List(ListQuery),
    Create(Draft),
    Update(ArticleId, Draft),
    Delete(ArticleId),
}

struct ScriptedList {
    delay: Duration,
    result: Result<Vec<Article>, ApiError>,
}

/// Scriptable `ArticleApi` that records every call.
///
/// List responses are consumed in call order; an empty script answers
/// with an empty list. Mutations succeed unless a failure was queued.
pub struct MockArticleApi {
    calls: Mutex<Vec<RecordedCall>>,
    list_script: Mutex<VecDeque<ScriptedList>>,
    create_failures: Mutex<VecDeque<ApiError>>,
    update_failures: Mutex<VecDeque<ApiError>>,
    delete_failures: Mutex<VecDeque<ApiError>>,
}

impl MockArticleApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            list_script: Mutex::new(VecDeque::new()),
            create_failures: Mutex::new(VecDeque::new()),
            update_failures: Mutex::new(VecDeque::new()),
            delete_failures: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_list_response(&self, articles: Vec<Article>) {
        self.push_delayed_list_response(Duration::ZERO, articles);
    }

    /// Queue a list response that resolves only after `delay`; used to
    /// hold a fetch in flight while the test observes or races it.
    pub fn push_delayed_list_response(&self, delay: Duration, articles: Vec<Article>) {
        self.list_script.lock().unwrap().push_back(ScriptedList {
            delay,
            result: Ok(articles),
        });
    }

    pub fn push_list_failure(&self, error: ApiError) {
        self.list_script.lock().unwrap().push_back(ScriptedList {
            delay: Duration::ZERO,
            result: Err(error),
        });
    }

    pub fn push_create_failure(&self, error: ApiError) {
        self.create_failures.lock().unwrap().push_back(error);
    }

    pub fn push_update_failure(&self, error: ApiError) {
        self.update_failures.lock().unwrap().push_back(error);
    }

    pub fn push_delete_failure(&self, error: ApiError) {
        self.delete_failures.lock().unwrap().push_back(error);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_queries(&self) -> Vec<ListQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::List(query) => Some(query),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockArticleApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleApi for MockArticleApi {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Article>, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::List(query.clone()));

        let scripted = self.list_script.lock().unwrap().pop_front();
        match scripted {
            Some(ScriptedList { delay, result }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(Vec::new()),
        }
    }

    async fn create(&self, draft: &Draft) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Create(draft.clone()));

        match self.create_failures.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn update(&self, id: ArticleId, draft: &Draft) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Update(id, draft.clone()));

        match self.update_failures.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(RecordedCall::Delete(id));

        match self.delete_failures.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Notification sink that records every surfaced message.
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Fixed-answer confirmation prompt that records what it was asked.
pub struct ScriptedPrompt {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }
}

/// A fully-wired panel over mocks, ready for a test scenario.
pub struct TestPanel {
    pub controller: Arc<ArticleListController>,
    pub store: Arc<ArticleStore>,
    pub api: Arc<MockArticleApi>,
    pub notifications: Arc<RecordingSink>,
    pub prompt: Arc<ScriptedPrompt>,
}

/// Debounce window used by test panels; short so paused-clock tests
/// stay fast.
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(50);

pub fn panel() -> TestPanel {
    panel_with(Vec::new(), "", true)
}

pub fn panel_with(initial_articles: Vec<Article>, initial_search: &str, confirm: bool) -> TestPanel {
    let api = Arc::new(MockArticleApi::new());
    let notifications = Arc::new(RecordingSink::new());
    let prompt = Arc::new(if confirm {
        ScriptedPrompt::accepting()
    } else {
        ScriptedPrompt::declining()
    });
    let store = Arc::new(ArticleStore::new(initial_articles, initial_search));

    let controller = Arc::new(
        ArticleListController::new(
            Arc::clone(&store),
            Arc::clone(&api) as Arc<dyn ArticleApi>,
            Arc::clone(&notifications) as Arc<dyn NotificationSink>,
            Arc::clone(&prompt) as Arc<dyn ConfirmationPrompt>,
        )
        .with_debounce_delay(TEST_DEBOUNCE),
    );

    TestPanel {
        controller,
        store,
        api,
        notifications,
        prompt,
    }
}

/// Shorthand article constructor for scenarios.
pub fn article(id: i64, title: &str, content: &str, published: bool) -> Article {
    Article {
        id: ArticleId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        is_published: published,
    }
}
