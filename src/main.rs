//! # Draftline Main Entry Point
//!
//! Boots the article panel against a live backend and prints the
//! fetched list: a command-line smoke surface for the whole stack.

use std::sync::Arc;

use anyhow::Result;
use draftline::cmd_args::CommandLineArgs;
use draftline::config::{self, ApiConfig};
use draftline::{
    ArticleListController, ArticleStore, ConsoleNotificationSink, HttpArticleApi,
    StdinConfirmationPrompt,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let api_config = ApiConfig::new(
        args.base_url()
            .cloned()
            .unwrap_or_else(config::get_base_url),
        args.csrf_token()
            .cloned()
            .unwrap_or_else(config::get_csrf_token),
    );
    tracing::info!("using backend {}", api_config.base_url);

    let store = Arc::new(ArticleStore::new(Vec::new(), args.search()));
    store.subscribe(Box::new(|event| tracing::debug!("state event: {event:?}")));

    let api = Arc::new(HttpArticleApi::new(api_config)?);
    let controller = ArticleListController::new(
        Arc::clone(&store),
        api,
        Arc::new(ConsoleNotificationSink),
        Arc::new(StdinConfirmationPrompt),
    );

    controller.set_status_filter(args.filter()).await;

    let articles = store.articles();
    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    for article in &articles {
        let status = if article.is_published {
            "published"
        } else {
            "draft"
        };
        println!("#{:<6} [{status:>9}] {}", article.id, article.title);
    }
    println!("\n{} article(s)", articles.len());

    Ok(())
}
