mod avatar;
mod builtin;
mod category;
mod cli;
mod feed;
mod fetcher;
mod format;
mod html;
mod links;
mod page;

use std::time::Duration;

use anyhow::Context as _;
use cli::Args;
use fetcher::Fetcher;

pub use cli::Args as CliArgs;
pub use feed::{FeedSource, LatestFeed, Poster, Topic, TopicList, User};
pub use html::{render_rows, show_latest_posts};
pub use links::ForumLinks;
pub use page::{PageDocument, RowSink};

/// Loads the feed once and writes the page to `args.out`.
///
/// A feed that cannot be loaded is logged and leaves the container as it was in
/// the template; the page is still written and the call succeeds.
pub async fn run(args: Args) -> anyhow::Result<()> {
    let links = args.links();

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => html::build_page(&args.container_id),
    };
    PageDocument::ensure_container(&template, &args.container_id)?;

    let fetcher = Fetcher::new(&args.user_agent, args.timeout_secs.map(Duration::from_secs))?;
    let source = args.feed_source();

    tracing::info!(%source, "requesting latest topics");
    let pending = tokio::spawn(feed::load_feed(fetcher, source));
    tracing::debug!("feed request dispatched");

    let loaded = pending.await.context("feed task aborted").and_then(|r| r);
    // The document is not `Send`; it only exists once the feed has settled.
    let mut page = PageDocument::parse(&template, &args.container_id)?;
    match loaded {
        Ok(feed) => {
            html::show_latest_posts(&feed, &links, chrono::Utc::now(), &mut page)?;
            tracing::info!(
                topics = feed.topic_list.topics.len(),
                "rendered latest topics"
            );
        }
        Err(err) => {
            tracing::error!(error = ?err, "failed to load latest topics");
        }
    }

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let html = page.to_html()?;
    std::fs::write(&args.out, html).with_context(|| format!("write {}", args.out.display()))?;
    Ok(())
}
