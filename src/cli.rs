use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::feed::FeedSource;
use crate::links::{self, ForumLinks};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// URL of the Discourse `latest.json` feed.
    #[arg(long, default_value = links::DEFAULT_FEED_URL)]
    pub feed_url: Url,

    /// Render a saved `latest.json` instead of fetching `--feed-url`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// HTML page to write the rows into. Defaults to a built-in page with a topics table.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Id of the element whose content is replaced by the rendered rows.
    #[arg(long, default_value = "posts-container")]
    pub container_id: String,

    /// Output HTML file.
    #[arg(long, default_value = "latest.html")]
    pub out: PathBuf,

    /// Prefix for topic links; `<slug>/<id>` is appended.
    #[arg(long, default_value = links::DEFAULT_TOPIC_BASE_URL)]
    pub topic_base_url: String,

    /// Prefix for category links; `<class>/<id>` is appended.
    #[arg(long, default_value = links::DEFAULT_CATEGORY_BASE_URL)]
    pub category_base_url: String,

    /// Host prepended to relative `/user_avatar/...` paths.
    #[arg(long, default_value = links::DEFAULT_AVATAR_HOST)]
    pub avatar_host: String,

    /// Avatar size for `{size}` substitution in `avatar_template`.
    #[arg(long, default_value_t = links::DEFAULT_AVATAR_SIZE)]
    pub avatar_size: u32,

    /// HTTP User-Agent used for fetching the feed.
    #[arg(long, default_value = "forum-latest-render/0.1")]
    pub user_agent: String,

    /// Give up on the feed request after this many seconds. No timeout by default.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn links(&self) -> ForumLinks {
        ForumLinks {
            topic_base: self.topic_base_url.clone(),
            category_base: self.category_base_url.clone(),
            avatar_host: self.avatar_host.clone(),
            avatar_size: self.avatar_size,
        }
    }

    pub fn feed_source(&self) -> FeedSource {
        match &self.input {
            Some(path) => FeedSource::Local(path.clone()),
            None => FeedSource::Remote(self.feed_url.clone()),
        }
    }
}
