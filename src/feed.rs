use std::fmt;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::fetcher::Fetcher;

/// Body of a Discourse `latest.json`. Unknown fields are ignored; a missing
/// required field rejects the whole feed.
#[derive(Debug, Deserialize)]
pub struct LatestFeed {
    pub topic_list: TopicList,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Deserialize)]
pub struct Topic {
    pub id: u64,
    pub title: String,
    pub views: u64,
    /// Includes the opening post.
    pub posts_count: u64,
    pub slug: String,
    pub bumped_at: DateTime<Utc>,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub posters: Vec<Poster>,
}

#[derive(Debug, Deserialize)]
pub struct Poster {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_template: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.username.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FeedSource {
    Remote(Url),
    Local(PathBuf),
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Remote(url) => write!(f, "{url}"),
            FeedSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

pub async fn load_feed(fetcher: Fetcher, source: FeedSource) -> anyhow::Result<LatestFeed> {
    match source {
        FeedSource::Remote(url) => fetcher.get_json(url).await,
        FeedSource::Local(path) => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            serde_json::from_slice(&bytes).context("parse latest feed")
        }
    }
}
