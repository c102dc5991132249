use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::avatar::{self, UserIndex};
use crate::builtin;
use crate::category;
use crate::feed::{LatestFeed, Topic};
use crate::format;
use crate::links::ForumLinks;
use crate::page::RowSink;

/// Renders every topic and hands the result to `sink` in a single call, so the
/// previous content survives anything that fails before that point.
pub fn show_latest_posts<S: RowSink + ?Sized>(
    feed: &LatestFeed,
    links: &ForumLinks,
    now: DateTime<Utc>,
    sink: &mut S,
) -> anyhow::Result<()> {
    let rows = render_rows(feed, links, now);
    sink.replace_rows(&rows)
}

pub fn render_rows(feed: &LatestFeed, links: &ForumLinks, now: DateTime<Utc>) -> String {
    let users = avatar::index_users(&feed.users);
    let markup: Markup = html! {
        @for topic in &feed.topic_list.topics {
            (render_row(topic, &users, links, now))
        }
    };
    markup.into_string()
}

fn render_row(
    topic: &Topic,
    users: &UserIndex<'_>,
    links: &ForumLinks,
    now: DateTime<Utc>,
) -> Markup {
    let topic_url = links.topic_url(&topic.slug, topic.id);
    // posts_count counts the opening post too.
    let replies = topic.posts_count.saturating_sub(1);

    html! {
        tr {
            td {
                a target="_blank" href=(topic_url) class="post-title" { (topic.title) }
                (category::category_link(topic.category_id, links))
            }
            td {
                div class="avatar-container" {
                    (avatar::avatars(&topic.posters, users, links))
                }
            }
            td { (replies) }
            td { (format::view_count(topic.views)) }
            td { (format::time_ago(topic.bumped_at, now)) }
        }
    }
}

/// Stand-alone page used when no template is given: a topics table whose body
/// is the row container.
pub fn build_page(container_id: &str) -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (builtin::PAGE_TITLE) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body {
                main class="flr-container" {
                    h1 { (builtin::PAGE_TITLE) }
                    table class="flr-topics" {
                        thead {
                            tr {
                                th { "Topics" }
                                th { "Avatars" }
                                th { "Replies" }
                                th { "Views" }
                                th { "Activity" }
                            }
                        }
                        tbody id=(container_id) {}
                    }
                }
            }
        }
    };
    markup.into_string()
}
