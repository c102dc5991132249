use std::collections::HashMap;

use maud::{Markup, html};

use crate::feed::{Poster, User};
use crate::links::ForumLinks;

const RELATIVE_AVATAR_PREFIX: &str = "/user_avatar/";

pub type UserIndex<'a> = HashMap<i64, &'a User>;

/// Keys users by id. With duplicate ids the first record wins.
pub fn index_users(users: &[User]) -> UserIndex<'_> {
    let mut index = HashMap::with_capacity(users.len());
    for user in users {
        index.entry(user.id).or_insert(user);
    }
    index
}

/// Fills the first `{size}` and makes `/user_avatar/...` paths absolute.
///
/// Letter avatars (`https://avatars.discourse-cdn.com/...`) are already absolute and
/// are kept as they are.
pub fn avatar_url(template: &str, links: &ForumLinks) -> String {
    let path = template.replacen("{size}", &links.avatar_size.to_string(), 1);
    if path.starts_with(RELATIVE_AVATAR_PREFIX) {
        format!("{}{}", links.avatar_host, path)
    } else {
        path
    }
}

/// One `<img>` per poster with a known user, in poster order. Posters without a
/// matching user are skipped.
pub fn avatars(posters: &[Poster], users: &UserIndex<'_>, links: &ForumLinks) -> Markup {
    html! {
        @for poster in posters {
            @if let Some(user) = users.get(&poster.user_id) {
                img src=(avatar_url(&user.avatar_template, links)) alt=(user.display_name());
            }
        }
    }
}
