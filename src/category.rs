use maud::{Markup, html};

use crate::links::ForumLinks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub class_name: &'static str,
}

pub const GENERAL: Category = Category {
    label: "General",
    class_name: "general",
};

pub const KNOWN: &[(u64, Category)] = &[
    (
        299,
        Category {
            label: "Career Advice",
            class_name: "career",
        },
    ),
    (
        409,
        Category {
            label: "Project Feedback",
            class_name: "feedback",
        },
    ),
    (
        417,
        Category {
            label: "freeCodeCamp Support",
            class_name: "support",
        },
    ),
    (
        421,
        Category {
            label: "JavaScript",
            class_name: "javascript",
        },
    ),
    (
        423,
        Category {
            label: "HTML - CSS",
            class_name: "html-css",
        },
    ),
    (
        424,
        Category {
            label: "Python",
            class_name: "python",
        },
    ),
    (
        432,
        Category {
            label: "You Can Do This!",
            class_name: "motivation",
        },
    ),
    (
        560,
        Category {
            label: "Backend Development",
            class_name: "backend",
        },
    ),
];

/// Unknown ids resolve to [`GENERAL`].
pub fn resolve(id: u64) -> Category {
    KNOWN
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, category)| *category)
        .unwrap_or(GENERAL)
}

/// Id used in the link of a topic that carries no category.
pub const GENERAL_ID: u64 = 1;

/// Category tag for a topic row. The href keeps the original id, even for the fallback.
/// Topics without a category link to [`GENERAL`] under [`GENERAL_ID`].
pub fn category_link(id: Option<u64>, links: &ForumLinks) -> Markup {
    let (category, id) = match id {
        Some(id) => (resolve(id), id),
        None => (GENERAL, GENERAL_ID),
    };
    let href = links.category_url(category.class_name, id);
    let class = format!("category {}", category.class_name);
    html! {
        a href=(href) class=(class) target="_blank" { (category.label) }
    }
}
