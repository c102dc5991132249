pub const DEFAULT_FEED_URL: &str =
    "https://cdn.freecodecamp.org/curriculum/forum-latest/latest.json";
pub const DEFAULT_TOPIC_BASE_URL: &str = "https://forum.freecodecamp.org/t/";
pub const DEFAULT_CATEGORY_BASE_URL: &str = "https://forum.freecodecamp.org/c/";
pub const DEFAULT_AVATAR_HOST: &str = "https://sea1.discourse-cdn.com/freecodecamp";
pub const DEFAULT_AVATAR_SIZE: u32 = 30;

/// Fixed prefixes used to build topic, category and avatar links.
///
/// Links are built by plain concatenation, so base URLs are expected to carry
/// their trailing `/` and the avatar host must not.
#[derive(Debug, Clone)]
pub struct ForumLinks {
    pub topic_base: String,
    pub category_base: String,
    pub avatar_host: String,
    pub avatar_size: u32,
}

impl ForumLinks {
    pub fn topic_url(&self, slug: &str, id: u64) -> String {
        format!("{}{}/{}", self.topic_base, slug, id)
    }

    pub fn category_url(&self, class_name: &str, id: u64) -> String {
        format!("{}{}/{}", self.category_base, class_name, id)
    }
}

impl Default for ForumLinks {
    fn default() -> Self {
        Self {
            topic_base: DEFAULT_TOPIC_BASE_URL.to_string(),
            category_base: DEFAULT_CATEGORY_BASE_URL.to_string(),
            avatar_host: DEFAULT_AVATAR_HOST.to_string(),
            avatar_size: DEFAULT_AVATAR_SIZE,
        }
    }
}
