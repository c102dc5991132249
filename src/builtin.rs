pub const BUILTIN_CSS: &str = include_str!("builtin.css");

pub const PAGE_TITLE: &str = "Latest Topics";
