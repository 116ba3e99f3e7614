use indexmap::IndexMap;
use tracing::debug;

pub const SOURCE_PLACEHOLDER: &str = "{query}";
pub const TARGET_PLACEHOLDER: &str = "{0}";

/// One custom web search, as read from a nested dictionary of the preferences file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEntry {
    pub label: String,
    pub shortname: String,
    pub template: String,
    /// Dictionary key the entry was stored under; names its icon file.
    pub icon_key: String,
}

impl SearchEntry {
    pub fn new(icon_key: impl Into<String>) -> Self {
        SearchEntry {
            icon_key: icon_key.into(),
            ..SearchEntry::default()
        }
    }

    pub fn from_properties(icon_key: String, mut properties: IndexMap<String, String>) -> Self {
        let mut take = |name: &str| properties.shift_remove(name).unwrap_or_default();
        let entry = SearchEntry {
            label: take("text"),
            shortname: take("keyword"),
            template: rewrite_placeholder(&take("url")),
            icon_key,
        };
        if !properties.is_empty() {
            debug!(
                key = %entry.icon_key,
                ignored = ?properties.keys().collect::<Vec<_>>(),
                "dropped unused properties"
            );
        }
        entry
    }
}

/// Swaps the first `{query}` for `{0}`. Later occurrences are left alone.
pub fn rewrite_placeholder(url: &str) -> String {
    url.replacen(SOURCE_PLACEHOLDER, TARGET_PLACEHOLDER, 1)
}
