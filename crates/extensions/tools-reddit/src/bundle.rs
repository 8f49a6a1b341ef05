//! Text collected from Reddit threads before summarization.

use serde::{Deserialize, Serialize, Serializer};

/// Turn a post title into the slug Reddit accepts in thread URLs.
///
/// Spaces become underscores, the result is lower-cased, and anything other
/// than ASCII letters, digits, underscores and whitespace is dropped. Applying
/// it twice gives the same result as applying it once.
pub fn sanitize_title(title: &str) -> String {
    title
        .replace(' ', "_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// How a thread's reply list is trimmed before it is summarized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTrim {
    /// Drop the final entry, which Reddit often uses for a "load more" stub.
    /// Empty and single-entry lists end up empty.
    #[default]
    DropLast,
    KeepAll,
}

impl ReplyTrim {
    pub fn apply<T>(self, mut replies: Vec<T>) -> Vec<T> {
        if self == Self::DropLast {
            replies.pop();
        }
        replies
    }
}

/// The original post and its top-level replies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadText {
    pub post: String,
    pub replies: Vec<String>,
}

impl Serialize for ThreadText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.post, &self.replies).serialize(serializer)
    }
}

/// Threads keyed by sanitized title, in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedBundle {
    entries: Vec<(String, ThreadText)>,
}

impl AggregatedBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a thread. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, title: impl Into<String>, thread: ThreadText) {
        let title = title.into();
        match self.entries.iter_mut().find(|(key, _)| *key == title) {
            Some((_, existing)) => *existing = thread,
            None => self.entries.push((title, thread)),
        }
    }

    pub fn get(&self, title: &str) -> Option<&ThreadText> {
        self.entries
            .iter()
            .find(|(key, _)| key == title)
            .map(|(_, thread)| thread)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Serialize as a JSON object, keys in insertion order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for AggregatedBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, thread)| (key, thread)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(post: &str, replies: &[&str]) -> ThreadText {
        ThreadText {
            post: post.to_string(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("Best Tacos!!"), "best_tacos");
        assert_eq!(sanitize_title("Where to eat in São Paulo?"), "where_to_eat_in_so_paulo");
        assert_eq!(sanitize_title("Pho & Ramen (2024)"), "pho__ramen_2024");
    }

    #[test]
    fn test_sanitize_title_is_idempotent() {
        let titles = [
            "Best Tacos!!",
            "  leading\tand trailing  ",
            "ÜBER Große Küche",
            "already_clean_123",
            "",
            "emoji 🍕 pizza\nnight",
        ];
        for title in titles {
            let once = sanitize_title(title);
            assert_eq!(sanitize_title(&once), once, "not idempotent for {:?}", title);
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()),
                "unexpected character in {:?}",
                once
            );
            assert!(!once.contains(' '));
        }
    }

    #[test]
    fn test_drop_last_boundaries() {
        assert_eq!(ReplyTrim::DropLast.apply(Vec::<&str>::new()), Vec::<&str>::new());
        assert_eq!(ReplyTrim::DropLast.apply(vec!["only"]), Vec::<&str>::new());
        assert_eq!(ReplyTrim::DropLast.apply(vec!["a", "b", "c"]), vec!["a", "b"]);
    }

    #[test]
    fn test_keep_all() {
        assert_eq!(ReplyTrim::KeepAll.apply(vec!["a", "b"]), vec!["a", "b"]);
        assert_eq!(ReplyTrim::KeepAll.apply(Vec::<&str>::new()), Vec::<&str>::new());
    }

    #[test]
    fn test_reply_trim_serde() {
        assert_eq!(serde_json::to_string(&ReplyTrim::DropLast).unwrap(), "\"drop_last\"");
        let parsed: ReplyTrim = serde_json::from_str("\"keep_all\"").unwrap();
        assert_eq!(parsed, ReplyTrim::KeepAll);
        assert_eq!(ReplyTrim::default(), ReplyTrim::DropLast);
    }

    #[test]
    fn test_bundle_serializes_in_insertion_order() {
        let mut bundle = AggregatedBundle::new();
        bundle.insert("zeta", thread("z post", &["z1"]));
        bundle.insert("alpha", thread("a post", &[]));

        assert_eq!(
            bundle.to_json().unwrap(),
            r#"{"zeta":["z post",["z1"]],"alpha":["a post",[]]}"#
        );
    }

    #[test]
    fn test_bundle_duplicate_title_replaces_in_place() {
        let mut bundle = AggregatedBundle::new();
        bundle.insert("tacos", thread("first", &[]));
        bundle.insert("pizza", thread("pizza", &[]));
        bundle.insert("tacos", thread("second", &["r"]));

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.titles().collect::<Vec<_>>(), vec!["tacos", "pizza"]);
        assert_eq!(bundle.get("tacos").unwrap().post, "second");
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = AggregatedBundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.to_json().unwrap(), "{}");
    }
}
