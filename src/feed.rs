use chrono::Utc;
use chrono_tz::Tz;

use crate::domain::FeedEntry;

/// Reverse-chronological list of submitted posts. Grows without bound for
/// the lifetime of the run; there is no deletion.
#[derive(Debug, Default)]
pub struct Feed {
    entries: Vec<FeedEntry>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, content: String) {
        self.entries.insert(
            0,
            FeedEntry {
                content,
                posted_at: Utc::now(),
            },
        );
    }

    /// Most recent first.
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats an entry timestamp in the configured timezone. An unparseable
/// timezone name falls back to UTC.
pub fn format_posted_at(entry: &FeedEntry, timezone: &str) -> String {
    let tz: Tz = timezone.parse().unwrap_or(chrono_tz::UTC);
    entry
        .posted_at
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut feed = Feed::new();
        feed.push("first post".to_string());
        feed.push("second post".to_string());

        let contents: Vec<_> = feed.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["second post", "first post"]);
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        let mut feed = Feed::new();
        feed.push("post".to_string());
        let entry = &feed.entries()[0];
        assert_eq!(
            format_posted_at(entry, "Not/AZone"),
            format_posted_at(entry, "UTC")
        );
    }
}
