use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind tag attached to content mirrored to the remote sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Initial,
    Revised,
}

/// One completed revision cycle: the original post and its edited version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPair {
    pub id: String,
    pub original: String,
    pub revised: String,
}

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub content: String,
    pub posted_at: DateTime<Utc>,
}
