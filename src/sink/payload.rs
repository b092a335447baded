use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::PostKind;

/// Document accepted by the hosted post store. No response payload is
/// consumed beyond success or failure.
#[derive(Debug, Serialize)]
pub struct SinkPayload {
    pub content: String,
    pub kind: PostKind,
    pub timestamp: DateTime<Utc>,
}

pub fn build_payload(content: &str, kind: PostKind, timestamp: DateTime<Utc>) -> SinkPayload {
    SinkPayload {
        content: content.to_string(),
        kind,
        timestamp,
    }
}
