pub mod post;
pub mod types;

pub use post::{FeedEntry, PostKind, PostPair};
pub use types::RewardOutcome;
