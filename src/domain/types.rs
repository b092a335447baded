/// Result of one simulated algorithm pass over a submitted post.
#[derive(Debug, Clone, Copy)]
pub struct RewardOutcome {
    /// Percentage of followers notionally shown the post.
    pub reach: u32,
    pub engagement_delta: f64,
    pub revenue_delta: f64,
    /// Whether the post used enough recommended hashtags to get boosted.
    pub boosted: bool,
}
