use std::ops::{Range, RangeInclusive};

use rand::Rng;

use crate::domain::RewardOutcome;

/// Reach percentage for posts with enough recommended hashtags.
const BOOSTED_REACH: RangeInclusive<u32> = 1..=30;
/// Reach percentage for everything else.
const BASE_REACH: RangeInclusive<u32> = 1..=5;

const BOOSTED_ENGAGEMENT: Range<f64> = 4.0..5.0;
const BASE_ENGAGEMENT: Range<f64> = 1.0..1.3;

/// Ad revenue is paid from the same range whether or not the post was
/// boosted. The platform being simulated never differentiated here.
const REVENUE_RANGE: Range<f64> = 1.0..2.0;

/// Draws one round of simulated algorithmic reward for a post.
pub fn simulate(boosted: bool) -> RewardOutcome {
    let mut rng = rand::thread_rng();
    let reach = if boosted {
        rng.gen_range(BOOSTED_REACH)
    } else {
        rng.gen_range(BASE_REACH)
    };
    let engagement_delta = if boosted {
        rng.gen_range(BOOSTED_ENGAGEMENT)
    } else {
        rng.gen_range(BASE_ENGAGEMENT)
    };
    let revenue_delta = rng.gen_range(REVENUE_RANGE);

    RewardOutcome {
        reach,
        engagement_delta,
        revenue_delta,
        boosted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosted_draws_stay_in_bounds() {
        for _ in 0..500 {
            let outcome = simulate(true);
            assert!(outcome.boosted);
            assert!((1..=30).contains(&outcome.reach));
            assert!((4.0..5.0).contains(&outcome.engagement_delta));
            assert!((1.0..2.0).contains(&outcome.revenue_delta));
        }
    }

    #[test]
    fn base_draws_stay_in_bounds() {
        for _ in 0..500 {
            let outcome = simulate(false);
            assert!(!outcome.boosted);
            assert!((1..=5).contains(&outcome.reach));
            assert!((1.0..1.3).contains(&outcome.engagement_delta));
            assert!((1.0..2.0).contains(&outcome.revenue_delta));
        }
    }
}
