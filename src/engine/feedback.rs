//! User-facing copy for the simulated algorithm's feedback. The tone
//! shifts with the boost flag: praise for following the platform's
//! hashtag recommendations, a nudge otherwise.

use crate::domain::RewardOutcome;

use super::session::SessionState;

pub fn reach_message(outcome: &RewardOutcome) -> String {
    if outcome.boosted {
        format!(
            "Your post reached {}% of your followers! Good job using recommended hashtags!",
            outcome.reach
        )
    } else {
        format!(
            "Your post only reached {}% of your followers. \
             We encourage you to use recommended hashtags to reach a larger audience.",
            outcome.reach
        )
    }
}

pub fn engagement_message(state: &SessionState, boosted: bool) -> String {
    if boosted {
        format!(
            "Great job! Your engagement score increased to {:.1}/5. \
             Keep using recommended hashtags to boost engagement!",
            state.engagement_score
        )
    } else {
        format!(
            "You received a low engagement score of {:.1}/5. \
             Using the recommended hashtags may boost your engagement.",
            state.engagement_score
        )
    }
}

pub fn revenue_message(state: &SessionState, boosted: bool) -> String {
    if boosted {
        format!(
            "Awesome! You have earned ${:.2} in ad revenue thanks to your hashtag choices. Keep it up!",
            state.total_revenue
        )
    } else {
        format!(
            "You have earned ${:.2} in ad revenue. \
             You could use recommended hashtags to increase your earnings.",
            state.total_revenue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reach_message_reflects_boost() {
        let boosted = RewardOutcome {
            reach: 25,
            engagement_delta: 4.2,
            revenue_delta: 1.5,
            boosted: true,
        };
        assert!(reach_message(&boosted).contains("reached 25%"));
        assert!(reach_message(&boosted).contains("Good job"));

        let base = RewardOutcome {
            reach: 2,
            boosted: false,
            ..boosted
        };
        assert!(reach_message(&base).contains("only reached 2%"));
    }

    #[test]
    fn score_messages_format_totals() {
        let state = SessionState {
            engagement_score: 4.25,
            total_revenue: 3.456,
        };
        assert!(engagement_message(&state, true).contains("4.2/5"));
        assert!(revenue_message(&state, false).contains("$3.46"));
    }
}
