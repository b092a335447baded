use once_cell::sync::Lazy;
use regex::Regex;

/// The 17 hashtags the simulated platform rewards.
pub const RECOMMENDED_HASHTAGS: [&str; 17] = [
    "#livingmybestlife",
    "#hustleculture",
    "#riseandgrind",
    "#nofilter",
    "#selfmade",
    "#goodvibesonly",
    "#goals",
    "#influencerlife",
    "#grateful",
    "#workhardplayhard",
    "#fitfam",
    "#bodygoals",
    "#successmindset",
    "#girlboss",
    "#bossbabe",
    "#luxurylife",
    "#adulting",
];

/// Distinct recommended hashtags required before a post gets boosted.
pub const BOOST_THRESHOLD: usize = 3;

static HASHTAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("valid hashtag regex"));

/// Distinct recommended hashtags present in `content`, in set order.
/// Case-sensitive substring match; repeated occurrences of the same tag
/// count once.
pub fn matching_hashtags(content: &str) -> Vec<&'static str> {
    RECOMMENDED_HASHTAGS
        .iter()
        .copied()
        .filter(|tag| content.contains(tag))
        .collect()
}

pub fn uses_recommended_hashtags(content: &str) -> bool {
    matching_hashtags(content).len() >= BOOST_THRESHOLD
}

/// Every `#` token in the content, recommended or not. Used to tell the
/// user which of their tags the platform recognized.
pub fn extract_hashtags(content: &str) -> Vec<String> {
    HASHTAG_REGEX
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_distinct_tags_trigger_boost() {
        let content = "Great day! #goals #hustleculture #selfmade";
        assert_eq!(
            matching_hashtags(content),
            vec!["#hustleculture", "#selfmade", "#goals"]
        );
        assert!(uses_recommended_hashtags(content));
    }

    #[test]
    fn two_tags_are_not_enough() {
        assert!(!uses_recommended_hashtags("morning run #fitfam #grateful"));
    }

    #[test]
    fn plain_text_is_not_boosted() {
        assert!(!uses_recommended_hashtags("just a normal day"));
        assert!(!uses_recommended_hashtags(""));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(matching_hashtags("#Goals #HustleCulture #SelfMade").is_empty());
    }

    #[test]
    fn repeated_tag_counts_once() {
        assert!(!uses_recommended_hashtags("#goals #goals #goals"));
    }

    #[test]
    fn extract_hashtags_finds_unrecognized_tags_too() {
        let tags = extract_hashtags("sunset #goals and #mycat, no filter");
        assert_eq!(tags, vec!["#goals".to_string(), "#mycat".to_string()]);
    }
}
