use crate::{
    engine::{feedback, SessionState},
    feed::{format_posted_at, Feed},
    workflow::{Phase, SubmissionReport},
};

pub fn print_banner() {
    println!("algofeed v{} - a social media algorithm simulator", env!("CARGO_PKG_VERSION"));
    println!("Write a post and see what the algorithm makes of it.\n");
}

pub fn print_help(phase: Phase) {
    match phase {
        Phase::Idle => println!("Type a post and press enter to submit it."),
        Phase::AwaitingRevision => {
            println!("Type a revised version of your post, or /skip to leave it as is.")
        }
    }
    println!("Commands: /feed  /score  /export  /skip  /help  /quit");
}

pub fn print_report(report: &SubmissionReport) {
    println!("{}", feedback::reach_message(&report.outcome));
    if !report.matched_tags.is_empty() {
        println!(
            "Recommended hashtags recognized: {}",
            report.matched_tags.join(", ")
        );
    }
    if !report.other_tags.is_empty() {
        println!(
            "Hashtags with no boost effect: {}",
            report.other_tags.join(", ")
        );
    }
    println!(
        "{}",
        feedback::engagement_message(&report.session, report.outcome.boosted)
    );
    println!(
        "{}",
        feedback::revenue_message(&report.session, report.outcome.boosted)
    );
}

pub fn print_feed(feed: &Feed, timezone: &str) {
    if feed.is_empty() {
        println!("The feed is empty. Post something!");
        return;
    }
    for entry in feed.entries() {
        println!("[{}] {}", format_posted_at(entry, timezone), entry.content);
    }
}

pub fn print_score(session: &SessionState) {
    println!(
        "Engagement score: {:.1}/5 | Ad revenue: ${:.2}",
        session.engagement_score, session.total_revenue
    );
}

pub fn print_warning(err: &anyhow::Error) {
    println!("! {err}");
}
