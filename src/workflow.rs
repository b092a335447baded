use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::{
    db::pairs::PairStore,
    domain::{PostKind, PostPair, RewardOutcome},
    engine::{classifier, simulator, SessionState},
    feed::Feed,
    infrastructure::export::{export_pairs, ExportOutcome},
    sink::RemoteSink,
};

/// Where the workflow currently is in the submit/revise cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingRevision,
}

/// Input rejections surfaced to the user as warnings. None of these change
/// any state.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Please write something before posting!")]
    EmptyPost,
    #[error("Please revise your post before submitting!")]
    EmptyRevision,
    #[error("There is no original post waiting for a revision.")]
    MissingOriginal,
}

/// Everything the console needs to render one submission.
#[derive(Debug)]
pub struct SubmissionReport {
    pub outcome: RewardOutcome,
    /// Recommended hashtags found in the post.
    pub matched_tags: Vec<&'static str>,
    /// Hashtags present in the post that earned no boost.
    pub other_tags: Vec<String>,
    pub session: SessionState,
}

/// Owns the session metrics, the feed and the submit/revise state machine.
///
/// A remote sink failure aborts the whole submission: no reward is drawn,
/// nothing reaches the feed and no transient original is stored. The user
/// is told and may simply resubmit.
pub struct SubmissionWorkflow {
    store: PairStore,
    sink: Option<RemoteSink>,
    feed: Feed,
    session: SessionState,
    phase: Phase,
}

impl SubmissionWorkflow {
    pub fn new(store: PairStore, sink: Option<RemoteSink>) -> Self {
        Self {
            store,
            sink,
            feed: Feed::new(),
            session: SessionState::new(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Re-enters revision mode when a transient original survived the
    /// previous run. Returns the held original, if any.
    pub async fn resume(&mut self) -> Result<Option<String>> {
        let current = self.store.current().await?;
        if current.is_some() {
            self.phase = Phase::AwaitingRevision;
            tracing::info!(target: "workflow", "resuming pending revision from previous session");
        }
        Ok(current)
    }

    /// Runs one full submission cycle: mirror to the sink, classify,
    /// simulate the reward, update the session, show the post in the feed
    /// and hold it for revision.
    pub async fn submit_post(&mut self, content: &str) -> Result<SubmissionReport> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SubmissionError::EmptyPost.into());
        }

        if let Some(sink) = &self.sink {
            sink.publish(content, PostKind::Initial)
                .await
                .context("Failed to save post. Please try again.")?;
        }

        let matched_tags = classifier::matching_hashtags(content);
        let boosted = matched_tags.len() >= classifier::BOOST_THRESHOLD;
        let other_tags: Vec<String> = classifier::extract_hashtags(content)
            .into_iter()
            .filter(|tag| !matched_tags.contains(&tag.as_str()))
            .collect();

        let outcome = simulator::simulate(boosted);
        self.session.apply(&outcome);
        self.feed.push(content.to_string());
        self.store
            .set_current(content)
            .await
            .context("Failed to hold the post for revision.")?;
        self.phase = Phase::AwaitingRevision;

        tracing::info!(
            target: "workflow",
            boosted,
            reach = outcome.reach,
            matched = matched_tags.len(),
            "post submitted"
        );

        Ok(SubmissionReport {
            outcome,
            matched_tags,
            other_tags,
            session: self.session,
        })
    }

    /// Pairs the held original with the revised text. The pair is appended
    /// and the original cleared in one atomic store operation; on failure
    /// the revision stays pending so the user may retry.
    pub async fn submit_revision(&mut self, revised: &str) -> Result<PostPair> {
        let revised = revised.trim();
        if revised.is_empty() {
            return Err(SubmissionError::EmptyRevision.into());
        }

        let original = self
            .store
            .current()
            .await?
            .filter(|original| !original.trim().is_empty())
            .ok_or(SubmissionError::MissingOriginal)?;

        if let Some(sink) = &self.sink {
            sink.publish(revised, PostKind::Revised)
                .await
                .context("Failed to save revised post. Please try again.")?;
        }

        let pair = self.store.save_pair(&original, revised).await?;
        self.phase = Phase::Idle;

        tracing::info!(target: "workflow", id = %pair.id, "post pair saved");
        Ok(pair)
    }

    /// Abandons the pending revision. The held original intentionally
    /// stays in the store until the next post overwrites it.
    pub fn skip_revision(&mut self) {
        self.phase = Phase::Idle;
    }

    pub async fn export(&self, export_dir: &Path) -> Result<ExportOutcome> {
        let pairs = self.store.pairs().await?;
        export_pairs(&pairs, export_dir)
    }
}
