use std::io::{self, Write};

use anyhow::Result;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    config::AppConfig,
    console::{parse_line, render, Command},
    db::{self, pairs::PairStore},
    infrastructure::{directories::ResolvedPaths, export::ExportOutcome},
    sink::RemoteSink,
    workflow::{Phase, SubmissionWorkflow},
};

pub struct AlgoFeedApp {
    config: AppConfig,
    paths: ResolvedPaths,
    store: PairStore,
    workflow: SubmissionWorkflow,
}

impl AlgoFeedApp {
    pub async fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let pool = db::init_pool(&paths.db_path).await?;
        let store = PairStore::new(pool);

        let http_client = Client::builder()
            .user_agent(format!("algofeed/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        let sink = RemoteSink::from_config(http_client, &config.sink);
        if sink.is_none() {
            tracing::info!(target: "sink", "no endpoint configured; remote mirroring disabled");
        }

        let workflow = SubmissionWorkflow::new(store.clone(), sink);

        Ok(Self {
            config,
            paths,
            store,
            workflow,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("algofeed session started");
        render::print_banner();

        if let Some(original) = self.workflow.resume().await? {
            println!("You have a post waiting for revision from last time:");
            println!("  {original}");
        }
        render::print_help(self.workflow.phase());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.print_prompt()?;
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    tracing::info!("interrupt received");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if !self.handle_line(&line).await {
                                break;
                            }
                        }
                        None => break,
                    }
                }
            }
        }

        self.store.close().await;
        tracing::info!("session ended");
        Ok(())
    }

    fn print_prompt(&self) -> Result<()> {
        let prompt = match self.workflow.phase() {
            Phase::Idle => "post> ",
            Phase::AwaitingRevision => "revise> ",
        };
        print!("{prompt}");
        io::stdout().flush()?;
        Ok(())
    }

    /// Returns false when the session should end.
    async fn handle_line(&mut self, line: &str) -> bool {
        match parse_line(line, self.workflow.phase()) {
            Command::SubmitPost(content) => match self.workflow.submit_post(&content).await {
                Ok(report) => {
                    render::print_report(&report);
                    println!("Revise your post below, or /skip to keep it as is.");
                }
                Err(err) => {
                    tracing::warn!(target: "workflow", error = %err, "post submission failed");
                    render::print_warning(&err);
                }
            },
            Command::SubmitRevision(content) => {
                match self.workflow.submit_revision(&content).await {
                    Ok(pair) => println!("Revised post saved successfully! (id {})", pair.id),
                    Err(err) => {
                        tracing::warn!(target: "workflow", error = %err, "revision failed");
                        render::print_warning(&err);
                    }
                }
            }
            Command::SkipRevision => {
                if self.workflow.phase() == Phase::AwaitingRevision {
                    self.workflow.skip_revision();
                    println!("Keeping the post as submitted.");
                } else {
                    println!("Nothing to skip.");
                }
            }
            Command::ShowFeed => render::print_feed(self.workflow.feed(), &self.config.timezone),
            Command::ShowScore => render::print_score(&self.workflow.session()),
            Command::Export => match self.workflow.export(&self.paths.export_dir).await {
                Ok(ExportOutcome::Written(path)) => {
                    println!("Post history exported to {}", path.display());
                }
                Ok(ExportOutcome::Empty) => {
                    println!("Nothing to export yet. Save a revised post first.");
                }
                Err(err) => {
                    tracing::warn!(target: "store", error = %err, "export failed");
                    render::print_warning(&err);
                }
            },
            Command::Help => render::print_help(self.workflow.phase()),
            Command::Blank => match self.workflow.phase() {
                Phase::Idle => println!("Please write something before posting!"),
                Phase::AwaitingRevision => {
                    println!("Please revise your post before submitting!")
                }
            },
            Command::Quit => return false,
        }
        true
    }
}
