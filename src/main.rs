mod app;
mod config;
mod console;
mod db;
mod domain;
mod engine;
mod feed;
mod infrastructure;
mod sink;
mod workflow;

use anyhow::Result;
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let app = app::AlgoFeedApp::initialize(config, paths).await?;
    app.run().await
}
