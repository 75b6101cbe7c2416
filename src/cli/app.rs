//! CLI definition and entry point

use clap::Parser;

use noticewatch::adapters::{HttpClient, JsonSeenStore, ThreadSleeper};
use noticewatch::{Config, Pipeline};

/// noticewatch - forward new notice board posts to a webhook
#[derive(Parser, Debug)]
#[command(
    name = "noticewatch",
    version,
    about = "Forward new notice board posts to a chat webhook",
    long_about = "Scrapes the notice board listing, posts every notice not seen in an\n\
                  earlier run to the webhook, and records what was delivered.\n\n\
                  Configured through the environment:\n  \
                  DISCORD_WEBHOOK_URL  webhook to post to (required)\n  \
                  FORCE_SEND_TEST      post a test message first (1/true/yes/on)\n  \
                  NOTICE_LIST_URL      listing URL override\n  \
                  NOTICE_STATE_PATH    seen-set file (default state.json)\n  \
                  RUST_LOG             log filter (default info)"
)]
pub struct Cli {}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let http = HttpClient::new(&config)?;
    let store = JsonSeenStore::new(&config.state_path);

    let summary = Pipeline::new(&config, &http, &http, &store, &ThreadSleeper).run()?;
    summary.render();
    Ok(())
}
