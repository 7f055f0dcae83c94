//! Portfolio Page - one-shot renderer
//!
//! Mounts a page session against the live resources, waits for both
//! timelines to settle and prints the HTML document to stdout.
//!
//! Usage:
//!   cargo run --bin portfolio_page > index.html

use portfolio_page::{render_page, PageSession, RemoteListClient, SiteConfig};

use eyre::Result;
use std::io::Write;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure HTML
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = SiteConfig::default();
    let client = RemoteListClient::new();

    let mut session = PageSession::mount(&config, &client);
    session.settle_all().await;

    let snapshot = session.snapshot();
    session.unmount();

    info!(
        work_experience = snapshot.work_experience.items.len(),
        volunteering = snapshot.volunteering.items.len(),
        "📄 Page rendered"
    );

    let html = render_page(&config.profile, &snapshot);
    std::io::stdout().lock().write_all(html.as_bytes())?;

    Ok(())
}
