//! CLI progress callback with styled output and a spinner per creation

use crate::cli::style::{divider, hyperlink_url, spinner_style, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use laqs_backlog::error::Error;
use laqs_backlog::submit::{render_preview, report_line, Phase, ProgressCallback};
use laqs_backlog::types::{BoardsConfig, CreatedWorkItem, WorkItem};
use std::sync::Mutex;
use std::time::Duration;

/// Progress callback that prints per-row report blocks to stdout
///
/// Dry runs print preview blocks; live runs show a spinner while each
/// `az` call is in flight and print the report line once it lands.
pub struct CliProgress {
    dry_run: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a callback for the given run mode
    pub const fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        if phase == Phase::Submitting && !self.dry_run {
            println!("{}", "Creating work items in Azure Boards...".emphasis());
        }
    }

    async fn on_item_preview(&self, item: &WorkItem, config: &BoardsConfig) {
        println!("{}", render_preview(item, config));
        println!("{}", divider().muted());
    }

    async fn on_item_submit(&self, item: &WorkItem) {
        let spinner = ProgressBar::new_spinner().with_style(spinner_style());
        spinner.set_message(format!("Creating {}...", item.title));
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(spinner);
        }
    }

    async fn on_item_created(&self, item: &WorkItem, created: &CreatedWorkItem) {
        self.clear_spinner();
        println!("{}", report_line(item, created));
        if let Some(url) = &created.url {
            println!("  {}", hyperlink_url(Stream::Stdout, url).muted());
        }
        println!("{}", divider().muted());
    }

    async fn on_error(&self, error: &Error) {
        self.clear_spinner();
        eprintln!("{}: {}", "error".error(), error);
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
