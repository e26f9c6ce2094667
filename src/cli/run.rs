//! Create command - preview or create a work item for every table row

use laqs_backlog::auth::ensure_authenticated;
use laqs_backlog::boards::AzBoardsCli;
use laqs_backlog::error::Result;
use laqs_backlog::submit::{create_submission_plan, execute_submission};
use laqs_backlog::table::QUERY_PIPELINE_ROWS;
use laqs_backlog::types::BoardsConfig;

use crate::cli::progress::CliProgress;
use crate::cli::style::{check, cross, divider, Stylize};
use anstream::{eprintln, println};

/// Run the create flow over the full table
pub async fn run_create(apply: bool) -> Result<()> {
    let service = AzBoardsCli::new(BoardsConfig::default());

    ensure_authenticated(&service).await?;

    let dry_run = !apply;
    if dry_run {
        println!("{}", "DRY RUN MODE - No items will be created".emphasis());
        println!("Use {} to create actual work items", "--apply".accent());
        println!("{}", divider().muted());
    }

    let plan = create_submission_plan(QUERY_PIPELINE_ROWS);
    let progress = CliProgress::new(dry_run);
    let result = execute_submission(&plan, &service, &progress, dry_run).await?;

    // Summary
    println!();
    if dry_run {
        println!(
            "{} {} work item{} previewed, {} row{} skipped",
            check(),
            result.previewed,
            if result.previewed == 1 { "" } else { "s" },
            plan.skipped_rows,
            if plan.skipped_rows == 1 { "" } else { "s" },
        );
    } else if result.errors.is_empty() {
        println!(
            "{} Created {} work item{}",
            check(),
            result.created.len(),
            if result.created.len() == 1 { "" } else { "s" },
        );
    } else {
        eprintln!(
            "{} {} of {} work item{} failed",
            cross(),
            result.errors.len(),
            plan.items.len(),
            if plan.items.len() == 1 { "" } else { "s" },
        );
    }

    Ok(())
}
