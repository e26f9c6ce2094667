//! Phase 2: submission execution
//!
//! Walks the plan strictly in order. Dry runs preview every item and
//! never touch Azure Boards; live runs create items one at a time, and a
//! failed creation is reported without stopping the remaining items.

use crate::boards::BoardsService;
use crate::error::Result;
use crate::submit::{Phase, ProgressCallback, SubmissionPlan};
use crate::types::{BoardsConfig, CreatedWorkItem, WorkItem};
use std::fmt::Write;

/// Result of submission execution
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// Work items that were created (live runs only)
    pub created: Vec<CreatedWorkItem>,
    /// Number of items previewed (dry runs only)
    pub previewed: usize,
    /// Errors encountered, one per failed item (non-fatal)
    pub errors: Vec<String>,
}

/// Execute a submission plan
pub async fn execute_submission(
    plan: &SubmissionPlan,
    service: &dyn BoardsService,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<SubmissionResult> {
    let mut result = SubmissionResult {
        created: Vec::new(),
        previewed: 0,
        errors: Vec::new(),
    };

    progress.on_phase(Phase::Submitting).await;

    if plan.items.is_empty() {
        progress.on_message("Nothing to submit").await;
    }

    for item in &plan.items {
        if dry_run {
            progress.on_item_preview(item, service.config()).await;
            result.previewed += 1;
            continue;
        }

        progress.on_item_submit(item).await;
        match service.create_work_item(item).await {
            Ok(created) => {
                progress.on_item_created(item, &created).await;
                result.created.push(created);
            }
            Err(e) => {
                // One bad row must not block the rest of the table.
                result.errors.push(format!("{}: {e}", item.title));
                progress.on_error(&e).await;
            }
        }
    }

    progress.on_phase(Phase::Complete).await;

    Ok(result)
}

/// Render the dry-run preview block for a work item
pub fn render_preview(item: &WorkItem, config: &BoardsConfig) -> String {
    let mut out = format!("Would create {}:\n", item.item_type);
    let _ = writeln!(out, "  Title: {}", item.title);
    let _ = writeln!(out, "  State: {}", item.state);
    let _ = writeln!(out, "  Area Path: {}", config.area_path);
    let _ = writeln!(out, "  Iteration Path: {}", config.iteration_path);
    let _ = write!(out, "  Tags: {}", item.joined_tags());
    out
}

/// Render the live report line for a created work item
pub fn report_line(item: &WorkItem, created: &CreatedWorkItem) -> String {
    format!("Created {} #{}: {}", item.item_type, created.id, item.title)
}
