//! Two-phase submission engine
//!
//! Handles the workflow of turning table rows into Azure Boards items:
//! 1. Planning - derive the work items to submit
//! 2. Execution - preview them (dry run) or create them for real

mod execute;
mod plan;
mod progress;

pub use execute::{execute_submission, render_preview, report_line, SubmissionResult};
pub use plan::{create_submission_plan, SubmissionPlan};
pub use progress::{NoopProgress, Phase, ProgressCallback};
