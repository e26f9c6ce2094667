//! Phase 1: submission planning
//!
//! Derives the work items a run will submit. Rows are mapped
//! independently and keep their table order.

use crate::mapper;
use crate::types::{FeatureRow, WorkItem};

/// Submission plan
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    /// Work items to submit, in table order
    pub items: Vec<WorkItem>,
    /// Rows that produced no work item (missing feature or effort)
    pub skipped_rows: usize,
}

/// Derive the submission plan for a set of table rows
pub fn create_submission_plan(rows: &[FeatureRow]) -> SubmissionPlan {
    let mut items = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;

    for row in rows {
        match mapper::derive(row) {
            Some(item) => items.push(item),
            None => skipped_rows += 1,
        }
    }

    SubmissionPlan {
        items,
        skipped_rows,
    }
}
