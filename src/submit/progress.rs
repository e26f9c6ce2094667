//! Progress callback trait for interface-agnostic updates
//!
//! Lets the submission engine report to whatever front end is driving
//! it without knowing how reports are rendered.

use crate::error::Error;
use crate::types::{BoardsConfig, CreatedWorkItem, WorkItem};
use async_trait::async_trait;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Creating work items in Azure Boards
    Submitting,
    /// Submission complete
    Complete,
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called with the preview for a work item (dry runs only)
    async fn on_item_preview(&self, item: &WorkItem, config: &BoardsConfig);

    /// Called just before a work item is submitted (live runs only)
    async fn on_item_submit(&self, item: &WorkItem);

    /// Called when a work item has been created
    async fn on_item_created(&self, item: &WorkItem, created: &CreatedWorkItem);

    /// Called when a creation fails (non-fatal)
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_item_preview(&self, _item: &WorkItem, _config: &BoardsConfig) {}
    async fn on_item_submit(&self, _item: &WorkItem) {}
    async fn on_item_created(&self, _item: &WorkItem, _created: &CreatedWorkItem) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
