//! Azure Boards access
//!
//! Wraps the `az` CLI behind a service trait so the gate and the
//! submission flow can be exercised without a live Azure session.

mod az;

pub use az::AzBoardsCli;

use crate::error::Result;
use crate::types::{BoardsConfig, CreatedWorkItem, WorkItem};
use async_trait::async_trait;

/// Azure Boards operations used by the gate and the submitter
#[async_trait]
pub trait BoardsService: Send + Sync {
    /// Whether the operator currently holds a valid Azure session
    async fn check_auth(&self) -> Result<bool>;

    /// Run the interactive login flow
    ///
    /// Blocks on operator input. The login's own outcome is not
    /// consumed; callers re-check [`Self::check_auth`] afterwards.
    async fn login(&self) -> Result<()>;

    /// Create a work item, returning the tracker-assigned id
    async fn create_work_item(&self, item: &WorkItem) -> Result<CreatedWorkItem>;

    /// Boards configuration this service submits against
    fn config(&self) -> &BoardsConfig;
}
