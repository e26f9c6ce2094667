//! Core types for laqs-backlog

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the migration tracking table
///
/// Fields hold the table cells verbatim; absence and empty string are the
/// same thing. Marker cells carry "+", "-", "?", or free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRow {
    /// Feature name
    pub feature: &'static str,
    /// Adoption marker for the /search-from-UI surface
    pub search_ui: &'static str,
    /// Adoption marker for the DGrep shim surface
    pub dgrep_shim: &'static str,
    /// Adoption marker for the Activity Log /query surface
    pub activity_log: &'static str,
    /// Effort size code (S/M/L, possibly compound)
    pub effort: &'static str,
    /// Free-text progress description
    pub progress: &'static str,
}

/// Azure Boards work item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkItemType {
    /// Small, directly actionable item
    #[serde(rename = "Product Backlog Item")]
    ProductBacklogItem,
    /// Larger item that will be broken down later
    Feature,
}

impl WorkItemType {
    /// Wire name used by Azure Boards
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductBacklogItem => "Product Backlog Item",
            Self::Feature => "Feature",
        }
    }
}

impl fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Azure Boards work item state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkItemState {
    /// Not started
    New,
    /// Work has started
    Active,
    /// Finished (or close enough to count)
    Done,
}

impl WorkItemState {
    /// Wire name used by Azure Boards
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Active => "Active",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for WorkItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work item derived from one table row, ready for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Work item type, selected by the effort code
    pub item_type: WorkItemType,
    /// Prefixed title
    pub title: String,
    /// State inferred from the progress text
    pub state: WorkItemState,
    /// Tags in derivation order (base tag first)
    pub tags: Vec<String>,
}

impl WorkItem {
    /// Tags joined the way Azure Boards expects them
    pub fn joined_tags(&self) -> String {
        self.tags.join(";")
    }
}

/// A work item as reported back by the tracker after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedWorkItem {
    /// Assigned work item id
    pub id: u64,
    /// Work item URL, when the tracker returns one
    pub url: Option<String>,
}

/// Boards configuration, constant for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardsConfig {
    /// Organization URL
    pub organization: String,
    /// Project name
    pub project: String,
    /// Area path every created item lands under
    pub area_path: String,
    /// Iteration path every created item lands under
    pub iteration_path: String,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            organization: "https://msazure.visualstudio.com".to_string(),
            project: "One".to_string(),
            area_path: r"One\LogAnalytics\QueryService".to_string(),
            iteration_path: r"One\Bromine\CY25Q3\Monthly\07 Jul (Jun 29 - Jul 26)".to_string(),
        }
    }
}
