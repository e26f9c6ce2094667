//! Row to work item derivation
//!
//! Pure mapping from a [`FeatureRow`] to the work item that should be
//! created for it. Rows without a feature name or an effort code map to
//! nothing. The state and tag rules are ordered rule lists evaluated top
//! to bottom; the first match wins.

use crate::types::{FeatureRow, WorkItem, WorkItemState, WorkItemType};

/// Title prefix applied to every derived work item
pub const TITLE_PREFIX: &str = "[Draft->LAQS] ";

/// Tag carried by every derived work item
pub const BASE_TAG: &str = "draft->laqs";

/// Progress values meaning the work is finished (whole-string match)
const DONE_EXACT: &[&str] = &["done", "mostly done"];

/// Progress fragments meaning the work has started (substring match)
const ACTIVE_FRAGMENTS: &[&str] = &["in progress", "not done", "partial"];

/// Derive the work item for one row
///
/// Returns `None` when the row has no feature name or no effort code.
pub fn derive(row: &FeatureRow) -> Option<WorkItem> {
    let feature = row.feature.trim();
    if feature.is_empty() {
        return None;
    }

    let effort = row.effort.trim();
    if effort.is_empty() {
        return None;
    }

    Some(WorkItem {
        item_type: item_type_for_effort(effort),
        title: format!("{TITLE_PREFIX}{feature}"),
        state: state_from_progress(row.progress),
        tags: tags_for_row(row),
    })
}

/// Work item type for an effort code
///
/// "S" is small enough to land directly on the backlog; anything else
/// (including compound codes like "M (S)") becomes a feature.
pub fn item_type_for_effort(effort: &str) -> WorkItemType {
    if effort.eq_ignore_ascii_case("s") {
        WorkItemType::ProductBacklogItem
    } else {
        WorkItemType::Feature
    }
}

/// Infer the work item state from free-text progress
pub fn state_from_progress(progress: &str) -> WorkItemState {
    if progress.is_empty() {
        return WorkItemState::New;
    }

    let progress = progress.to_lowercase();
    if DONE_EXACT.contains(&progress.as_str()) {
        return WorkItemState::Done;
    }
    if ACTIVE_FRAGMENTS.iter().any(|f| progress.contains(f)) {
        return WorkItemState::Active;
    }
    WorkItemState::New
}

/// Tags for one row
///
/// The base tag always comes first; surface tags follow in table column
/// order for every marker cell that trims to exactly "+". Annotated
/// markers like "+AadUser" do not count as adoption.
pub fn tags_for_row(row: &FeatureRow) -> Vec<String> {
    let mut tags = vec![BASE_TAG.to_string()];

    if row.search_ui.trim() == "+" {
        tags.push("UI /search".to_string());
    }
    if row.dgrep_shim.trim() == "+" {
        tags.push("shim".to_string());
    }
    if row.activity_log.trim() == "+" {
        tags.push("AL".to_string());
    }

    tags
}
