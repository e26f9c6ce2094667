//! Test data factories for laqs-backlog types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use laqs_backlog::types::{BoardsConfig, FeatureRow, WorkItem, WorkItemState, WorkItemType};

/// Create a row with default markers and the given core fields
pub const fn make_row(
    feature: &'static str,
    effort: &'static str,
    progress: &'static str,
) -> FeatureRow {
    FeatureRow {
        feature,
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort,
        progress,
    }
}

/// Create a row adopted by every consuming surface
pub const fn make_row_all_surfaces(feature: &'static str, effort: &'static str) -> FeatureRow {
    FeatureRow {
        feature,
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort,
        progress: "",
    }
}

/// Create a row the mapper must skip (no effort code)
pub const fn make_skipped_row(feature: &'static str) -> FeatureRow {
    FeatureRow {
        feature,
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "",
        progress: "",
    }
}

/// Create a work item with default values
pub fn make_item(title: &str) -> WorkItem {
    WorkItem {
        item_type: WorkItemType::ProductBacklogItem,
        title: title.to_string(),
        state: WorkItemState::New,
        tags: vec!["draft->laqs".to_string()],
    }
}

/// Boards configuration pointing at a test project
pub fn test_config() -> BoardsConfig {
    BoardsConfig {
        organization: "https://testorg.visualstudio.com".to_string(),
        project: "TestProject".to_string(),
        area_path: r"TestProject\Area".to_string(),
        iteration_path: r"TestProject\Sprint 1".to_string(),
    }
}
