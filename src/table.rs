//! Static feature table
//!
//! The first table of the query pipeline components document, baked in as
//! data. The logical model components table is tracked separately and is
//! not included here.

use crate::types::FeatureRow;

/// Query pipeline migration rows, in document order
pub const QUERY_PIPELINE_ROWS: &[FeatureRow] = &[
    FeatureRow {
        feature: "Parse request headers (prefer, azure region,  app, etc.)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "Mostly done",
    },
    FeatureRow {
        feature: "Set request options",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Extract workspace info",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "Done",
    },
    FeatureRow {
        feature: "Response compression (should debate whether this is needed – can be handled by nginx – even for Draft)",
        search_ui: "",
        dgrep_shim: "",
        activity_log: "",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Audit middleware – query audit log",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "M",
        progress: "In progress",
    },
    FeatureRow {
        feature: "SLO metrics",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Billing aux",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Billing basic",
        search_ui: "?",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "M",
        progress: "",
    },
    FeatureRow {
        feature: "Authentication strategies (AppInsightsAad / AadUser / ApiKey  / AMEAad / ARM)",
        search_ui: "+AadUser",
        dgrep_shim: "AadUser (for testing)\n+AMEAad",
        activity_log: "AadUser (for testing)\n+AMEAad",
        effort: "S",
        progress: "Partial (MISE/ARM configuration exists)",
    },
    FeatureRow {
        feature: "Response cache middleware (built in ASP.NET)",
        search_ui: "-",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Concurrency middleware (defaults + overrides in runtime config)",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "+ (run in AL service, not in DP)",
        effort: "M",
        progress: "Partial (API done, no middleware or configuration)",
    },
    FeatureRow {
        feature: "Rate limiting middleware (ATS?)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "",
        effort: "M",
        progress: "",
    },
    FeatureRow {
        feature: "Extract resources (workspace info: SingleWorkspace / MultiWorkspace / MultiApp)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "M",
        progress: "",
    },
    FeatureRow {
        feature: "Network access validation (private link / NSP)",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "M",
        progress: "In progress",
    },
    FeatureRow {
        feature: "Query resource limits (resources / applications / workspaces)",
        search_ui: "",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "",
        progress: "",
    },
    FeatureRow {
        feature: "Workspace access checks – determines which authz handler to use",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Extract Kusto query info & set query options",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Set traffic category",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "Done",
    },
    FeatureRow {
        feature: "Block blacklisted workspace IDs / alert rule IDs",
        search_ui: "-",
        dgrep_shim: "-",
        activity_log: "",
        effort: "",
        progress: "",
    },
    FeatureRow {
        feature: "Authorize user – validate",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Parse and validate query",
        search_ui: "+",
        dgrep_shim: "+/-",
        activity_log: "-",
        effort: "L",
        progress: "In progress",
    },
    FeatureRow {
        feature: "Build workspace metadata (and filter by solutions)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "-",
        effort: "M",
        progress: "In progress",
    },
    FeatureRow {
        feature: "Read input metadata (system functions, resource type, etc.)",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "In progress",
    },
    FeatureRow {
        feature: "Build LACP (DAS) metadata (saved searches)",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Read App Insights saved functions",
        search_ui: "-",
        dgrep_shim: "-",
        activity_log: "",
        effort: "",
        progress: "",
    },
    FeatureRow {
        feature: "KCM placement",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "Done",
    },
    FeatureRow {
        feature: "BPS placement",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "-",
        effort: "S",
        progress: "Done",
    },
    FeatureRow {
        feature: "Process placement permissions (full table access / conditional)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "M",
        progress: "",
    },
    FeatureRow {
        feature: "Remove irrelevant shards from placement result (override KCM/BPS)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Generate LM (see below)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "L",
        progress: "In progress",
    },
    FeatureRow {
        feature: "Find optimal placement (+ noop clusters)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "Done",
    },
    FeatureRow {
        feature: "Resource governor (see below)",
        search_ui: "+(Start with runaway query)",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "M (S)",
        progress: "",
    },
    FeatureRow {
        feature: "Execute query",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "L",
        progress: "Mostly done",
    },
    FeatureRow {
        feature: "Query retries (weak consistency, another Noop, etc.)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Cancel query in Kusto (requires additional .cancel query)",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Query forking to follower + cluster level metrics",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "",
        progress: "",
    },
    FeatureRow {
        feature: "Log permissions",
        search_ui: "-",
        dgrep_shim: "-",
        activity_log: "",
        effort: "",
        progress: "",
    },
    FeatureRow {
        feature: "Write query results to response (+ dataSources)",
        search_ui: "+",
        dgrep_shim: "",
        activity_log: "",
        effort: "M",
        progress: "Mostly done",
    },
    FeatureRow {
        feature: "Query side by side execution",
        search_ui: "-",
        dgrep_shim: "-",
        activity_log: "",
        effort: "",
        progress: "",
    },
    FeatureRow {
        feature: "AGC deployment",
        search_ui: "",
        dgrep_shim: "",
        activity_log: "",
        effort: "M",
        progress: "",
    },
    FeatureRow {
        feature: "Watchlist support",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "M",
        progress: "",
    },
    FeatureRow {
        feature: "Handle partial Kusto errors",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "render response support",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "enhancedStats response",
        search_ui: "+",
        dgrep_shim: "-",
        activity_log: "-",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "x-ms-app to telemetry and Kusto client",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "S",
        progress: "",
    },
    FeatureRow {
        feature: "Side-by-side",
        search_ui: "+",
        dgrep_shim: "+",
        activity_log: "+",
        effort: "M",
        progress: "",
    },
];
