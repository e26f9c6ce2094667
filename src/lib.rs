//! laqs-backlog - Azure Boards seeding for the Draft->LAQS migration
//!
//! Derives work items from the static query-pipeline tracking table and
//! creates them through the `az` CLI, or previews them in dry-run mode.

pub mod auth;
pub mod boards;
pub mod error;
pub mod mapper;
pub mod submit;
pub mod table;
pub mod types;
