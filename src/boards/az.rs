//! az CLI implementation of [`BoardsService`]

use crate::boards::BoardsService;
use crate::error::{Error, Result};
use crate::types::{BoardsConfig, CreatedWorkItem, WorkItem};
use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Azure Boards service backed by the `az` CLI
pub struct AzBoardsCli {
    config: BoardsConfig,
}

/// The slice of `az boards work-item create` output we consume
#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: u64,
    #[serde(default)]
    url: Option<String>,
}

impl AzBoardsCli {
    /// Create a service for the given boards configuration
    pub const fn new(config: BoardsConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl BoardsService for AzBoardsCli {
    async fn check_auth(&self) -> Result<bool> {
        debug!("checking az session");
        let output = Command::new("az")
            .args(["account", "show", "--output", "none"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await?;
        Ok(output.status.success())
    }

    async fn login(&self) -> Result<()> {
        // Inherited stdio: az owns the browser/device-code interaction.
        let status = Command::new("az").arg("login").status().await?;
        debug!(success = status.success(), "az login finished");
        Ok(())
    }

    async fn create_work_item(&self, item: &WorkItem) -> Result<CreatedWorkItem> {
        debug!(title = %item.title, "creating work item");
        let output = Command::new("az")
            .args(["boards", "work-item", "create"])
            .args(["--org", self.config.organization.as_str()])
            .args(["--project", self.config.project.as_str()])
            .args(["--type", item.item_type.as_str()])
            .args(["--title", item.title.as_str()])
            .arg("--fields")
            .arg(format!("System.AreaPath={}", self.config.area_path))
            .arg(format!("System.IterationPath={}", self.config.iteration_path))
            .arg(format!("System.Tags={}", item.joined_tags()))
            .arg(format!("System.State={}", item.state.as_str()))
            .args(["--output", "json"])
            .output()
            .await?;

        if !output.status.success() {
            return Err(Error::Boards(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let response: CreateResponse = serde_json::from_slice(&output.stdout)?;
        debug!(id = response.id, "work item created");
        Ok(CreatedWorkItem {
            id: response.id,
            url: response.url,
        })
    }

    fn config(&self) -> &BoardsConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_parses_az_output() {
        let body = r#"{"id": 4211, "url": "https://msazure.visualstudio.com/_apis/wit/workItems/4211", "fields": {"System.State": "New"}}"#;
        let response: CreateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.id, 4211);
        assert!(response.url.as_deref().unwrap().ends_with("4211"));
    }

    #[test]
    fn test_create_response_tolerates_missing_url() {
        let response: CreateResponse = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(response.id, 7);
        assert!(response.url.is_none());
    }
}
