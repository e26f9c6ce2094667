//! Authentication gate
//!
//! Runs once, before any row is processed. A missing session triggers a
//! single interactive login; if the session is still missing afterwards
//! the whole run is abandoned.

use crate::boards::BoardsService;
use crate::error::{Error, Result};

/// Ensure the operator holds a valid Azure session
///
/// Triggers the interactive login flow at most once. Returns
/// [`Error::Auth`] when the re-check after login still fails.
pub async fn ensure_authenticated(service: &dyn BoardsService) -> Result<()> {
    if service.check_auth().await? {
        return Ok(());
    }

    println!("Not authenticated. Running az login...");
    service.login().await?;

    if service.check_auth().await? {
        return Ok(());
    }

    Err(Error::Auth(
        "az login did not establish a session. Please try again.".to_string(),
    ))
}
