//! Mock boards service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use laqs_backlog::boards::BoardsService;
use laqs_backlog::error::{Error, Result};
use laqs_backlog::types::{BoardsConfig, CreatedWorkItem, WorkItem};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Call record for `create_work_item`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCall {
    pub item_type: String,
    pub title: String,
    pub state: String,
    pub tags: String,
}

/// Simple mock boards service for testing
///
/// Features:
/// - Auto-incrementing work item ids
/// - Call tracking for verification
/// - Scripted authentication state and login outcome
/// - Per-title error injection for failure path testing
pub struct MockBoardsService {
    config: BoardsConfig,
    next_id: AtomicU64,
    authenticated: Mutex<bool>,
    login_grants_session: bool,
    // Call tracking
    check_auth_calls: AtomicUsize,
    login_calls: AtomicUsize,
    create_calls: Mutex<Vec<CreateCall>>,
    // Error injection
    error_on_title: Mutex<HashMap<String, String>>,
}

impl MockBoardsService {
    /// Create an authenticated mock with the given config
    pub fn with_config(config: BoardsConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(1),
            authenticated: Mutex::new(true),
            login_grants_session: true,
            check_auth_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            create_calls: Mutex::new(Vec::new()),
            error_on_title: Mutex::new(HashMap::new()),
        }
    }

    /// Start unauthenticated; `login` will establish a session iff
    /// `login_grants_session`
    pub fn unauthenticated(config: BoardsConfig, login_grants_session: bool) -> Self {
        Self {
            authenticated: Mutex::new(false),
            login_grants_session,
            ..Self::with_config(config)
        }
    }

    // === Error injection methods ===

    /// Make `create_work_item` fail for items with this exact title
    pub fn fail_create_for(&self, title: &str, msg: &str) {
        self.error_on_title
            .lock()
            .unwrap()
            .insert(title.to_string(), msg.to_string());
    }

    // === Call verification methods ===

    /// Number of `check_auth` calls so far
    pub fn check_auth_call_count(&self) -> usize {
        self.check_auth_calls.load(Ordering::SeqCst)
    }

    /// Number of `login` calls so far
    pub fn login_call_count(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    /// Get all `create_work_item` calls
    pub fn get_create_calls(&self) -> Vec<CreateCall> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Titles passed to `create_work_item`, in call order
    pub fn created_titles(&self) -> Vec<String> {
        self.get_create_calls()
            .into_iter()
            .map(|c| c.title)
            .collect()
    }

    /// Assert that `create_work_item` was called with a specific title
    pub fn assert_create_called(&self, title: &str) {
        let calls = self.get_create_calls();
        assert!(
            calls.iter().any(|c| c.title == title),
            "Expected create_work_item({title}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl BoardsService for MockBoardsService {
    async fn check_auth(&self) -> Result<bool> {
        self.check_auth_calls.fetch_add(1, Ordering::SeqCst);
        Ok(*self.authenticated.lock().unwrap())
    }

    async fn login(&self) -> Result<()> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if self.login_grants_session {
            *self.authenticated.lock().unwrap() = true;
        }
        Ok(())
    }

    async fn create_work_item(&self, item: &WorkItem) -> Result<CreatedWorkItem> {
        self.create_calls.lock().unwrap().push(CreateCall {
            item_type: item.item_type.to_string(),
            title: item.title.clone(),
            state: item.state.to_string(),
            tags: item.joined_tags(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_title.lock().unwrap().get(&item.title) {
            return Err(Error::Boards(msg.clone()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedWorkItem {
            id,
            url: Some(format!(
                "https://testorg.visualstudio.com/_workitems/edit/{id}"
            )),
        })
    }

    fn config(&self) -> &BoardsConfig {
        &self.config
    }
}
