//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::detail::UserDetailState;
use crate::app::list::UserListState;
use crate::app::navigation::Route;
use crate::models::User;

/// Detail screen snapshot
#[derive(Debug, Clone)]
pub struct DetailRender {
    pub user: Arc<User>,
    pub state: Option<UserDetailState>,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub route: Route,

    // List screen
    /// `None` until the first fetch starts
    pub list_state: Option<UserListState>,
    pub query: String,
    pub rows: Vec<Arc<User>>,
    pub total_users: usize,
    pub last_updated: Option<DateTime<Utc>>,

    // Detail screen
    pub detail: Option<DetailRender>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            route: Route::UserList,
            list_state: None,
            query: String::new(),
            rows: Vec::new(),
            total_users: 0,
            last_updated: None,
            detail: None,
            show_help: false,
        }
    }
}
