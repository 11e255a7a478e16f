//! App state - pure data structure with no I/O logic

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::app::detail::UserDetailViewModel;
use crate::app::list::UsersListViewModel;
use crate::app::navigation::{CoordinatorId, CoordinatorTree, Flow, NavigationStack, Navigator};
use crate::messages::render::DetailRender;
use crate::messages::RenderState;

/// Shared request id generator.
///
/// Every view model draws from the same counter so ids stay unique across the
/// network actor's cancel handles.
#[derive(Clone, Debug)]
pub struct RequestIds(Arc<AtomicU64>);

impl RequestIds {
    pub fn new() -> Self {
        RequestIds(Arc::new(AtomicU64::new(1)))
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RequestIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub ids: RequestIds,

    // Screens
    pub list: UsersListViewModel,
    pub detail: Option<UserDetailViewModel>,

    // Navigation
    pub navigator: NavigationStack,
    pub coordinators: CoordinatorTree,
    pub list_coordinator: CoordinatorId,
    pub detail_coordinator: Option<CoordinatorId>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let ids = RequestIds::new();
        let mut coordinators = CoordinatorTree::new();
        let root = coordinators.root_id();
        // A fresh tree always accepts children under its root
        let list_coordinator = coordinators
            .add_child(root, Flow::UserList)
            .unwrap_or(root);

        AppState {
            list: UsersListViewModel::new(ids.clone()),
            ids,
            detail: None,
            navigator: NavigationStack::new(),
            coordinators,
            list_coordinator,
            detail_coordinator: None,
            show_help: false,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            route: self.navigator.current(),
            list_state: self.list.state().cloned(),
            query: self.list.query().to_string(),
            rows: self.list.rows().to_vec(),
            total_users: self.list.total_count(),
            last_updated: self.list.last_updated(),
            detail: self.detail.as_ref().map(|detail| DetailRender {
                user: Arc::clone(detail.user()),
                state: detail.state().cloned(),
            }),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::Route;

    #[test]
    fn test_request_ids_are_shared_between_clones() {
        let ids = RequestIds::new();
        let other = ids.clone();
        let a = ids.next();
        let b = other.next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_initial_render_state() {
        let state = AppState::new();
        let render = state.to_render_state();
        assert_eq!(render.route, Route::UserList);
        assert!(render.list_state.is_none());
        assert!(render.rows.is_empty());
        assert!(render.detail.is_none());
        assert_eq!(state.coordinators.children(state.coordinators.root_id()).len(), 1);
    }
}
