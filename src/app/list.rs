//! Users list view model - fetch orchestration, search filtering and list states
//!
//! The view model never performs I/O itself. `start` hands back the
//! [`NetworkCommand`] to issue and the owner feeds the completion into
//! `handle_fetch_result`, so every transition happens on the owner's task.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::app::state::RequestIds;
use crate::messages::NetworkCommand;
use crate::models::User;
use crate::network::NetworkError;

/// States emitted by the list screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserListState {
    Loading,
    Success,
    Empty,
    Error(String),
}

pub struct UsersListViewModel {
    ids: RequestIds,
    observer: Option<mpsc::UnboundedSender<UserListState>>,
    state: Option<UserListState>,
    /// In-flight guard: id of the outstanding fetch
    pending: Option<u64>,
    users: Vec<Arc<User>>,
    filtered: Vec<Arc<User>>,
    query: String,
    last_updated: Option<DateTime<Utc>>,
}

impl UsersListViewModel {
    pub fn new(ids: RequestIds) -> Self {
        UsersListViewModel {
            ids,
            observer: None,
            state: None,
            pending: None,
            users: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            last_updated: None,
        }
    }

    /// Register the state observer. Replaces any previous one.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<UserListState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observer = Some(tx);
        rx
    }

    /// Begin a fetch unless one is already in flight.
    ///
    /// Emits `Loading` and returns the command to send, or `None` when the
    /// in-flight guard holds.
    pub fn start(&mut self) -> Option<NetworkCommand> {
        if let Some(id) = self.pending {
            tracing::debug!(id, "Fetch already in flight");
            return None;
        }
        let id = self.ids.next();
        self.pending = Some(id);
        self.emit(UserListState::Loading);
        Some(NetworkCommand::FetchUsers { id })
    }

    /// Pull-to-refresh; same guard as `start`
    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        self.start()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a fetch completion. Returns false when `id` is not the
    /// outstanding request, in which case nothing changes.
    pub fn handle_fetch_result(
        &mut self,
        id: u64,
        result: Result<Vec<User>, NetworkError>,
    ) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(id, pending = ?self.pending, "Ignoring stale fetch result");
            return false;
        }
        self.pending = None;

        match result {
            Ok(users) => {
                tracing::info!(id, count = users.len(), "Users fetched");
                self.users = users.into_iter().map(Arc::new).collect();
                self.filtered = self.users.clone();
                self.query.clear();
                self.last_updated = Some(Utc::now());
                self.emit(self.full_list_state());
            }
            Err(e) => {
                tracing::warn!(id, error = ?e, "Fetching users failed");
                self.emit(UserListState::Error(e.to_string()));
            }
        }
        true
    }

    /// Filter the fetched list by a case-insensitive match on the name.
    /// An empty query restores the full list.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        if query.is_empty() {
            self.filtered = self.users.clone();
            self.emit(self.full_list_state());
            return;
        }

        self.filtered = self
            .users
            .iter()
            .filter(|user| user.name_matches(query))
            .cloned()
            .collect();
        let state = if self.filtered.is_empty() {
            UserListState::Empty
        } else {
            UserListState::Success
        };
        self.emit(state);
    }

    pub fn row_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn row_at(&self, index: usize) -> Option<&Arc<User>> {
        self.filtered.get(index)
    }

    /// The user to navigate to for a tapped row
    pub fn select(&self, index: usize) -> Option<Arc<User>> {
        let user = self.row_at(index).cloned();
        if let Some(user) = &user {
            tracing::info!(index, user_id = user.id, "User selected");
        }
        user
    }

    pub fn rows(&self) -> &[Arc<User>] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.users.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last emitted state; `None` while idle
    pub fn state(&self) -> Option<&UserListState> {
        self.state.as_ref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    fn full_list_state(&self) -> UserListState {
        if self.users.is_empty() {
            UserListState::Empty
        } else {
            UserListState::Success
        }
    }

    fn emit(&mut self, state: UserListState) {
        tracing::debug!(state = ?state, "List state");
        self.state = Some(state.clone());
        if let Some(tx) = &self.observer {
            if tx.send(state).is_err() {
                // Receiver dropped; stop emitting
                self.observer = None;
            }
        }
    }
}

impl Default for UsersListViewModel {
    fn default() -> Self {
        Self::new(RequestIds::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::user;

    fn drain(rx: &mut mpsc::UnboundedReceiver<UserListState>) -> Vec<UserListState> {
        let mut states = Vec::new();
        while let Ok(state) = rx.try_recv() {
            states.push(state);
        }
        states
    }

    fn fetch_id(cmd: Option<NetworkCommand>) -> u64 {
        match cmd {
            Some(NetworkCommand::FetchUsers { id }) => id,
            other => panic!("expected FetchUsers, got {:?}", other),
        }
    }

    /// View model loaded with "John Doe" and "Jane Roe", observer drained
    fn loaded() -> (UsersListViewModel, mpsc::UnboundedReceiver<UserListState>) {
        let mut vm = UsersListViewModel::default();
        let mut rx = vm.subscribe();
        let id = fetch_id(vm.start());
        vm.handle_fetch_result(id, Ok(vec![user(1, "John Doe"), user(2, "Jane Roe")]));
        drain(&mut rx);
        (vm, rx)
    }

    #[test]
    fn test_fetch_success_emits_loading_then_success() {
        let mut vm = UsersListViewModel::default();
        let mut rx = vm.subscribe();

        let id = fetch_id(vm.start());
        assert!(vm.handle_fetch_result(id, Ok(vec![user(1, "John Doe")])));

        assert_eq!(drain(&mut rx), vec![UserListState::Loading, UserListState::Success]);
        assert_eq!(vm.row_count(), 1);
        assert_eq!(vm.row_at(0).unwrap().name, "John Doe");
        assert_eq!(vm.row_at(0).unwrap().email, "johndoe@example.com");
        assert!(vm.last_updated().is_some());
    }

    #[test]
    fn test_empty_fetch_emits_empty() {
        let mut vm = UsersListViewModel::default();
        let mut rx = vm.subscribe();

        let id = fetch_id(vm.start());
        vm.handle_fetch_result(id, Ok(Vec::new()));

        assert_eq!(drain(&mut rx), vec![UserListState::Loading, UserListState::Empty]);
        assert_eq!(vm.row_count(), 0);
    }

    #[test]
    fn test_failed_fetch_emits_error_message() {
        let mut vm = UsersListViewModel::default();
        let mut rx = vm.subscribe();

        let id = fetch_id(vm.start());
        vm.handle_fetch_result(id, Err(NetworkError::GenericError));

        let states = drain(&mut rx);
        assert_eq!(states.len(), 2);
        assert_eq!(states[0], UserListState::Loading);
        match &states[1] {
            UserListState::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected error, got {:?}", other),
        }
        assert!(!vm.is_loading());
    }

    #[test]
    fn test_start_twice_issues_one_fetch() {
        let mut vm = UsersListViewModel::default();
        let mut rx = vm.subscribe();

        assert!(vm.start().is_some());
        assert!(vm.start().is_none());
        assert_eq!(drain(&mut rx), vec![UserListState::Loading]);
    }

    #[test]
    fn test_start_after_error_fetches_again() {
        let mut vm = UsersListViewModel::default();
        let id = fetch_id(vm.start());
        vm.handle_fetch_result(id, Err(NetworkError::UrlError));

        let retry = fetch_id(vm.refresh());
        assert_ne!(retry, id);
        assert_eq!(vm.state(), Some(&UserListState::Loading));
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut vm = UsersListViewModel::default();
        let id = fetch_id(vm.start());

        assert!(!vm.handle_fetch_result(id + 100, Ok(vec![user(1, "John Doe")])));
        assert!(vm.is_loading());
        assert_eq!(vm.row_count(), 0);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let (mut vm, mut rx) = loaded();

        vm.search("jo");
        assert_eq!(vm.row_count(), 1);
        assert_eq!(vm.row_at(0).unwrap().name, "John Doe");
        assert_eq!(drain(&mut rx), vec![UserListState::Success]);

        // "janeroe" only appears in the username and email
        vm.search("JANEROE");
        assert_eq!(vm.row_count(), 0);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let (mut vm, mut rx) = loaded();

        vm.search("zzz");
        assert_eq!(vm.row_count(), 0);
        assert_eq!(drain(&mut rx), vec![UserListState::Empty]);
        assert_eq!(vm.query(), "zzz");
    }

    #[test]
    fn test_empty_search_restores_full_list() {
        let (mut vm, mut rx) = loaded();

        vm.search("zzz");
        vm.search("");
        assert_eq!(vm.row_count(), 2);
        assert_eq!(
            drain(&mut rx),
            vec![UserListState::Empty, UserListState::Success]
        );
    }

    #[test]
    fn test_filtered_rows_are_subset_of_full_list() {
        let (mut vm, _rx) = loaded();
        vm.search("e");
        assert!(vm.row_count() <= vm.total_count());
        for row in vm.rows() {
            assert!(row.name.to_lowercase().contains('e'));
        }
    }

    #[test]
    fn test_row_at_out_of_range_is_none() {
        let (vm, _rx) = loaded();
        assert!(vm.row_at(2).is_none());
        assert!(vm.select(99).is_none());
        assert_eq!(vm.select(1).unwrap().id, 2);
    }

    #[test]
    fn test_refetch_clears_query() {
        let (mut vm, _rx) = loaded();
        vm.search("jo");

        let id = fetch_id(vm.start());
        vm.handle_fetch_result(id, Ok(vec![user(1, "John Doe"), user(2, "Jane Roe")]));
        assert_eq!(vm.query(), "");
        assert_eq!(vm.row_count(), 2);
    }

    #[test]
    fn test_dropped_observer_does_not_break_emission() {
        let mut vm = UsersListViewModel::default();
        drop(vm.subscribe());

        let id = fetch_id(vm.start());
        vm.handle_fetch_result(id, Ok(vec![user(1, "John Doe")]));
        assert_eq!(vm.state(), Some(&UserListState::Success));
    }
}
