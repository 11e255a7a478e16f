//! User detail view model - holds one user and tracks the detail load

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::state::RequestIds;
use crate::messages::NetworkCommand;
use crate::models::User;

/// States emitted by the detail screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserDetailState {
    Loading,
    Success,
    Error(String),
}

pub struct UserDetailViewModel {
    user: Arc<User>,
    ids: RequestIds,
    observer: Option<mpsc::UnboundedSender<UserDetailState>>,
    state: Option<UserDetailState>,
    pending: Option<u64>,
}

impl UserDetailViewModel {
    pub fn new(user: Arc<User>, ids: RequestIds) -> Self {
        UserDetailViewModel {
            user,
            ids,
            observer: None,
            state: None,
            pending: None,
        }
    }

    /// Register the state observer. Replaces any previous one.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<UserDetailState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observer = Some(tx);
        rx
    }

    /// Emit `Loading` and return the load to dispatch, unless one is pending
    pub fn load_details(&mut self) -> Option<NetworkCommand> {
        if self.pending.is_some() {
            return None;
        }
        let id = self.ids.next();
        self.pending = Some(id);
        self.emit(UserDetailState::Loading);
        Some(NetworkCommand::LoadUserDetails {
            id,
            user_id: self.user.id,
        })
    }

    /// Apply a load completion; stale ids are ignored
    pub fn handle_details_loaded(&mut self, id: u64, result: Result<(), String>) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(id, pending = ?self.pending, "Ignoring stale detail result");
            return false;
        }
        self.pending = None;
        match result {
            Ok(()) => self.emit(UserDetailState::Success),
            Err(message) => self.emit(UserDetailState::Error(message)),
        }
        true
    }

    /// Forget the outstanding load and return the cancel command for it
    pub fn cancel(&mut self) -> Option<NetworkCommand> {
        self.pending.take().map(NetworkCommand::CancelRequest)
    }

    pub fn user(&self) -> &Arc<User> {
        &self.user
    }

    pub fn state(&self) -> Option<&UserDetailState> {
        self.state.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn emit(&mut self, state: UserDetailState) {
        tracing::debug!(user_id = self.user.id, state = ?state, "Detail state");
        self.state = Some(state.clone());
        if let Some(tx) = &self.observer {
            if tx.send(state).is_err() {
                self.observer = None;
            }
        }
    }
}
