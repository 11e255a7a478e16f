//! Command handlers - business logic for processing UI events

use crate::app::detail::UserDetailViewModel;
use crate::app::navigation::{Flow, Navigator, Route};
use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // List screen
    // ========================

    /// First load of the list screen
    pub fn start(&mut self) -> Option<NetworkCommand> {
        self.list.start()
    }

    pub fn reload(&mut self) -> Option<NetworkCommand> {
        self.list.refresh()
    }

    pub fn search(&mut self, query: &str) {
        self.list.search(query);
    }

    // ========================
    // Navigation
    // ========================

    /// Open the detail screen for a row of the filtered list.
    ///
    /// Returns the commands to send: a cancel for any detail screen being
    /// replaced. The new screen's load is started separately with
    /// [`AppState::load_details`] once its observer is attached.
    pub fn open_row(&mut self, index: usize) -> Option<Vec<NetworkCommand>> {
        let user = self.list.select(index)?;
        let mut commands = Vec::new();
        if self.detail.is_some() {
            commands.extend(self.close_detail());
        }

        self.detail_coordinator = self
            .coordinators
            .add_child(self.list_coordinator, Flow::UserDetail { user_id: user.id });
        self.navigator.push(Route::UserDetail { user_id: user.id });
        self.detail = Some(UserDetailViewModel::new(user, self.ids.clone()));
        Some(commands)
    }

    /// Leave the detail screen; returns the cancel for its outstanding load
    pub fn back(&mut self) -> Option<NetworkCommand> {
        if self.detail.is_none() {
            return None;
        }
        self.close_detail()
    }

    fn close_detail(&mut self) -> Option<NetworkCommand> {
        self.navigator.pop();
        if let Some(id) = self.detail_coordinator.take() {
            self.coordinators.child_did_finish(self.list_coordinator, id);
        }
        self.detail.take().and_then(|mut detail| detail.cancel())
    }

    // ========================
    // Detail screen
    // ========================

    pub fn load_details(&mut self) -> Option<NetworkCommand> {
        self.detail.as_mut().and_then(UserDetailViewModel::load_details)
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::UsersFetched { id, result } => {
                self.list.handle_fetch_result(id, result);
            }
            NetworkResponse::DetailsLoaded { id, result } => match self.detail.as_mut() {
                Some(detail) => {
                    detail.handle_details_loaded(id, result);
                }
                None => tracing::debug!(id, "Detail result with no detail screen"),
            },
            NetworkResponse::Cancelled { id } => {
                tracing::debug!(id, "Request cancelled");
            }
        }
    }
}
