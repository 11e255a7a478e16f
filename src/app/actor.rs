//! App actor - message loop processing UI events and network responses
//!
//! The actor task is the single serial context for every view model: UI
//! events, network completions and observer notifications are all handled
//! here, one at a time.

use tokio::sync::mpsc;

use crate::app::detail::UserDetailState;
use crate::app::list::UserListState;
use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
    list_rx: mpsc::UnboundedReceiver<UserListState>,
    detail_rx: Option<mpsc::UnboundedReceiver<UserDetailState>>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        let mut state = AppState::new();
        let list_rx = state.list.subscribe();
        AppActor {
            state,
            network_tx,
            render_tx,
            list_rx,
            detail_rx: None,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state, then load the list like a screen appearing
        self.render();
        let start = self.state.start();
        self.send(start);

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // Quit signal received, or the UI side went away
                    let Some(event) = event.filter(|event| *event != UiEvent::Quit) else {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    };
                    self.handle_ui_event(event);
                    self.render();
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), error = response.is_error(), "Network response");
                    self.state.handle_response(response);
                }
                Some(state) = self.list_rx.recv() => {
                    tracing::info!(state = ?state, "List state changed");
                    self.render();
                }
                Some(state) = next_detail_state(&mut self.detail_rx) => {
                    tracing::info!(state = ?state, "Detail state changed");
                    self.render();
                }
            }
        }
    }

    fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            // List screen
            UiEvent::Reload => {
                let cmd = self.state.reload();
                self.send(cmd);
            }
            UiEvent::Search(query) => self.state.search(&query),
            UiEvent::OpenRow(index) => {
                if let Some(commands) = self.state.open_row(index) {
                    for cmd in commands {
                        self.send(Some(cmd));
                    }
                    self.detail_rx = self.state.detail.as_mut().map(|detail| detail.subscribe());
                    let load = self.state.load_details();
                    self.send(load);
                }
            }

            // Detail screen
            UiEvent::Back => {
                let cancel = self.state.back();
                self.send(cancel);
                self.detail_rx = None;
            }
            UiEvent::RetryDetails => {
                let load = self.state.load_details();
                self.send(load);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::Redraw => {}

            // Handled by the run loop
            UiEvent::Quit => {}
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }
}

/// Next state from the detail observer; pends forever when no detail screen is open
async fn next_detail_state(
    rx: &mut Option<mpsc::UnboundedReceiver<UserDetailState>>,
) -> Option<UserDetailState> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
