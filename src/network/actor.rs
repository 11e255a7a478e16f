//! Network actor - runs fetches and detail loads in the Tokio runtime

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinSet};

use crate::constants::DETAIL_ERROR_MESSAGE;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::repository::UserFetcher;

/// How detail loads resolve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetailSettings {
    pub delay: Duration,
    /// Probability in `[0, 1]` that a load fails
    pub failure_rate: f64,
}

/// Network actor that processes fetch and detail commands
pub struct NetworkActor {
    fetcher: Arc<dyn UserFetcher>,
    detail: DetailSettings,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<u64>,
    abort_handles: HashMap<u64, AbortHandle>,
}

impl NetworkActor {
    pub fn new(
        fetcher: Arc<dyn UserFetcher>,
        detail: DetailSettings,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        let failure_rate = if detail.failure_rate.is_nan() {
            0.0
        } else {
            detail.failure_rate.clamp(0.0, 1.0)
        };
        NetworkActor {
            fetcher,
            detail: DetailSettings { failure_rate, ..detail },
            response_tx,
            active_requests: JoinSet::new(),
            abort_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUsers { id }) => {
                            let fetcher = Arc::clone(&self.fetcher);
                            let response_tx = self.response_tx.clone();

                            let handle = self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching users");
                                let result = fetcher.fetch_users().await;
                                tracing::info!(id, ok = result.is_ok(), "Fetch completed");
                                let _ = response_tx.send(NetworkResponse::UsersFetched { id, result });
                                id
                            });
                            self.abort_handles.insert(id, handle);
                        }

                        Some(NetworkCommand::LoadUserDetails { id, user_id }) => {
                            let settings = self.detail;
                            let response_tx = self.response_tx.clone();

                            let handle = self.active_requests.spawn(async move {
                                tracing::info!(id, user_id, "Loading user details");
                                tokio::time::sleep(settings.delay).await;
                                let failed = rand::thread_rng().gen_bool(settings.failure_rate);
                                let result = if failed {
                                    Err(DETAIL_ERROR_MESSAGE.to_string())
                                } else {
                                    Ok(())
                                };
                                let _ = response_tx.send(NetworkResponse::DetailsLoaded { id, result });
                                id
                            });
                            self.abort_handles.insert(id, handle);
                        }

                        Some(NetworkCommand::CancelRequest(id)) => {
                            if let Some(handle) = self.abort_handles.remove(&id) {
                                tracing::info!(id, "Cancelling request");
                                handle.abort();
                                let _ = self.response_tx.send(NetworkResponse::Cancelled { id });
                            }
                        }

                        Some(NetworkCommand::Shutdown) => {
                            // Abort everything still running
                            self.abort_handles.clear();
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up finished tasks, including ones that panicked
                Some(joined) = self.active_requests.join_next_with_id() => {
                    let task_id = match joined {
                        Ok((task_id, _)) => task_id,
                        Err(e) => {
                            if e.is_panic() {
                                tracing::error!(error = %e, "Request task panicked");
                            }
                            e.id()
                        }
                    };
                    self.abort_handles.retain(|_, handle| handle.id() != task_id);
                }
            }
        }
    }
}
