//! Network messages - communication between App and Network layers

use crate::models::User;
use crate::network::NetworkError;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the user list
    FetchUsers { id: u64 },
    /// Resolve the detail load for one user
    LoadUserDetails { id: u64, user_id: u64 },
    /// Abort a pending request
    CancelRequest(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    UsersFetched {
        id: u64,
        result: Result<Vec<User>, NetworkError>,
    },
    DetailsLoaded {
        id: u64,
        result: Result<(), String>,
    },
    /// Request was cancelled before it completed
    Cancelled { id: u64 },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::UsersFetched { id, .. } => *id,
            NetworkResponse::DetailsLoaded { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }

    /// Whether the request finished with an error
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NetworkResponse::UsersFetched { result: Err(_), .. }
                | NetworkResponse::DetailsLoaded { result: Err(_), .. }
        )
    }
}
