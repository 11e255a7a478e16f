//! Network layer - HTTP client, user repository and the network actor
//!
//! The Network actor receives fetch/detail commands and sends back responses.

pub mod actor;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod repository;

pub use actor::{DetailSettings, NetworkActor};
pub use client::NetworkClient;
pub use endpoint::Endpoint;
pub use error::NetworkError;
pub use repository::{UserFetcher, UserRepository};
