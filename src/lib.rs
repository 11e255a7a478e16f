//! # Contacts Browser
//!
//! Browse the JSONPlaceholder users list from a terminal.
//!
//! ## Features
//! - Fetch the user list over HTTPS
//! - Case-insensitive search on names
//! - Detail screen per user
//! - YAML configuration, file logging
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (line-oriented terminal) - prints render states
//! - App Layer (view models, navigation)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod config;
pub mod constants;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Address, Company, Geo, User};
pub use config::Config;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, UserListState, UserDetailState, UsersListViewModel, UserDetailViewModel};
pub use network::{NetworkActor, NetworkClient, NetworkError, UserFetcher, UserRepository};
