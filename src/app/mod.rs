//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates the view models, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod list;
pub mod detail;
pub mod navigation;

pub use state::{AppState, RequestIds};
pub use actor::AppActor;
pub use list::{UserListState, UsersListViewModel};
pub use detail::{UserDetailState, UserDetailViewModel};
pub use navigation::{CoordinatorId, CoordinatorTree, Flow, NavigationStack, Navigator, Route};
