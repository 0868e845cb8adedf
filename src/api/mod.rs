//! One client per API resource, each borrowing a [`Transport`](crate::Transport).

#![warn(missing_docs)]

pub mod clients;
pub mod projects;
pub mod reports;
pub mod tags;
pub mod tasks;
pub mod time_entries;
pub mod users;
pub mod workspaces;

pub use clients::ClientsClient;
pub use projects::ProjectsClient;
pub use reports::ReportsClient;
pub use tags::TagsClient;
pub use tasks::TasksClient;
pub use time_entries::TimeEntriesClient;
pub use users::UsersClient;
pub use workspaces::WorkspacesClient;
