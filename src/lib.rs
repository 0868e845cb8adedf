//! Clockify API client library for Rust.
//!
//! A typed, blocking client for the [Clockify](https://clockify.me) REST API.
//! Workspaces, clients, projects, tags, tasks, time entries, users and
//! reports each get their own sub-client; requests and responses are plain
//! serde structs.
//!
//! # Quick Start
//!
//! ```no_run
//! use clockify_client::{Clockify, ClientFilter};
//!
//! let clockify = Clockify::new("my-api-key", "api.clockify.me/v1").unwrap();
//!
//! let me = clockify.users().get_current_user().unwrap().unwrap();
//! let workspace = me.active_workspace.unwrap();
//!
//! let filter = ClientFilter::by_name("Acme");
//! for client in clockify.clients().get_clients(&workspace, Some(&filter)).unwrap().unwrap_or_default() {
//!     println!("{}: {}", client.id, client.name);
//! }
//! ```
//!
//! Successful calls return `Ok(None)` when the API answers `204`/`205` or an
//! empty body. Anything outside `200`-`202`/`204`/`205` is a
//! [`ClockifyError::Http`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod transport;

// Re-export the main public types at the crate root for convenience.
pub use api::{
    ClientsClient, ProjectsClient, ReportsClient, TagsClient, TasksClient, TimeEntriesClient,
    UsersClient, WorkspacesClient,
};
pub use client::Clockify;
pub use config::{ClientConfig, DEFAULT_HOST};
pub use error::{ClockifyError, Result};
pub use models::{
    AddClientRequest, AddProjectRequest, AddTagRequest, AddTimeEntryRequest, AddUserRequest,
    Client, ClientFilter, CostRateRequest, DayOfWeek, EstimateRequest, EstimateType,
    HourlyRateRequest, IsoDuration, Membership, MembershipRequest, MembershipStatus,
    MembershipType, Patch, Project, ProjectFilter, ProjectTaskRequest, Rate, ReportKind,
    ReportRequest, SortOrder, Tag, TagFilter, Task, TaskFields, TaskFilter, TaskStatus, TimeEntry,
    TimeEntryFilter, TimeEntryType, TimeInterval, UpdateClientRequest, UpdateProjectRequest,
    UpdateTagRequest, UpdateTimeEntryRequest, UpdateUserStatusRequest, User, UserFilter,
    UserStatus, Workspace,
};
pub use transport::{Transport, API_KEY_HEADER};
