//! Request and response types for every resource.
//!
//! Responses decode strictly: a missing required field, an enum value the
//! API does not define, or a malformed duration or timestamp is an error.
//! Request types serialize only the fields that were set.

mod common;
mod duration;

pub mod client;
pub mod project;
pub mod report;
pub mod tag;
pub mod task;
pub mod time_entry;
pub mod user;
pub mod workspace;

pub use common::{
    CostRateRequest, DayOfWeek, HourlyRateRequest, Membership, MembershipRequest,
    MembershipStatus, MembershipType, Patch, Rate, SortOrder,
};
pub use duration::IsoDuration;

pub use client::{AddClientRequest, Client, ClientFilter, UpdateClientRequest};
pub use project::{
    AddProjectRequest, EstimateRequest, EstimateType, Project, ProjectFilter, ProjectTaskRequest,
    UpdateProjectRequest,
};
pub use report::{ReportKind, ReportRequest};
pub use tag::{AddTagRequest, Tag, TagFilter, UpdateTagRequest};
pub use task::{Task, TaskFields, TaskFilter, TaskStatus};
pub use time_entry::{
    AddTimeEntryRequest, TimeEntry, TimeEntryFilter, TimeEntryType, TimeInterval,
    UpdateTimeEntryRequest,
};
pub use user::{AddUserRequest, UpdateUserStatusRequest, User, UserFilter, UserStatus};
pub use workspace::Workspace;
