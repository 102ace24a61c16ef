//! Parameter structs for every Planner operation.
//!
//! All parameter structs derive `Deserialize + JsonSchema`; the schema is what the
//! MCP catalog publishes and the struct is what the marshaller reads, so the two
//! cannot disagree. Field names are camelCase on the wire.

use schemars::JsonSchema;
use serde::Deserialize;

// ── Auth & configuration ──

/// Parameters for `planner_initAuth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct InitAuthParams {}

/// Parameters for `planner_setDefaults`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct SetDefaultsParams {
    #[schemars(description = "Default plan name or ID")]
    pub plan: String,
    #[schemars(description = "Default bucket name or ID")]
    pub bucket: String,
}

/// Parameters for `planner_listPlans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ListPlansParams {}

/// Parameters for `planner_listBuckets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ListBucketsParams {
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}

// ── Tasks ──

/// Parameters for `planner_createTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Task title (required)")]
    pub title: String,
    #[schemars(description = "Plan name or ID (optional if default is set)")]
    pub plan: Option<String>,
    #[schemars(description = "Bucket name or ID (optional if default is set)")]
    pub bucket: Option<String>,
    #[schemars(description = "Task description (optional)")]
    pub desc: Option<String>,
    #[schemars(description = "Due date in YYYY-MM-DD format (optional)")]
    pub due: Option<String>,
    #[schemars(description = "Comma-separated labels like 'Label1,Label3' (optional)")]
    pub labels: Option<String>,
    #[schemars(
        description = "Comma-separated user emails or User IDs (e.g., user1@example.com,user2@example.com) (optional)"
    )]
    pub assignee: Option<String>,
}

/// Parameters for `planner_listTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    #[schemars(description = "Plan name or ID (required)")]
    pub plan: String,
    #[schemars(description = "Bucket name or ID (optional)")]
    pub bucket: Option<String>,
    #[schemars(description = "Show only incomplete tasks (optional, default: false)")]
    pub incomplete_only: Option<bool>,
}

/// Task reference with an optional plan, shared by find/complete/list-subtasks/delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct TaskRefParams {
    #[schemars(description = "Task ID (GUID) or task title")]
    pub task: String,
    #[schemars(description = "Plan name or ID (required for title-based search)")]
    pub plan: Option<String>,
}

/// Parameters for `planner_moveTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct MoveTaskParams {
    #[schemars(description = "Task ID or title")]
    pub task: String,
    #[schemars(description = "Target bucket name or ID")]
    pub bucket: String,
    #[schemars(description = "Plan name or ID (required for resolution)")]
    pub plan: Option<String>,
}

/// Parameters for `planner_updateTask`.
///
/// `labels: ""` clears every label; an absent `labels` leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID or title (required)")]
    pub task: String,
    #[schemars(description = "Plan name or ID (required for title-based search)")]
    pub plan: Option<String>,
    #[schemars(description = "New task title (optional)")]
    pub title: Option<String>,
    #[schemars(description = "New task description (optional)")]
    pub description: Option<String>,
    #[schemars(
        description = "Comma-separated labels like 'Label1,Label3' (optional, empty string to clear all labels)"
    )]
    pub labels: Option<String>,
}

// ── Subtasks ──

/// Parameters for `planner_addSubtask` and `planner_completeSubtask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct SubtaskParams {
    #[schemars(description = "Task ID or title")]
    pub task: String,
    #[schemars(description = "Subtask (checklist item) title")]
    pub subtask: String,
    #[schemars(description = "Plan name or ID (required for title-based search)")]
    pub plan: Option<String>,
}

// ── Users ──

/// Parameters for `planner_searchUsers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct SearchUsersParams {
    #[schemars(description = "Search term (name or partial name)")]
    pub query: String,
}

/// Parameters for `planner_lookupUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupUserParams {
    #[schemars(description = "User email, user ID (GUID), or display name")]
    pub user: String,
    #[schemars(
        description = "Only resolve exact emails or IDs; do not fall back to a display-name search (optional, default: false)"
    )]
    pub no_search: Option<bool>,
}

// ── Buckets ──

/// Parameters for `planner_createBucket`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct CreateBucketParams {
    #[schemars(description = "Name of the new bucket")]
    pub name: String,
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}

/// Parameters for `planner_deleteBucket`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct DeleteBucketParams {
    #[schemars(description = "Bucket name or ID to delete")]
    pub bucket: String,
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}

/// Parameters for `planner_renameBucket`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameBucketParams {
    #[schemars(description = "Bucket name or ID to rename")]
    pub bucket: String,
    #[schemars(description = "New bucket name")]
    pub new_name: String,
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}

/// Parameters for `planner_moveBucketTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct MoveBucketTasksParams {
    #[schemars(description = "Source bucket name or ID")]
    pub source: String,
    #[schemars(description = "Target bucket name or ID")]
    pub target: String,
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}

// ── Comments ──

/// Parameters for `planner_listComments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ListCommentsParams {
    #[schemars(description = "Task ID or title")]
    pub task: String,
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}

/// Parameters for `planner_addComment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Task ID or title")]
    pub task: String,
    #[schemars(description = "Comment text")]
    pub comment: String,
    #[schemars(description = "Plan name or ID")]
    pub plan: String,
}
