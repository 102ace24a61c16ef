//! Typed Planner operations and their planner CLI command lines.
//!
//! [`PlannerOperation`] has one variant per published tool. The variant list,
//! the tool names, the catalog descriptions, and the parameter types all come
//! from the single `planner_operations!` table below, and
//! [`PlannerOperation::to_cli_args`] matches exhaustively on the same enum.
//! Adding a tool without a command-line mapping does not compile.

pub mod args;
pub mod params;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::OperationDescriptor;
use crate::error::{BridgeError, BridgeResult};
use crate::JsonObject;

pub use args::CliArgs;
pub use params::*;

macro_rules! planner_operations {
    ($( $variant:ident($params:ty) => $name:literal, $description:literal; )+) => {
        /// One decoded tool invocation.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum PlannerOperation {
            $( $variant($params), )+
        }

        impl PlannerOperation {
            /// Decode a tool call into a typed operation.
            ///
            /// Unknown names fail with [`BridgeError::UnknownOperation`]; arguments that
            /// do not fit the operation's parameter struct fail with
            /// [`BridgeError::InvalidArguments`].
            pub fn parse(name: &str, arguments: Option<JsonObject>) -> BridgeResult<Self> {
                let arguments = Value::Object(arguments.unwrap_or_default());
                match name {
                    $( $name => decode::<$params>(name, arguments).map(Self::$variant), )+
                    _ => Err(BridgeError::UnknownOperation(name.to_string())),
                }
            }

            /// Published tool name, e.g. `planner_createTask`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $name, )+
                }
            }
        }

        /// Descriptors in catalog order.
        pub(crate) fn descriptors() -> Vec<OperationDescriptor> {
            vec![
                $( OperationDescriptor::of::<$params>($name, $description), )+
            ]
        }
    };
}

planner_operations! {
    InitAuth(InitAuthParams) => "planner_initAuth",
        "Initialize authentication with Microsoft. Returns verification URL and code for device flow.";
    CreateTask(CreateTaskParams) => "planner_createTask",
        "Create a new task in Microsoft Planner with title, plan, bucket, description, due date, labels, and assignee.";
    SetDefaults(SetDefaultsParams) => "planner_setDefaults",
        "Set default plan and bucket for task creation.";
    ListPlans(ListPlansParams) => "planner_listPlans",
        "List all available plans accessible to the user.";
    ListBuckets(ListBucketsParams) => "planner_listBuckets",
        "List all buckets in a specific plan.";
    ListTasks(ListTasksParams) => "planner_listTasks",
        "List tasks in a plan or bucket. Can filter to show only incomplete tasks.";
    FindTask(TaskRefParams) => "planner_findTask",
        "Find a task by ID or title. Returns full task details.";
    CompleteTask(TaskRefParams) => "planner_completeTask",
        "Mark a task as complete (sets percentComplete to 100).";
    MoveTask(MoveTaskParams) => "planner_moveTask",
        "Move a task to a different bucket within the same plan.";
    AddSubtask(SubtaskParams) => "planner_addSubtask",
        "Add a subtask (checklist item) to a task.";
    ListSubtasks(TaskRefParams) => "planner_listSubtasks",
        "List all subtasks (checklist items) for a task.";
    CompleteSubtask(SubtaskParams) => "planner_completeSubtask",
        "Mark a subtask (checklist item) as complete.";
    DeleteTask(TaskRefParams) => "planner_deleteTask",
        "Delete a task. No confirmation required for MCP (unlike CLI).";
    UpdateTask(UpdateTaskParams) => "planner_updateTask",
        "Update an existing task's title, description, or labels. Pass labels as an empty string to clear all labels.";
    SearchUsers(SearchUsersParams) => "planner_searchUsers",
        "Search for users in the directory by display name.";
    LookupUser(LookupUserParams) => "planner_lookupUser",
        "Resolve a user by email, ID, or display name. Set noSearch to disable the display-name search fallback.";
    CreateBucket(CreateBucketParams) => "planner_createBucket",
        "Create a new bucket in a plan.";
    DeleteBucket(DeleteBucketParams) => "planner_deleteBucket",
        "Delete a bucket from a plan.";
    RenameBucket(RenameBucketParams) => "planner_renameBucket",
        "Rename a bucket in a plan.";
    MoveBucketTasks(MoveBucketTasksParams) => "planner_moveBucketTasks",
        "Move all tasks from one bucket to another within the same plan.";
    ListComments(ListCommentsParams) => "planner_listComments",
        "List comments on a task.";
    AddComment(AddCommentParams) => "planner_addComment",
        "Add a comment to a task.";
}

impl PlannerOperation {
    /// Command-line tokens for the planner CLI, subcommand first.
    pub fn to_cli_args(&self) -> Vec<String> {
        let args = match self {
            Self::InitAuth(_) => CliArgs::command(["init-auth"]),
            Self::CreateTask(p) => CliArgs::command(["add"])
                .flag("title", &p.title)
                .opt_flag("plan", p.plan.as_ref())
                .opt_flag("bucket", p.bucket.as_ref())
                .opt_flag("desc", p.desc.as_ref())
                .opt_flag("due", p.due.as_ref())
                .opt_flag("labels", p.labels.as_ref())
                .opt_flag("assignee", p.assignee.as_ref()),
            Self::SetDefaults(p) => CliArgs::command(["set-defaults"])
                .flag("plan", &p.plan)
                .flag("bucket", &p.bucket),
            Self::ListPlans(_) => CliArgs::command(["list-plans"]),
            Self::ListBuckets(p) => CliArgs::command(["list-buckets"]).flag("plan", &p.plan),
            Self::ListTasks(p) => CliArgs::command(["list-tasks-cmd"])
                .flag("plan", &p.plan)
                .opt_flag("bucket", p.bucket.as_ref())
                .switch("incomplete", p.incomplete_only.unwrap_or(false)),
            Self::FindTask(p) => task_ref("find-task-cmd", p),
            Self::CompleteTask(p) => task_ref("complete-task-cmd", p),
            Self::MoveTask(p) => CliArgs::command(["move-task-cmd"])
                .flag("task", &p.task)
                .flag("bucket", &p.bucket)
                .opt_flag("plan", p.plan.as_ref()),
            Self::AddSubtask(p) => subtask("add-subtask-cmd", p),
            Self::ListSubtasks(p) => task_ref("list-subtasks-cmd", p),
            Self::CompleteSubtask(p) => subtask("complete-subtask-cmd", p),
            Self::DeleteTask(p) => CliArgs::command(["delete-task-cmd"])
                .flag("task", &p.task)
                .switch("confirm", true)
                .opt_flag("plan", p.plan.as_ref()),
            Self::UpdateTask(p) => CliArgs::command(["update-task-cmd"])
                .flag("task", &p.task)
                .opt_flag("plan", p.plan.as_ref())
                .opt_flag("title", p.title.as_ref())
                .opt_flag("description", p.description.as_ref())
                .opt_flag_keep_empty("labels", p.labels.as_ref()),
            Self::SearchUsers(p) => CliArgs::command(["user", "search"]).positional(&p.query),
            Self::LookupUser(p) => CliArgs::command(["user", "lookup"])
                .positional(&p.user)
                .switch("no-search", p.no_search.unwrap_or(false)),
            Self::CreateBucket(p) => CliArgs::command(["create-bucket"])
                .flag("name", &p.name)
                .flag("plan", &p.plan),
            Self::DeleteBucket(p) => CliArgs::command(["delete-bucket"])
                .flag("bucket", &p.bucket)
                .flag("plan", &p.plan),
            Self::RenameBucket(p) => CliArgs::command(["rename-bucket"])
                .flag("bucket", &p.bucket)
                .flag("new-name", &p.new_name)
                .flag("plan", &p.plan),
            Self::MoveBucketTasks(p) => CliArgs::command(["move-bucket-tasks"])
                .flag("source", &p.source)
                .flag("target", &p.target)
                .flag("plan", &p.plan),
            Self::ListComments(p) => CliArgs::command(["list-comments-cmd"])
                .flag("task", &p.task)
                .flag("plan", &p.plan),
            Self::AddComment(p) => CliArgs::command(["add-comment-cmd"])
                .flag("task", &p.task)
                .flag("comment", &p.comment)
                .flag("plan", &p.plan),
        };
        args.into_vec()
    }
}

fn task_ref(subcommand: &str, p: &TaskRefParams) -> CliArgs {
    CliArgs::command([subcommand])
        .flag("task", &p.task)
        .opt_flag("plan", p.plan.as_ref())
}

fn subtask(subcommand: &str, p: &SubtaskParams) -> CliArgs {
    CliArgs::command([subcommand])
        .flag("task", &p.task)
        .flag("subtask", &p.subtask)
        .opt_flag("plan", p.plan.as_ref())
}

fn decode<T: DeserializeOwned>(operation: &str, arguments: Value) -> BridgeResult<T> {
    serde_json::from_value(arguments)
        .map_err(|e| BridgeError::invalid_arguments(operation, e.to_string()))
}
