//! Task command implementations.
//!
//! Each handler performs one API call and prints the result through the
//! formatters in [`crate::output`].

use ellie_api_rs::client::EllieClient;
use ellie_api_rs::models::Task;
use ellie_api_rs::tasks::{CreateTaskRequest, UpdateTaskRequest};

use super::{require_non_blank, CommandContext, Result};
use crate::output::{
    format_deleted_task, format_deleted_task_json, format_json, format_task, format_tasks,
};

/// Optional task fields shared by create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFields {
    pub date: Option<String>,
    pub start: Option<String>,
    /// Estimated time in seconds.
    pub estimated_time: Option<i64>,
    pub list_id: Option<String>,
    pub label: Option<String>,
    pub priority: Option<i32>,
}

/// Options for the tasks create command.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub description: String,
    pub fields: TaskFields,
}

impl CreateOptions {
    /// Rejects a blank description before any request is made.
    pub fn validate(&self) -> Result<()> {
        require_non_blank(&self.description, "--desc")
    }

    /// Builds the request body. Unset fields are omitted.
    pub fn to_request(&self) -> CreateTaskRequest {
        let fields = self.fields.clone();
        CreateTaskRequest {
            description: self.description.clone(),
            date: fields.date,
            start: fields.start,
            estimated_time: fields.estimated_time,
            list_id: fields.list_id,
            label: fields.label,
            priority: fields.priority,
        }
    }
}

/// Options for the tasks update command.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub task_id: String,
    pub description: Option<String>,
    pub complete: Option<bool>,
    pub fields: TaskFields,
}

impl UpdateOptions {
    /// Builds the request body. Only flags that were given are sent.
    pub fn to_request(&self) -> UpdateTaskRequest {
        let fields = self.fields.clone();
        UpdateTaskRequest {
            description: self.description.clone(),
            date: fields.date,
            start: fields.start,
            estimated_time: fields.estimated_time,
            complete: self.complete,
            list_id: fields.list_id,
            label: fields.label,
            priority: fields.priority,
        }
    }
}

fn output_task(ctx: &CommandContext, task: &Task) -> Result<()> {
    if ctx.json_output {
        ctx.emit(&format_json(task)?);
    } else {
        ctx.emit(&format_task(task, ctx.use_colors));
    }
    Ok(())
}

fn output_tasks(ctx: &CommandContext, tasks: &[Task]) -> Result<()> {
    if ctx.json_output {
        ctx.emit(&format_json(tasks)?);
    } else {
        ctx.emit(&format_tasks(tasks, ctx.use_colors));
    }
    Ok(())
}

/// Executes the tasks get command.
pub async fn execute_get(ctx: &CommandContext, client: &EllieClient, task_id: &str) -> Result<()> {
    let task = client.get_task(task_id).await?;
    output_task(ctx, &task)
}

/// Executes the tasks list command. A blank time zone is not sent.
pub async fn execute_list(
    ctx: &CommandContext,
    client: &EllieClient,
    date: &str,
    time_zone: Option<&str>,
) -> Result<()> {
    let time_zone = time_zone.map(str::trim).filter(|tz| !tz.is_empty());
    let tasks = client.get_tasks_by_date(date, time_zone).await?;
    output_tasks(ctx, &tasks)
}

/// Executes the tasks by-list command.
pub async fn execute_by_list(
    ctx: &CommandContext,
    client: &EllieClient,
    list_id: &str,
) -> Result<()> {
    let tasks = client.get_tasks_by_list(list_id).await?;
    output_tasks(ctx, &tasks)
}

/// Executes the tasks braindump command.
pub async fn execute_braindump(ctx: &CommandContext, client: &EllieClient) -> Result<()> {
    let tasks = client.get_braindump().await?;
    output_tasks(ctx, &tasks)
}

/// Executes the tasks agenda command.
pub async fn execute_agenda(ctx: &CommandContext, client: &EllieClient, date: &str) -> Result<()> {
    let tasks = client.get_tasks_for_date(date).await?;
    output_tasks(ctx, &tasks)
}

/// Executes the tasks create command.
pub async fn execute_create(
    ctx: &CommandContext,
    client: &EllieClient,
    opts: &CreateOptions,
) -> Result<()> {
    opts.validate()?;
    let task = client.create_task(&opts.to_request()).await?;
    output_task(ctx, &task)
}

/// Executes the tasks update command.
pub async fn execute_update(
    ctx: &CommandContext,
    client: &EllieClient,
    opts: &UpdateOptions,
) -> Result<()> {
    let request = opts.to_request();
    if request.is_empty() {
        tracing::warn!(task_id = %opts.task_id, "no fields given, sending an empty update");
    }
    let task = client.update_task(&opts.task_id, &request).await?;
    output_task(ctx, &task)
}

/// Executes the tasks complete command.
pub async fn execute_complete(
    ctx: &CommandContext,
    client: &EllieClient,
    task_id: &str,
) -> Result<()> {
    let task = client.mark_task_complete(task_id).await?;
    output_task(ctx, &task)
}

/// Executes the tasks delete command.
pub async fn execute_delete(
    ctx: &CommandContext,
    client: &EllieClient,
    task_id: &str,
) -> Result<()> {
    client.delete_task(task_id).await?;

    if ctx.json_output {
        ctx.emit(&format_deleted_task_json(task_id)?);
    } else {
        ctx.emit(&format_deleted_task());
    }
    Ok(())
}

/// Executes the tasks search command.
pub async fn execute_search(ctx: &CommandContext, client: &EllieClient, query: &str) -> Result<()> {
    let tasks = client.search_tasks(query).await?;
    output_tasks(ctx, &tasks)
}
