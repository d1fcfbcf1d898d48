//! Task endpoints (`/v1/tasks/*`).
//!
//! Every method performs one request and returns the decoded response. Request
//! bodies are sent exactly as built: the client does not validate them.

use serde::{Deserialize, Serialize};

use crate::client::EllieClient;
use crate::error::Result;
use crate::models::Task;

/// Request body for `POST /v1/tasks/createTask`.
///
/// # Examples
///
/// ```
/// use ellie_api_rs::tasks::CreateTaskRequest;
///
/// let request = CreateTaskRequest::new("Write report")
///     .with_date("2026-01-25")
///     .with_priority(3);
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["description"], "Write report");
/// assert_eq!(json["date"], "2026-01-25");
/// assert!(json.get("listId").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Estimated time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
    #[serde(rename = "listId", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl CreateTaskRequest {
    /// Creates a request with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Sets the scheduled date (`YYYY-MM-DD`).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the start time.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the estimated time in seconds.
    pub fn with_estimated_time(mut self, seconds: i64) -> Self {
        self.estimated_time = Some(seconds);
        self
    }

    /// Sets the target list.
    pub fn with_list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = Some(list_id.into());
        self
    }

    /// Sets the label ID.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the priority (1-4).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request body for `POST /v1/tasks/updateTask/{id}`.
///
/// Only fields that are `Some` are sent; the server leaves the rest untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    #[serde(rename = "listId", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl UpdateTaskRequest {
    /// Returns true if no field would be sent.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Request body for `POST /v1/tasks/deleteTask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTaskRequest {
    #[serde(rename = "taskId")]
    pub task_id: String,
}

/// Request body for `POST /v1/tasks/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Serialize)]
struct TaskIdQuery<'a> {
    #[serde(rename = "taskId")]
    task_id: &'a str,
}

#[derive(Serialize)]
struct ByDateQuery<'a> {
    date: &'a str,
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    time_zone: Option<&'a str>,
}

#[derive(Serialize)]
struct ByListQuery<'a> {
    #[serde(rename = "listId")]
    list_id: &'a str,
}

#[derive(Serialize)]
struct DateQuery<'a> {
    date: &'a str,
}

/// Appends a form-encoded query string to an endpoint path.
fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String> {
    let encoded = serde_urlencoded::to_string(query)?;
    Ok(format!("{path}?{encoded}"))
}

/// Percent-encodes a single path segment.
fn encode_path_segment(segment: &str) -> String {
    let Ok(mut url) = reqwest::Url::parse("http://localhost/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

impl EllieClient {
    /// Fetches a single task (`GET /v1/tasks/getTask?taskId=`).
    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        let path = with_query("/v1/tasks/getTask", &TaskIdQuery { task_id })?;
        let body = self.get(&path).await?;
        Self::decode(&body)
    }

    /// Fetches the tasks scheduled on a date (`GET /v1/tasks/byDate`).
    ///
    /// `time_zone` is only sent when given.
    pub async fn get_tasks_by_date(&self, date: &str, time_zone: Option<&str>) -> Result<Vec<Task>> {
        let path = with_query("/v1/tasks/byDate", &ByDateQuery { date, time_zone })?;
        let body = self.get(&path).await?;
        Self::decode(&body)
    }

    /// Fetches the tasks in a list (`GET /v1/tasks/byList?listId=`).
    pub async fn get_tasks_by_list(&self, list_id: &str) -> Result<Vec<Task>> {
        let path = with_query("/v1/tasks/byList", &ByListQuery { list_id })?;
        let body = self.get(&path).await?;
        Self::decode(&body)
    }

    /// Fetches unscheduled tasks (`GET /v1/tasks/getBraindump`).
    pub async fn get_braindump(&self) -> Result<Vec<Task>> {
        let body = self.get("/v1/tasks/getBraindump").await?;
        Self::decode(&body)
    }

    /// Fetches the full agenda for a date, recurring tasks included
    /// (`GET /v1/tasks/getTasksForDate?date=`).
    pub async fn get_tasks_for_date(&self, date: &str) -> Result<Vec<Task>> {
        let path = with_query("/v1/tasks/getTasksForDate", &DateQuery { date })?;
        let body = self.get(&path).await?;
        Self::decode(&body)
    }

    /// Creates a task (`POST /v1/tasks/createTask`).
    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        let body = self.post("/v1/tasks/createTask", request).await?;
        Self::decode(&body)
    }

    /// Updates a task (`POST /v1/tasks/updateTask/{id}`).
    pub async fn update_task(&self, task_id: &str, request: &UpdateTaskRequest) -> Result<Task> {
        let path = format!("/v1/tasks/updateTask/{}", encode_path_segment(task_id));
        let body = self.post(&path, request).await?;
        Self::decode(&body)
    }

    /// Marks a task complete (`POST /v1/tasks/markTaskAsComplete?taskId=`).
    pub async fn mark_task_complete(&self, task_id: &str) -> Result<Task> {
        let path = with_query("/v1/tasks/markTaskAsComplete", &TaskIdQuery { task_id })?;
        let body = self.post_empty(&path).await?;
        Self::decode(&body)
    }

    /// Deletes a task (`POST /v1/tasks/deleteTask`). The response body is ignored.
    pub async fn delete_task(&self, task_id: &str) -> Result<()> {
        let request = DeleteTaskRequest {
            task_id: task_id.to_string(),
        };
        self.post("/v1/tasks/deleteTask", &request).await?;
        Ok(())
    }

    /// Searches tasks (`POST /v1/tasks/search`).
    pub async fn search_tasks(&self, query: &str) -> Result<Vec<Task>> {
        let request = SearchRequest {
            query: query.to_string(),
        };
        let body = self.post("/v1/tasks/search", &request).await?;
        Self::decode(&body)
    }
}
