use crate::client::PmtClient;
use crate::error::ClientResult;
use pmt_domain::codes::TaskStatusCode;
use pmt_domain::task::{Task, TaskCreate, TaskHistory, TaskUpdate};
use pmt_kernel::format::parse_date;
use reqwest::Method;

/// Re-renders a date string as the `YYYY-MM-DD` form the API expects,
/// interpreting the input in local time. Unparseable input is dropped.
fn normalize_due_date(date: Option<String>) -> Option<String> {
    date.and_then(|d| parse_date(&d).map(|parsed| parsed.format("%Y-%m-%d").to_string()))
}

impl PmtClient {
    // ── Tasks ─────────────────────────────────────────────────────────

    /// `GET /tasks`
    pub async fn tasks(&self) -> ClientResult<Vec<Task>> {
        self.get_json("/tasks").await
    }

    /// `GET /tasks/{id}`
    pub async fn task(&self, id: i64) -> ClientResult<Task> {
        self.get_json(&format!("/tasks/{id}")).await
    }

    /// `GET /tasks/project/{projectId}`
    pub async fn tasks_by_project(&self, project_id: i64) -> ClientResult<Vec<Task>> {
        self.get_json(&format!("/tasks/project/{project_id}")).await
    }

    /// `GET /tasks/status/{statusId}`
    pub async fn tasks_by_status(&self, status_id: i64) -> ClientResult<Vec<Task>> {
        self.get_json(&format!("/tasks/status/{status_id}")).await
    }

    /// `GET /tasks/assignee/{userId}`
    pub async fn tasks_by_assignee(&self, user_id: i64) -> ClientResult<Vec<Task>> {
        self.get_json(&format!("/tasks/assignee/{user_id}")).await
    }

    /// Tasks assigned to the session user. Requires a session.
    pub async fn current_user_tasks(&self) -> ClientResult<Vec<Task>> {
        let user_id = self.session_user_id()?;
        self.tasks_by_assignee(user_id).await
    }

    /// `POST /tasks`
    ///
    /// Requires a session: `created_by_id` is overwritten with the logged-in
    /// user, and the due date is normalized to `YYYY-MM-DD`.
    pub async fn create_task(&self, mut task: TaskCreate) -> ClientResult<Task> {
        task.created_by_id = self.session_user_id()?;
        task.due_date = normalize_due_date(task.due_date);
        self.send_json(Method::POST, "/tasks", Some(&task)).await
    }

    /// `PUT /tasks/{id}`
    pub async fn update_task(&self, id: i64, mut update: TaskUpdate) -> ClientResult<Task> {
        update.due_date = normalize_due_date(update.due_date);
        self.send_json(Method::PUT, &format!("/tasks/{id}"), Some(&update)).await
    }

    /// `PUT /tasks/{id}/assign/{userId}`
    pub async fn assign_task(&self, id: i64, user_id: i64) -> ClientResult<Task> {
        self.send_json::<Task, ()>(Method::PUT, &format!("/tasks/{id}/assign/{user_id}"), None)
            .await
    }

    /// `PUT /tasks/{id}/status/{status}`
    pub async fn update_task_status(
        &self,
        id: i64,
        status: TaskStatusCode,
    ) -> ClientResult<Task> {
        self.send_json::<Task, ()>(Method::PUT, &format!("/tasks/{id}/status/{status}"), None)
            .await
    }

    /// `DELETE /tasks/{id}`
    pub async fn delete_task(&self, id: i64) -> ClientResult<()> {
        self.send_no_content::<()>(Method::DELETE, &format!("/tasks/{id}"), None).await
    }

    // ── Task history ──────────────────────────────────────────────────

    /// `GET /task-history/task/{taskId}`
    pub async fn task_history(&self, task_id: i64) -> ClientResult<Vec<TaskHistory>> {
        self.get_json(&format!("/task-history/task/{task_id}")).await
    }
}
