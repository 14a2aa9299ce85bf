use crate::handlers::auth;
use anyhow::{Result, anyhow, ensure};
use pmt::domain::codes::{TaskPriority, TaskStatusCode};
use pmt::domain::task::{Task, TaskCreate};
use pmt::prelude::*;

fn status_label(task: &Task) -> String {
    task.status_name
        .as_deref()
        .or(task.status.as_ref().map(|s| s.name.as_str()))
        .map_or_else(|| format!("status {}", task.status_id), format_task_status)
}

fn print_task(task: &Task) {
    let due = task.due_date.as_deref().map(format_date).unwrap_or_default();
    let overdue = task.due_date.as_deref().is_some_and(is_past)
        && !matches!(task.status_name.as_deref(), Some("DONE" | "CANCELLED"));

    println!(
        "#{:<5} {:<40} [{}] {}{}{}",
        task.id.unwrap_or_default(),
        format_task_title(&task.title),
        status_label(task),
        task.priority.label(),
        if due.is_empty() { String::new() } else { format!(", due {due}") },
        if overdue { " (overdue)" } else { "" },
    );
}

pub async fn list(
    client: &PmtClient,
    credentials: (Option<&str>, Option<&str>),
    project: Option<i64>,
    mine: bool,
) -> Result<()> {
    let tasks = if mine {
        auth::ensure_login(client, credentials.0, credentials.1).await?;
        client.current_user_tasks().await?
    } else if let Some(project_id) = project {
        client.tasks_by_project(project_id).await?
    } else {
        client.tasks().await?
    };

    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for task in &tasks {
        print_task(task);
    }
    Ok(())
}

pub async fn create(
    client: &PmtClient,
    credentials: (Option<&str>, Option<&str>),
    project: i64,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due: Option<String>,
    assignee: Option<i64>,
) -> Result<()> {
    ensure!(is_valid_title(&title), "title must be 1-100 characters");
    if let Some(description) = description.as_deref() {
        ensure!(is_valid_description(description), "description must be at most 500 characters");
    }
    if let Some(due) = due.as_deref() {
        ensure!(is_valid_task_due_date(due), "due date must lie in the future (YYYY-MM-DD)");
    }

    let priority = match priority.as_deref() {
        Some(code) => code.parse::<TaskPriority>().map_err(|_| {
            anyhow!("unknown priority '{code}' (expected LOW, MEDIUM, HIGH or URGENT)")
        })?,
        None => TaskPriority::default(),
    };

    auth::ensure_login(client, credentials.0, credentials.1).await?;

    let created = client
        .create_task(TaskCreate {
            title: format_task_title(&title),
            description,
            status: None,
            priority,
            due_date: due,
            project_id: project,
            assigned_to_id: assignee,
            // Filled in from the session by the client.
            created_by_id: 0,
        })
        .await?;

    println!("Task #{} created in project {project}", created.id.unwrap_or_default());
    Ok(())
}

pub async fn assign(client: &PmtClient, id: i64, user_id: i64) -> Result<()> {
    ensure!(is_valid_id(user_id as f64), "'{user_id}' is not a valid user id");

    let task = client.assign_task(id, user_id).await?;
    let assignee = task
        .assigned_to_name
        .as_deref()
        .map_or_else(|| user_id.to_string(), format_username);
    println!("Task #{id} assigned to {assignee}");
    Ok(())
}

pub async fn status(client: &PmtClient, id: i64, status: String) -> Result<()> {
    let code = status.parse::<TaskStatusCode>().map_err(|_| {
        anyhow!("unknown status '{status}' (expected TODO, IN_PROGRESS, DONE or CANCELLED)")
    })?;

    client.update_task_status(id, code).await?;
    println!("Task #{id} is now {}", code.label());
    Ok(())
}

pub async fn history(client: &PmtClient, id: i64) -> Result<()> {
    let entries = client.task_history(id).await?;
    if entries.is_empty() {
        println!("No history for task #{id}.");
        return Ok(());
    }

    for entry in entries {
        let when = entry.created_at.as_deref().map(format_date_time).unwrap_or_default();
        let change = match (entry.old_value.as_deref(), entry.new_value.as_deref()) {
            (Some(old), Some(new)) => format!(": {old} -> {new}"),
            (None, Some(new)) => format!(": {new}"),
            _ => String::new(),
        };
        println!("{when}  {}{change}", entry.action);
    }
    Ok(())
}
