use crate::handlers::auth;
use anyhow::{Result, ensure};
use pmt::domain::project::Project;
use pmt::prelude::*;

pub async fn list(client: &PmtClient) -> Result<()> {
    let projects = client.projects().await?;
    if projects.is_empty() {
        println!("No projects.");
        return Ok(());
    }

    for project in projects {
        println!(
            "#{:<5} {:<30} start {:<20} members {}",
            project.id.unwrap_or_default(),
            format_project_name(&project.name),
            format_date(project.start_date.as_str()),
            format_number(project.member_count.unwrap_or_default() as f64),
        );
    }
    Ok(())
}

pub async fn show(client: &PmtClient, id: i64) -> Result<()> {
    let project = client.project(id).await?;

    println!(
        "{} (start {})",
        format_project_name(&project.name),
        format_date(project.start_date.as_str())
    );
    if let Some(description) = project.description.as_deref() {
        println!("  {}", format_description(description, DESCRIPTION_PREVIEW_LEN));
    }

    let members = client.project_members(id).await?;
    if members.is_empty() {
        println!("  (no members)");
        return Ok(());
    }
    for member in members {
        let username = member.user.as_ref().map_or("?", |u| u.username.as_str());
        let role = member
            .role
            .as_ref()
            .map_or_else(|| "-".to_owned(), |r| format_user_role(&r.name));
        println!("  - {} [{role}]", format_username(username));
    }
    Ok(())
}

pub async fn create(
    client: &PmtClient,
    credentials: (Option<&str>, Option<&str>),
    name: String,
    description: Option<String>,
    start_date: String,
) -> Result<()> {
    ensure!(is_valid_project_name(&name), "project name must be 1-50 characters");
    if let Some(description) = description.as_deref() {
        ensure!(is_valid_description(description), "description must be at most 500 characters");
    }
    ensure!(
        is_valid_project_start_date(&start_date),
        "start date must be today or later (YYYY-MM-DD)"
    );

    auth::ensure_login(client, credentials.0, credentials.1).await?;

    let created = client
        .create_project(&Project {
            id: None,
            name: format_project_name(&name),
            description,
            start_date,
            created_by: None,
            created_at: None,
            updated_at: None,
            created_by_user: None,
            member_count: None,
        })
        .await?;

    println!("Project #{} created", created.id.unwrap_or_default());
    Ok(())
}
