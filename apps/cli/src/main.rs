#![allow(clippy::print_stdout, clippy::print_stderr)]

mod handlers;
mod models;

use crate::handlers::{auth, notifications, projects, tasks};
use crate::models::args::{Cli, Commands, NotificationAction, ProjectAction, TaskAction};

use anyhow::{Context, Result};
use clap::Parser;
use pmt::kernel::config::load_config;
use pmt::prelude::*;
use pmt_logger::{LevelFilter, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let _log = Logger::builder(env!("CARGO_PKG_NAME")).level(level).init()?;

    let cfg: ClientConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let client = PmtClient::new(&cfg)?;

    let credentials = (cli.email.as_deref(), cli.password.as_deref());

    match cli.command {
        Commands::Login | Commands::Whoami => {
            auth::login(&client, credentials.0, credentials.1).await?;
        }
        Commands::Register { username, new_email, new_password } => {
            auth::register(&client, username, new_email, new_password).await?;
        }
        Commands::Projects { action } => match action {
            ProjectAction::List => projects::list(&client).await?,
            ProjectAction::Show { id } => projects::show(&client, id).await?,
            ProjectAction::Create { name, description, start_date } => {
                projects::create(&client, credentials, name, description, start_date).await?;
            }
        },
        Commands::Tasks { action } => match action {
            TaskAction::List { project, mine } => {
                tasks::list(&client, credentials, project, mine).await?;
            }
            TaskAction::Create { project, title, description, priority, due, assignee } => {
                tasks::create(
                    &client,
                    credentials,
                    project,
                    title,
                    description,
                    priority,
                    due,
                    assignee,
                )
                .await?;
            }
            TaskAction::Assign { id, user_id } => tasks::assign(&client, id, user_id).await?,
            TaskAction::Status { id, status } => tasks::status(&client, id, status).await?,
            TaskAction::History { id } => tasks::history(&client, id).await?,
        },
        Commands::Notifications { action } => match action {
            NotificationAction::List { user, unread } => {
                notifications::list(&client, user, unread).await?;
            }
            NotificationAction::Read { id } => notifications::read(&client, id).await?,
            NotificationAction::ReadAll { user } => notifications::read_all(&client, user).await?,
        },
    }

    Ok(())
}
