use clap::{ArgAction, Parser, Subcommand};

/// PMT - project management from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pmt", version, about)]
pub struct Cli {
    /// Config file base path (default: `pmt` in the working directory).
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Account email for commands that need a session.
    #[arg(long, global = true, env = "PMT_EMAIL")]
    pub email: Option<String>,

    /// Account password for commands that need a session.
    #[arg(long, global = true, env = "PMT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Increase log verbosity (-v: info, -vv: debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and print the session identity
    Login,
    /// Alias of `login`: print who the credentials belong to
    Whoami,
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        new_email: String,
        #[arg(long)]
        new_password: String,
    },
    /// Project operations
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Task operations
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Notification inbox
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectAction {
    /// List all projects
    List,
    /// Show one project with its members
    Show { id: i64 },
    /// Create a project (requires a session)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Start date, `YYYY-MM-DD`; today or later.
        #[arg(long)]
        start_date: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaskAction {
    /// List tasks: all of them, one project's, or the session user's
    List {
        #[arg(long, conflicts_with = "mine")]
        project: Option<i64>,
        /// Only tasks assigned to the session user (requires a session).
        #[arg(long)]
        mine: bool,
    },
    /// Create a task in a project (requires a session)
    Create {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// LOW, MEDIUM, HIGH or URGENT (default MEDIUM), any casing.
        #[arg(long)]
        priority: Option<String>,
        /// Due date, `YYYY-MM-DD`; must lie in the future.
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        assignee: Option<i64>,
    },
    /// Reassign a task
    Assign { id: i64, user_id: i64 },
    /// Move a task to another status
    Status {
        id: i64,
        /// TODO, IN_PROGRESS, DONE or CANCELLED, any casing.
        status: String,
    },
    /// Print a task's change history
    History { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum NotificationAction {
    /// List a user's notifications
    List {
        #[arg(long)]
        user: i64,
        /// Only unread entries.
        #[arg(long)]
        unread: bool,
    },
    /// Mark one notification as read
    Read { id: i64 },
    /// Mark all of a user's notifications as read
    ReadAll {
        #[arg(long)]
        user: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_login_with_global_credentials() {
        let cli = Cli::try_parse_from([
            "pmt",
            "--email",
            "ada@example.com",
            "--password",
            "secret",
            "login",
        ])
        .unwrap();
        assert_eq!(cli.email.as_deref(), Some("ada@example.com"));
        assert!(matches!(cli.command, Commands::Login));
    }

    #[test]
    fn parses_task_listing_filters() {
        let cli = Cli::try_parse_from(["pmt", "tasks", "list", "--project", "7"]).unwrap();
        match cli.command {
            Commands::Tasks { action: TaskAction::List { project, mine } } => {
                assert_eq!(project, Some(7));
                assert!(!mine);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn project_and_mine_filters_conflict() {
        let result =
            Cli::try_parse_from(["pmt", "tasks", "list", "--project", "7", "--mine"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_status_change() {
        let cli = Cli::try_parse_from(["pmt", "tasks", "status", "42", "done"]).unwrap();
        match cli.command {
            Commands::Tasks { action: TaskAction::Status { id, status } } => {
                assert_eq!(id, 42);
                assert_eq!(status, "done");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
