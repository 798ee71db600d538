use clap::{Args, Parser, Subcommand};

use crate::metadata::{PKG_DESCRIPTION, PKG_NAME, PKG_VERSION};

#[derive(Parser, Debug, Clone)]
#[command(name = PKG_NAME)]
#[command(version = PKG_VERSION)]
#[command(about = PKG_DESCRIPTION, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the platform API
    #[arg(
        long,
        env = "LEARNLOOP_API_URL",
        default_value = "http://localhost:8081/api",
        global = true
    )]
    pub api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "LEARNLOOP_API_TOKEN", global = true)]
    pub token: Option<String>,

    /// Act as this user id instead of the stored session
    #[arg(long, env = "LEARNLOOP_USER_ID", global = true)]
    pub user: Option<String>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse and manage learning plans
    Plans {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Browse and manage progress updates
    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },
    /// Read and manage notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationCommand,
    },
    /// Manage the stored session identity
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlanCommand {
    /// List learning plans
    List {
        /// Server-side filter, e.g. "category=devops"
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show one plan in full
    Show { id: String },
    /// Create a plan from a JSON draft ("-" reads stdin)
    Create {
        /// Draft file path
        #[arg(short = 'f', long = "file", default_value = "-")]
        file: String,
    },
    /// Replace a plan from a JSON draft ("-" reads stdin)
    Edit {
        id: String,
        /// Draft file path
        #[arg(short = 'f', long = "file", default_value = "-")]
        file: String,
    },
    /// Delete a plan you own
    Delete { id: String },
    /// Print the JSON schema for plan drafts
    Schema,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProgressCommand {
    /// List progress updates
    List {
        /// Server-side filter, e.g. "userId=u42"
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show one progress update in full
    Show { id: String },
    /// Share a progress update from a JSON draft ("-" reads stdin)
    Create {
        /// Draft file path
        #[arg(short = 'f', long = "file", default_value = "-")]
        file: String,
    },
    /// Replace a progress update from a JSON draft ("-" reads stdin)
    Edit {
        id: String,
        /// Draft file path
        #[arg(short = 'f', long = "file", default_value = "-")]
        file: String,
    },
    /// Delete a progress update you own
    Delete { id: String },
    /// Print the JSON schema for progress drafts
    Schema,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NotificationCommand {
    /// List notifications for the current user
    List {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Mark one notification as read
    Read { id: String },
    /// Mark every notification as read
    ReadAll,
    /// Delete a notification
    Remove { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    /// Store the user id that ownership checks run against
    Login { user_id: String },
    /// Forget the stored identity
    Logout,
    /// Show the stored identity
    Whoami,
}
