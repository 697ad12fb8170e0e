use clap::{Args, Parser, Subcommand};
use daily_domain::TaskId;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A command-line to-do list", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the task data file (or set DAILY_TODO_FILE env var)
    #[arg(value_name = "FILE", env = "DAILY_TODO_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List tasks, optionally filtered by a title search
    List(ListArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: TaskId,
    },
    /// Update a task
    Update(UpdateArgs),
    /// Toggle a task's completion flag
    Toggle {
        #[arg(long)]
        id: TaskId,
    },
    /// Remove a task
    Remove {
        #[arg(long)]
        id: TaskId,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Due date as YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub due_date: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive title substring filter
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub id: TaskId,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date as YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long)]
    pub clear_due_date: bool,
}
