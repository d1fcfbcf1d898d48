//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ellie CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// ellie - A command-line interface for the Ellie daily planner
#[derive(Parser, Debug)]
#[command(name = "ellie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output (also honors NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file location (default: <config dir>/ellie/config.yaml)
    #[arg(long, global = true, env = "ELLIE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Tasks {
        #[command(subcommand)]
        command: TasksCommands,
    },

    /// Manage labels
    Labels {
        #[command(subcommand)]
        command: Option<LabelsCommands>,
    },

    /// Manage lists
    Lists {
        #[command(subcommand)]
        command: Option<ListsCommands>,
    },

    /// User operations
    Users {
        #[command(subcommand)]
        command: UsersCommands,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TasksCommands {
    /// Get a task by ID
    Get {
        /// Task ID
        task_id: String,
    },

    /// List tasks scheduled on a date
    List {
        /// Date in YYYY-MM-DD format
        #[arg(long, required = true)]
        date: String,

        /// Time zone (e.g., America/New_York)
        #[arg(long)]
        timezone: Option<String>,
    },

    /// List tasks in a list
    ByList {
        /// List ID
        #[arg(long = "list-id", required = true)]
        list_id: String,
    },

    /// Get unscheduled tasks
    Braindump,

    /// Create a new task
    Create {
        /// Task description
        #[arg(long, required = true)]
        desc: String,

        #[command(flatten)]
        fields: TaskFieldArgs,
    },

    /// Update a task (only the flags given are sent)
    Update {
        /// Task ID
        task_id: String,

        /// Task description
        #[arg(long)]
        desc: Option<String>,

        /// Mark as complete (`--complete` or `--complete=false`)
        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        complete: Option<bool>,

        #[command(flatten)]
        fields: TaskFieldArgs,
    },

    /// Mark a task as complete
    Complete {
        /// Task ID
        task_id: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        task_id: String,
    },

    /// Search tasks
    Search {
        /// Search query
        query: String,
    },

    /// Get the daily agenda, recurring tasks included
    ///
    /// Unlike `list`, this shows the full agenda for the date.
    Agenda {
        /// Date in YYYY-MM-DD format
        #[arg(long, required = true)]
        date: String,
    },
}

/// Optional task fields shared by `create` and `update`
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TaskFieldArgs {
    /// Date in YYYY-MM-DD format
    #[arg(long)]
    pub date: Option<String>,

    /// Start time
    #[arg(long)]
    pub start: Option<String>,

    /// Estimated time in seconds
    #[arg(long = "estimated-time", value_name = "SECONDS")]
    pub estimated_time: Option<i64>,

    /// List ID
    #[arg(long = "list-id")]
    pub list_id: Option<String>,

    /// Label ID
    #[arg(long)]
    pub label: Option<String>,

    /// Priority (1=low, 4=urgent)
    #[arg(long)]
    pub priority: Option<i32>,
}

/// Label subcommands
#[derive(Subcommand, Debug)]
pub enum LabelsCommands {
    /// List all labels (default)
    List,

    /// Create a new label
    Create {
        /// Label name
        #[arg(long, required = true)]
        name: String,

        /// Label color in hex format, e.g. #FF5733
        #[arg(long, required = true)]
        color: String,
    },
}

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum ListsCommands {
    /// List all lists (default)
    List,
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Show the current user
    Me,

    /// Show API usage statistics
    Usage,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration (default)
    Show,

    /// Save the API key to the config file
    SetApiKey {
        /// API key
        key: String,
    },

    /// Save the API base URL to the config file
    SetBaseUrl {
        /// Base URL, e.g. https://api.ellieplanner.com
        url: String,
    },

    /// Print the config file path
    Path,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
