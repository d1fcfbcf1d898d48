//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need an API key: `config` and
//! `completions` run without one, everything else receives a client built
//! from the resolved settings.

use ellie_api_rs::client::EllieClient;

use crate::cli::{
    Cli, Commands, ConfigCommands, LabelsCommands, ListsCommands, Shell, TaskFieldArgs,
    TasksCommands, UsersCommands,
};
use crate::commands::labels::LabelsCreateOptions;
use crate::commands::tasks::{CreateOptions, TaskFields, UpdateOptions};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that can be executed without authentication.
pub trait NoAuthCommand {
    /// Execute the command without requiring an API key.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that require authentication.
#[allow(async_fn_in_trait)]
pub trait AuthCommand {
    /// Execute the command with a client carrying the resolved API key.
    async fn execute(&self, ctx: &CommandContext, client: &EllieClient) -> Result<()>;
}

/// Commands that don't require authentication.
#[derive(Debug)]
pub enum NoAuthDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> NoAuthDispatch<'a> {
    /// Try to create a no-auth dispatch from the CLI command.
    /// Returns None if the command requires authentication.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoAuthCommand for NoAuthDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("ellie - CLI for the Ellie daily planner");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::SetApiKey { key }) => {
            commands::config::execute_set_api_key(ctx, key)
        }
        Some(ConfigCommands::SetBaseUrl { url }) => {
            commands::config::execute_set_base_url(ctx, url)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that require authentication.
#[derive(Debug)]
pub enum AuthDispatch<'a> {
    Tasks(&'a TasksCommands),
    Labels(&'a Option<LabelsCommands>),
    Lists(&'a Option<ListsCommands>),
    Users(&'a UsersCommands),
}

impl<'a> AuthDispatch<'a> {
    /// Create an auth dispatch from the CLI command.
    /// Returns None for commands handled by [`NoAuthDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Tasks { command }) => Some(Self::Tasks(command)),
            Some(Commands::Labels { command }) => Some(Self::Labels(command)),
            Some(Commands::Lists { command }) => Some(Self::Lists(command)),
            Some(Commands::Users { command }) => Some(Self::Users(command)),
            // Already handled by NoAuthDispatch
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }

    /// Checks arguments that must not be blank.
    ///
    /// Runs before the API key is resolved, so a bad invocation fails the same
    /// way whether or not a key is configured.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Tasks(TasksCommands::Create { desc, fields }) => {
                create_options(desc, fields).validate()
            }
            Self::Tasks(TasksCommands::List { date, .. } | TasksCommands::Agenda { date }) => {
                commands::require_non_blank(date, "--date")
            }
            Self::Tasks(TasksCommands::ByList { list_id }) => {
                commands::require_non_blank(list_id, "--list-id")
            }
            Self::Labels(Some(LabelsCommands::Create { name, color })) => LabelsCreateOptions {
                name: name.clone(),
                color: color.clone(),
            }
            .validate(),
            _ => Ok(()),
        }
    }
}

impl AuthCommand for AuthDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, client: &EllieClient) -> Result<()> {
        match self {
            Self::Tasks(command) => dispatch_tasks(ctx, client, command).await,
            Self::Labels(command) => dispatch_labels(ctx, client, command).await,
            Self::Lists(Some(ListsCommands::List) | None) => {
                commands::lists::execute_list(ctx, client).await
            }
            Self::Users(UsersCommands::Me) => commands::users::execute_me(ctx, client).await,
            Self::Users(UsersCommands::Usage) => {
                commands::users::execute_usage(ctx, client).await
            }
        }
    }
}

fn task_fields(args: &TaskFieldArgs) -> TaskFields {
    TaskFields {
        date: args.date.clone(),
        start: args.start.clone(),
        estimated_time: args.estimated_time,
        list_id: args.list_id.clone(),
        label: args.label.clone(),
        priority: args.priority,
    }
}

fn create_options(desc: &str, fields: &TaskFieldArgs) -> CreateOptions {
    CreateOptions {
        description: desc.to_string(),
        fields: task_fields(fields),
    }
}

/// Dispatch task subcommands.
async fn dispatch_tasks(
    ctx: &CommandContext,
    client: &EllieClient,
    command: &TasksCommands,
) -> Result<()> {
    use commands::tasks;

    match command {
        TasksCommands::Get { task_id } => tasks::execute_get(ctx, client, task_id).await,
        TasksCommands::List { date, timezone } => {
            tasks::execute_list(ctx, client, date, timezone.as_deref()).await
        }
        TasksCommands::ByList { list_id } => tasks::execute_by_list(ctx, client, list_id).await,
        TasksCommands::Braindump => tasks::execute_braindump(ctx, client).await,
        TasksCommands::Create { desc, fields } => {
            let opts = create_options(desc, fields);
            tasks::execute_create(ctx, client, &opts).await
        }
        TasksCommands::Update {
            task_id,
            desc,
            complete,
            fields,
        } => {
            let opts = UpdateOptions {
                task_id: task_id.clone(),
                description: desc.clone(),
                complete: *complete,
                fields: task_fields(fields),
            };
            tasks::execute_update(ctx, client, &opts).await
        }
        TasksCommands::Complete { task_id } => {
            tasks::execute_complete(ctx, client, task_id).await
        }
        TasksCommands::Delete { task_id } => tasks::execute_delete(ctx, client, task_id).await,
        TasksCommands::Search { query } => tasks::execute_search(ctx, client, query).await,
        TasksCommands::Agenda { date } => tasks::execute_agenda(ctx, client, date).await,
    }
}

/// Dispatch label subcommands.
async fn dispatch_labels(
    ctx: &CommandContext,
    client: &EllieClient,
    command: &Option<LabelsCommands>,
) -> Result<()> {
    match command {
        Some(LabelsCommands::List) | None => commands::labels::execute_list(ctx, client).await,
        Some(LabelsCommands::Create { name, color }) => {
            let opts = LabelsCreateOptions {
                name: name.clone(),
                color: color.clone(),
            };
            commands::labels::execute_create(ctx, client, &opts).await
        }
    }
}
