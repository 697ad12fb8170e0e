use crate::cli::{AddArgs, Commands, ListArgs, UpdateArgs};
use crate::context::TaskStore;
use crate::output;
use daily_domain::{FieldUpdate, TaskOperations, TaskUpdate};

pub async fn handle(ctx: &mut TaskStore, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => handle_add(ctx, args).await?,
        Commands::List(args) => handle_list(ctx, args)?,
        Commands::Get { id } => match ctx.get_task(id)? {
            Some(task) => output::output_success(&task),
            None => output::output_error(&format!("Task not found: {}", id)),
        },
        Commands::Update(args) => handle_update(ctx, args).await?,
        Commands::Toggle { id } => {
            let task = ctx.toggle_task(id)?;
            ctx.save().await?;
            match task {
                Some(task) => output::output_success(&task),
                // Unknown id is a no-op, not an error
                None => output::output_success(serde_json::json!({"toggled": null})),
            }
        }
        Commands::Remove { id } => {
            ctx.remove_task(id)?;
            ctx.save().await?;
            output::output_success(serde_json::json!({"removed": id}));
        }
        Commands::Completions { .. } => {
            unreachable!("completions are handled before the store loads")
        }
    }
    Ok(())
}

async fn handle_add(ctx: &mut TaskStore, args: AddArgs) -> anyhow::Result<()> {
    let due_date = match &args.due_date {
        Some(d) => Some(parse_datetime(d).map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };
    let task = ctx.add_task(args.title, args.description, due_date)?;
    ctx.save().await?;
    output::output_success(&task);
    Ok(())
}

fn handle_list(ctx: &TaskStore, args: ListArgs) -> anyhow::Result<()> {
    let tasks = match &args.search {
        Some(query) => ctx.search_tasks(query)?,
        None => ctx.list_tasks()?,
    };
    output::output_list(tasks);
    Ok(())
}

async fn handle_update(ctx: &mut TaskStore, args: UpdateArgs) -> anyhow::Result<()> {
    let updates = build_task_update(&args).map_err(|e| anyhow::anyhow!(e))?;
    let task = ctx.update_task(args.id, updates)?;
    ctx.save().await?;
    output::output_success(&task);
    Ok(())
}

fn build_task_update(args: &UpdateArgs) -> Result<TaskUpdate, String> {
    Ok(TaskUpdate {
        title: args.title.clone(),
        description: args.description.clone(),
        due_date: if args.clear_due_date {
            FieldUpdate::Clear
        } else {
            match &args.due_date {
                Some(d) => FieldUpdate::Set(parse_datetime(d)?),
                None => FieldUpdate::NoChange,
            }
        },
    })
}

fn parse_datetime(s: &str) -> Result<chrono::DateTime<chrono::Utc>, String> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .or_else(|_| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ())
                .and_then(|d| d.and_hms_opt(0, 0, 0).ok_or(()))
                .map(|dt| dt.and_utc())
        })
        .map_err(|_| {
            format!(
                "Invalid date '{}'. Supported formats: YYYY-MM-DD or RFC 3339 (e.g., 2024-01-15T10:30:00Z)",
                s
            )
        })
}
