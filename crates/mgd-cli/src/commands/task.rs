use mgd_core::enums::{TaskPriority, TaskStatus};
use mgd_db::updates::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::dates::parse_date;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            title,
            description,
            due,
            priority,
            category,
            pipeline,
        } => {
            let due = due.as_deref().map(parse_date).transpose()?;
            let priority: TaskPriority = parse_enum(priority, "priority")?;
            let task = ctx
                .service
                .create_task(
                    title,
                    description.as_deref(),
                    due,
                    priority,
                    category.as_deref(),
                    pipeline.as_deref(),
                )
                .await?;
            output(&task, flags.format)
        }
        TaskCommands::Get { id } => {
            let task = ctx.service.get_task(id).await?;
            output(&task, flags.format)
        }
        TaskCommands::List { status, limit } => {
            let status = status
                .as_deref()
                .map(|s| parse_enum::<TaskStatus>(s, "status"))
                .transpose()?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let tasks = ctx.service.list_tasks(status, limit).await?;
            output(&tasks, flags.format)
        }
        TaskCommands::Update {
            id,
            title,
            description,
            due,
            priority,
            status,
            category,
        } => {
            let mut update = TaskUpdateBuilder::new();
            if let Some(title) = title {
                update = update.title(title.clone());
            }
            if let Some(description) = description {
                update = update.description(Some(description.clone()));
            }
            if let Some(due) = due {
                update = update.due_date(Some(parse_date(due)?));
            }
            if let Some(priority) = priority {
                update = update.priority(parse_enum::<TaskPriority>(priority, "priority")?);
            }
            if let Some(status) = status {
                update = update.status(parse_enum::<TaskStatus>(status, "status")?);
            }
            if let Some(category) = category {
                update = update.category(Some(category.clone()));
            }
            let task = ctx.service.update_task(id, update.build()).await?;
            output(&task, flags.format)
        }
        TaskCommands::Complete { id } => {
            let task = ctx.service.complete_task(id).await?;
            output(&task, flags.format)
        }
        TaskCommands::Delete { id } => {
            ctx.service.delete_task(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
