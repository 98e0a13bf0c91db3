use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{EventCommands, ScheduleCommands};
use crate::commands::shared::dates::{parse_instant, parse_time};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd event`.
pub async fn handle_event(
    action: &EventCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EventCommands::Create {
            title,
            start,
            end,
            description,
            event_type,
            recurring,
            pipeline,
        } => {
            let start = parse_instant(start)?;
            let end = end.as_deref().map(parse_instant).transpose()?;
            let event = ctx
                .service
                .create_event(
                    title,
                    description.as_deref(),
                    start,
                    end,
                    event_type.as_deref(),
                    recurring.as_deref(),
                    pipeline.as_deref(),
                )
                .await?;
            output(&event, flags.format)
        }
        EventCommands::Get { id } => {
            let event = ctx.service.get_event(id).await?;
            output(&event, flags.format)
        }
        EventCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let events = ctx.service.upcoming_events(Utc::now(), limit).await?;
            output(&events, flags.format)
        }
        EventCommands::Delete { id } => {
            ctx.service.delete_event(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

/// Handle `mgd schedule`.
pub async fn handle_schedule(
    action: &ScheduleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScheduleCommands::Add {
            day,
            start,
            end,
            activity,
            category,
            notes,
        } => {
            let start = parse_time(start)?;
            let end = parse_time(end)?;
            let block = ctx
                .service
                .add_schedule_block(
                    *day,
                    start,
                    end,
                    activity,
                    category.as_deref(),
                    notes.as_deref(),
                )
                .await?;
            output(&block, flags.format)
        }
        ScheduleCommands::List { day } => {
            let blocks = ctx.service.list_schedule_blocks(*day).await?;
            output(&blocks, flags.format)
        }
        ScheduleCommands::Delete { id } => {
            ctx.service.delete_schedule_block(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
