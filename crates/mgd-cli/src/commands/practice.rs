use crate::cli::GlobalFlags;
use crate::cli::subcommands::{JournalCommands, PracticeCommands};
use crate::commands::shared::dates::date_or_today;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd practice`.
pub async fn handle_practice(
    action: &PracticeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PracticeCommands::Log {
            pipeline,
            date,
            minutes,
            practice_type,
            vocal,
            vitality,
            visual,
            notes,
        } => {
            let date = date_or_today(date.as_deref())?;
            let log = ctx
                .service
                .log_practice(
                    pipeline.as_deref(),
                    date,
                    *minutes,
                    practice_type.as_deref(),
                    *vocal,
                    *vitality,
                    *visual,
                    notes.as_deref(),
                )
                .await?;
            output(&log, flags.format)
        }
        PracticeCommands::List { pipeline, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let logs = ctx.service.list_practice(pipeline.as_deref(), limit).await?;
            output(&logs, flags.format)
        }
    }
}

/// Handle `mgd journal`.
pub async fn handle_journal(
    action: &JournalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JournalCommands::Add {
            pipeline,
            date,
            audience,
            landed,
            didnt,
            reactions,
            rating,
            lessons,
        } => {
            let date = date_or_today(date.as_deref())?;
            let entry = ctx
                .service
                .add_delivery(
                    pipeline.as_deref(),
                    date,
                    audience.as_deref(),
                    landed.as_deref(),
                    didnt.as_deref(),
                    reactions.as_deref(),
                    *rating,
                    lessons.as_deref(),
                )
                .await?;
            output(&entry, flags.format)
        }
        JournalCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let entries = ctx.service.list_deliveries(limit).await?;
            output(&entries, flags.format)
        }
    }
}
