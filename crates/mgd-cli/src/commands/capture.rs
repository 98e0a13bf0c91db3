use chrono::Local;
use serde::Serialize;

use mgd_db::repos::prompt_for_date;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaptureCommands;
use crate::commands::shared::dates::date_or_today;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DailyPrompt {
    day: i64,
    prompt: &'static str,
}

/// Handle `mgd capture`.
pub async fn handle(
    action: &CaptureCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CaptureCommands::Prompt { date } => {
            let date = date_or_today(date.as_deref())?;
            let (day, prompt) = prompt_for_date(date);
            output(&DailyPrompt { day, prompt }, flags.format)
        }
        CaptureCommands::Add {
            response,
            emotion,
            free,
            date,
        } => {
            let date = date_or_today(date.as_deref())?;
            // --free bypasses the rotation; day 0 marks a free-form capture.
            let (day, prompt) = match free {
                Some(prompt) => (0, prompt.as_str()),
                None => prompt_for_date(date),
            };
            let capture = ctx
                .service
                .add_capture(day, prompt, response, emotion.as_deref(), date)
                .await?;
            output(&capture, flags.format)
        }
        CaptureCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let captures = ctx.service.list_captures(limit).await?;
            output(&captures, flags.format)
        }
        CaptureCommands::Promote { id, title, tags } => {
            let story = ctx.service.promote_capture(id, title, tags.clone()).await?;
            output(&story, flags.format)
        }
        CaptureCommands::Stats => {
            let stats = ctx
                .service
                .capture_stats(Local::now().date_naive())
                .await?;
            output(&stats, flags.format)
        }
    }
}
