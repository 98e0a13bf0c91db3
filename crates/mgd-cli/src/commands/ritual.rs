use chrono::Local;
use serde::Serialize;

use mgd_core::entities::Ritual;
use mgd_core::enums::RitualFrequency;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RitualCommands;
use crate::commands::shared::dates::date_or_today;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RitualToday {
    #[serde(flatten)]
    ritual: Ritual,
    done_today: bool,
}

/// Handle `mgd ritual`.
pub async fn handle(
    action: &RitualCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RitualCommands::Create {
            name,
            description,
            category,
            frequency,
            content,
            sort_order,
        } => {
            let frequency: RitualFrequency = parse_enum(frequency, "frequency")?;
            let ritual = ctx
                .service
                .create_ritual(
                    name,
                    description.as_deref(),
                    category.as_deref(),
                    frequency,
                    content.as_deref(),
                    *sort_order,
                )
                .await?;
            output(&ritual, flags.format)
        }
        RitualCommands::List { all } => {
            let today = Local::now().date_naive();
            let done: std::collections::HashSet<String> = ctx
                .service
                .ritual_completions_on(today)
                .await?
                .into_iter()
                .map(|c| c.ritual_id)
                .collect();
            let rituals = ctx
                .service
                .list_rituals(*all)
                .await?
                .into_iter()
                .map(|ritual| RitualToday {
                    done_today: done.contains(&ritual.id),
                    ritual,
                })
                .collect::<Vec<_>>();
            output(&rituals, flags.format)
        }
        RitualCommands::Complete { id, date, notes } => {
            let date = date_or_today(date.as_deref())?;
            let completion = ctx
                .service
                .complete_ritual(id, date, notes.as_deref())
                .await?;
            output(&completion, flags.format)
        }
        RitualCommands::Uncomplete { id, date } => {
            let date = date_or_today(date.as_deref())?;
            ctx.service.uncomplete_ritual(id, date).await?;
            output(
                &serde_json::json!({ "uncompleted": id, "date": date }),
                flags.format,
            )
        }
        RitualCommands::Streak { id } => {
            let today = Local::now().date_naive();
            let streak = ctx.service.ritual_streak(id, today).await?;
            output(
                &serde_json::json!({ "ritual": id, "streak": streak }),
                flags.format,
            )
        }
        RitualCommands::Deactivate { id } => {
            let ritual = ctx.service.deactivate_ritual(id).await?;
            output(&ritual, flags.format)
        }
    }
}
