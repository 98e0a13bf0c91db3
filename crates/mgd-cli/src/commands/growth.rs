use anyhow::Context;

use mgd_core::entities::GoalNote;
use mgd_core::enums::GoalStatus;
use mgd_db::repos::reflection_prompt_for_date;
use mgd_db::updates::GoalUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{GoalCommands, ReflectCommands};
use crate::commands::shared::dates::{date_or_today, parse_date};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd goal`.
pub async fn handle_goal(
    action: &GoalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GoalCommands::Create {
            title,
            description,
            category,
            target,
            sort_order,
        } => {
            let target = target.as_deref().map(parse_date).transpose()?;
            let goal = ctx
                .service
                .create_goal(
                    title,
                    description.as_deref(),
                    category.as_deref(),
                    target,
                    *sort_order,
                )
                .await?;
            output(&goal, flags.format)
        }
        GoalCommands::Get { id } => {
            let goal = ctx.service.get_goal(id).await?;
            output(&goal, flags.format)
        }
        GoalCommands::List { status } => {
            let status = status
                .as_deref()
                .map(|s| parse_enum::<GoalStatus>(s, "status"))
                .transpose()?;
            let goals = ctx.service.list_goals(status).await?;
            output(&goals, flags.format)
        }
        GoalCommands::Update {
            id,
            title,
            description,
            category,
            status,
            target,
        } => {
            let mut update = GoalUpdateBuilder::new();
            if let Some(title) = title {
                update = update.title(title.clone());
            }
            if let Some(description) = description {
                update = update.description(Some(description.clone()));
            }
            if let Some(category) = category {
                update = update.category(Some(category.clone()));
            }
            if let Some(status) = status {
                update = update.status(parse_enum::<GoalStatus>(status, "status")?);
            }
            if let Some(target) = target {
                update = update.target_date(Some(parse_date(target)?));
            }
            let goal = ctx.service.update_goal(id, update.build()).await?;
            output(&goal, flags.format)
        }
        GoalCommands::Delete { id } => {
            ctx.service.delete_goal(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

/// Handle `mgd reflect`.
pub async fn handle_reflect(
    action: &ReflectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReflectCommands::Prompt { date } => {
            let date = date_or_today(date.as_deref())?;
            let prompt = reflection_prompt_for_date(date);
            output(
                &serde_json::json!({ "date": date, "prompt": prompt }),
                flags.format,
            )
        }
        ReflectCommands::Save {
            date,
            wins,
            struggles,
            gratitude,
            tomorrow,
            goal_notes,
            themes,
        } => {
            let date = date_or_today(date.as_deref())?;
            let goal_notes = goal_notes
                .iter()
                .map(|raw| parse_goal_note(raw))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let reflection = ctx
                .service
                .save_reflection(
                    date,
                    wins.as_deref(),
                    struggles.as_deref(),
                    goal_notes,
                    gratitude.as_deref(),
                    tomorrow.as_deref(),
                    themes.clone(),
                )
                .await?;
            output(&reflection, flags.format)
        }
        ReflectCommands::Show { date } => {
            let date = date_or_today(date.as_deref())?;
            let reflection = ctx
                .service
                .get_reflection(date)
                .await?
                .with_context(|| format!("no reflection saved for {date}"))?;
            output(&reflection, flags.format)
        }
        ReflectCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let reflections = ctx.service.list_reflections(limit).await?;
            output(&reflections, flags.format)
        }
    }
}

fn parse_goal_note(raw: &str) -> anyhow::Result<GoalNote> {
    let (goal_id, note) = raw
        .split_once('=')
        .with_context(|| format!("invalid goal note '{raw}' (expected goal-id=note)"))?;
    Ok(GoalNote {
        goal_id: goal_id.trim().to_string(),
        note: note.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_goal_note;

    #[test]
    fn goal_note_splits_on_first_equals() {
        let note = parse_goal_note("gol-ab12cd34=made progress = slowly").expect("should parse");
        assert_eq!(note.goal_id, "gol-ab12cd34");
        assert_eq!(note.note, "made progress = slowly");
    }

    #[test]
    fn goal_note_without_equals_errors() {
        assert!(parse_goal_note("gol-ab12cd34 no note").is_err());
    }
}
