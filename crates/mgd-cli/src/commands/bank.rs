use crate::cli::GlobalFlags;
use crate::cli::subcommands::{QuestionCommands, StoryCommands};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd story`.
pub async fn handle_story(
    action: &StoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StoryCommands::Add {
            title,
            content,
            tags,
            source,
            topics,
        } => {
            let story = ctx
                .service
                .add_story(
                    title,
                    content,
                    tags.clone(),
                    source.as_deref(),
                    topics.clone(),
                )
                .await?;
            output(&story, flags.format)
        }
        StoryCommands::Get { id } => {
            let story = ctx.service.get_story(id).await?;
            output(&story, flags.format)
        }
        StoryCommands::List { tag, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let stories = ctx.service.list_stories(tag.as_deref(), limit).await?;
            output(&stories, flags.format)
        }
        StoryCommands::Use { id, pipeline } => {
            let story = ctx.service.mark_story_used(id, pipeline).await?;
            output(&story, flags.format)
        }
        StoryCommands::Delete { id } => {
            ctx.service.delete_story(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

/// Handle `mgd question`.
pub async fn handle_question(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::Add {
            question,
            context,
            tags,
            topics,
        } => {
            let question = ctx
                .service
                .add_question(question, context.as_deref(), tags.clone(), topics.clone())
                .await?;
            output(&question, flags.format)
        }
        QuestionCommands::Get { id } => {
            let question = ctx.service.get_question(id).await?;
            output(&question, flags.format)
        }
        QuestionCommands::List { tag, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let questions = ctx.service.list_questions(tag.as_deref(), limit).await?;
            output(&questions, flags.format)
        }
        QuestionCommands::Use { id, pipeline } => {
            let question = ctx.service.mark_question_used(id, pipeline).await?;
            output(&question, flags.format)
        }
        QuestionCommands::Delete { id } => {
            ctx.service.delete_question(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
