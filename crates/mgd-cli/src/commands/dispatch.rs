use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Every dispatched command also leaves a usage event behind; a failure to
/// record one is logged and never fails the command itself.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Err(error) = ctx
        .service
        .record_usage(command_name(&command), "invoke", serde_json::json!({}))
        .await
    {
        tracing::warn!(%error, "failed to record usage event");
    }

    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Doc { action } => commands::doc::handle(&action, ctx, flags).await,
        Commands::Pipeline { action } => commands::pipeline::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Event { action } => commands::event::handle_event(&action, ctx, flags).await,
        Commands::Schedule { action } => {
            commands::event::handle_schedule(&action, ctx, flags).await
        }
        Commands::Ritual { action } => commands::ritual::handle(&action, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::Story { action } => commands::bank::handle_story(&action, ctx, flags).await,
        Commands::Question { action } => {
            commands::bank::handle_question(&action, ctx, flags).await
        }
        Commands::Capture { action } => commands::capture::handle(&action, ctx, flags).await,
        Commands::Practice { action } => {
            commands::practice::handle_practice(&action, ctx, flags).await
        }
        Commands::Journal { action } => {
            commands::practice::handle_journal(&action, ctx, flags).await
        }
        Commands::Shas { action } => commands::shas::handle(&action, ctx, flags).await,
        Commands::Goal { action } => commands::growth::handle_goal(&action, ctx, flags).await,
        Commands::Reflect { action } => {
            commands::growth::handle_reflect(&action, ctx, flags).await
        }
        Commands::Import { action } => commands::import::handle(&action, ctx, flags).await,
        Commands::Remind { action } => commands::remind::handle(&action, ctx, flags).await,
        Commands::Usage { action } => commands::usage::handle(&action, ctx, flags).await,
        Commands::Sync => commands::sync::handle(ctx, flags).await,
        Commands::Init(_) => unreachable!("init is pre-dispatched in main"),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init(_) => "init",
        Commands::Dashboard => "dashboard",
        Commands::Doc { .. } => "doc",
        Commands::Pipeline { .. } => "pipeline",
        Commands::Task { .. } => "task",
        Commands::Event { .. } => "event",
        Commands::Schedule { .. } => "schedule",
        Commands::Ritual { .. } => "ritual",
        Commands::Course { .. } => "course",
        Commands::Story { .. } => "story",
        Commands::Question { .. } => "question",
        Commands::Capture { .. } => "capture",
        Commands::Practice { .. } => "practice",
        Commands::Journal { .. } => "journal",
        Commands::Shas { .. } => "shas",
        Commands::Goal { .. } => "goal",
        Commands::Reflect { .. } => "reflect",
        Commands::Import { .. } => "import",
        Commands::Remind { .. } => "remind",
        Commands::Usage { .. } => "usage",
        Commands::Sync => "sync",
    }
}
