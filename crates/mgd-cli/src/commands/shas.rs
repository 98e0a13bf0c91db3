use mgd_core::enums::CompletionType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ShasCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd shas`.
pub async fn handle(
    action: &ShasCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ShasCommands::List => {
            let masechtos = ctx.service.list_masechtos().await?;
            output(&masechtos, flags.format)
        }
        ShasCommands::Progress { track } => {
            let track: CompletionType = parse_enum(track, "track")?;
            let report = ctx.service.shas_progress_report(track).await?;
            output(&report, flags.format)
        }
        ShasCommands::Complete {
            masechta,
            track,
            notes,
        } => {
            let track: CompletionType = parse_enum(track, "track")?;
            let completion = ctx
                .service
                .mark_masechta_complete(masechta, track, notes.as_deref())
                .await?;
            output(&completion, flags.format)
        }
        ShasCommands::Uncomplete { masechta, track } => {
            let track: CompletionType = parse_enum(track, "track")?;
            ctx.service.unmark_masechta(masechta, track).await?;
            output(
                &serde_json::json!({ "uncompleted": masechta, "track": track }),
                flags.format,
            )
        }
    }
}
