use serde::Serialize;

use mgd_core::enums::PipelineStage;
use mgd_db::updates::PipelineUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PipelineCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StageCount {
    stage: PipelineStage,
    count: u64,
}

/// Handle `mgd pipeline`.
pub async fn handle(
    action: &PipelineCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PipelineCommands::Create {
            title,
            description,
            content_type,
            audience,
        } => {
            let item = ctx
                .service
                .create_pipeline_item(
                    title,
                    description.as_deref(),
                    content_type.as_deref(),
                    audience.as_deref(),
                )
                .await?;
            output(&item, flags.format)
        }
        PipelineCommands::Get { id } => {
            let item = ctx.service.get_pipeline_item(id).await?;
            output(&item, flags.format)
        }
        PipelineCommands::List { stage, limit } => {
            let stage = stage
                .as_deref()
                .map(|s| parse_enum::<PipelineStage>(s, "stage"))
                .transpose()?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let items = ctx.service.list_pipeline_items(stage, limit).await?;
            output(&items, flags.format)
        }
        PipelineCommands::Stage { id, stage } => {
            let stage: PipelineStage = parse_enum(stage, "stage")?;
            let item = ctx.service.set_pipeline_stage(id, stage).await?;
            output(&item, flags.format)
        }
        PipelineCommands::Update {
            id,
            title,
            description,
            content_type,
            document,
            audience,
        } => {
            let mut update = PipelineUpdateBuilder::new();
            if let Some(title) = title {
                update = update.title(title.clone());
            }
            if let Some(description) = description {
                update = update.description(Some(description.clone()));
            }
            if let Some(content_type) = content_type {
                update = update.content_type(Some(content_type.clone()));
            }
            if let Some(document) = document {
                let doc = ctx.service.resolve_document(document).await?;
                update = update.document_id(Some(doc.id));
            }
            if let Some(audience) = audience {
                update = update.audience(Some(audience.clone()));
            }
            let item = ctx.service.update_pipeline_item(id, update.build()).await?;
            output(&item, flags.format)
        }
        PipelineCommands::Delete { id } => {
            ctx.service.delete_pipeline_item(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        PipelineCommands::Counts => {
            let counts = ctx
                .service
                .pipeline_stage_counts()
                .await?
                .into_iter()
                .map(|(stage, count)| StageCount { stage, count })
                .collect::<Vec<_>>();
            output(&counts, flags.format)
        }
    }
}
