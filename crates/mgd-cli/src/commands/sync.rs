use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd sync`: push/pull the embedded replica once.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.sync().await?;
    output(&serde_json::json!({ "synced": true }), flags.format)
}
