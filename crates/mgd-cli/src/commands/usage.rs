use anyhow::Context;
use chrono::{Days, Utc};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UsageCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd usage`.
pub async fn handle(
    action: &UsageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UsageCommands::Stats { days } => {
            let since = Utc::now() - Days::new(u64::from(*days));
            let summary = ctx.service.usage_summary(since).await?;
            output(&summary, flags.format)
        }
        UsageCommands::Recent { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let events = ctx.service.recent_usage(limit).await?;
            output(&events, flags.format)
        }
        UsageCommands::Set { key, value } => {
            // Accept bare strings as well as JSON values.
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| serde_json::Value::String(value.clone()));
            let entry = ctx.service.set_profile(key, value).await?;
            output(&entry, flags.format)
        }
        UsageCommands::Get { key } => {
            let entry = ctx
                .service
                .get_profile(key)
                .await?
                .with_context(|| format!("no profile entry for '{key}'"))?;
            output(&entry, flags.format)
        }
    }
}
