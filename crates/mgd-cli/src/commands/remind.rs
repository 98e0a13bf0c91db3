use chrono::{Local, Utc};

use mgd_config::RemindConfig;
use mgd_db::repos::ReminderSchedule;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RemindCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd remind`.
pub async fn handle(
    action: &RemindCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let schedule = schedule_from(&ctx.config.remind);
    match action {
        RemindCommands::Check => {
            let due = ctx.service.due_reminders(Utc::now(), &schedule).await?;
            output(&due, flags.format)
        }
        RemindCommands::Watch => watch(ctx, &schedule).await,
    }
}

/// Poll once a minute and print reminders as they come due. Runs until
/// interrupted.
async fn watch(ctx: &AppContext, schedule: &ReminderSchedule) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(60));
    loop {
        ticker.tick().await;
        let now = Utc::now();
        match ctx.service.due_reminders(now, schedule).await {
            Ok(due) => {
                for reminder in due {
                    println!(
                        "[{}] {}",
                        now.with_timezone(&Local).format("%H:%M"),
                        reminder.message
                    );
                }
            }
            Err(error) => tracing::warn!(%error, "reminder evaluation failed"),
        }
    }
}

fn schedule_from(config: &RemindConfig) -> ReminderSchedule {
    ReminderSchedule {
        morning_hour: config.morning_hour,
        evening_hour: config.evening_hour,
        task_hour: config.task_hour,
        event_lead_minutes: config.event_lead_minutes,
    }
}
