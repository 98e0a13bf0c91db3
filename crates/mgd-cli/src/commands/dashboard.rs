use chrono::{Local, Utc};
use serde::Serialize;

use mgd_core::entities::{CalendarEvent, CaptureStats, Task};
use mgd_core::enums::PipelineStage;
use mgd_core::nudge::Nudge;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StageCount {
    stage: PipelineStage,
    count: u64,
}

/// One-screen summary of today.
#[derive(Serialize)]
struct Dashboard {
    nudges: Vec<Nudge>,
    rituals_open: usize,
    rituals_done: usize,
    tasks_due: Vec<Task>,
    upcoming_events: Vec<CalendarEvent>,
    pipeline: Vec<StageCount>,
    capture: CaptureStats,
    reflection_streak: i64,
}

/// Handle `mgd dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let today = Local::now().date_naive();

    let nudges = ctx.service.dashboard_nudges(now).await?;

    let rituals = ctx.service.list_rituals(false).await?;
    let done: std::collections::HashSet<String> = ctx
        .service
        .ritual_completions_on(today)
        .await?
        .into_iter()
        .map(|c| c.ritual_id)
        .collect();
    let rituals_done = rituals.iter().filter(|r| done.contains(&r.id)).count();
    let rituals_open = rituals.len() - rituals_done;

    let tasks_due = ctx.service.tasks_due_by(today).await?;
    let upcoming_events = ctx.service.upcoming_events(now, 3).await?;
    let pipeline = ctx
        .service
        .pipeline_stage_counts()
        .await?
        .into_iter()
        .map(|(stage, count)| StageCount { stage, count })
        .collect();
    let capture = ctx.service.capture_stats(today).await?;
    let reflection_streak = ctx
        .service
        .get_reflection(today)
        .await?
        .map_or(0, |r| r.streak_count);

    let dashboard = Dashboard {
        nudges,
        rituals_open,
        rituals_done,
        tasks_due,
        upcoming_events,
        pipeline,
        capture,
        reflection_streak,
    };
    output(&dashboard, flags.format)
}
