use anyhow::Context;
use serde::Deserialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::shared::dates::date_or_today;
use crate::context::AppContext;
use crate::output::output;

#[derive(Deserialize)]
struct SegmentInput {
    #[serde(default)]
    title: Option<String>,
    content: String,
}

/// Handle `mgd course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::Create {
            title,
            description,
            source_type,
            segments_file,
        } => {
            let raw = std::fs::read_to_string(segments_file)
                .with_context(|| format!("failed to read {segments_file}"))?;
            let inputs: Vec<SegmentInput> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid segments in {segments_file}"))?;
            let segments = inputs
                .into_iter()
                .map(|segment| (segment.title, segment.content))
                .collect();
            let course = ctx
                .service
                .create_course(
                    title,
                    description.as_deref(),
                    source_type.as_deref(),
                    segments,
                )
                .await?;
            output(&course, flags.format)
        }
        CourseCommands::Get { id } => {
            let course = ctx.service.get_course(id).await?;
            output(&course, flags.format)
        }
        CourseCommands::List => {
            let courses = ctx.service.list_courses().await?;
            output(&courses, flags.format)
        }
        CourseCommands::Segments { course } => {
            let segments = ctx.service.list_segments(course).await?;
            output(&segments, flags.format)
        }
        CourseCommands::Complete { segment, date } => {
            let date = date_or_today(date.as_deref())?;
            let segment = ctx.service.complete_segment(segment, date).await?;
            output(&segment, flags.format)
        }
        CourseCommands::Today => {
            let lessons = ctx.service.daily_lessons().await?;
            output(&lessons, flags.format)
        }
    }
}
