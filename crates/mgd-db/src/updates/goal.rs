//! Goal update builder.

use chrono::NaiveDate;
use serde::Serialize;

use mgd_core::enums::GoalStatus;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

pub struct GoalUpdateBuilder(GoalUpdate);

impl GoalUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(GoalUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Option<String>) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: GoalStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn target_date(mut self, target_date: Option<NaiveDate>) -> Self {
        self.0.target_date = Some(target_date);
        self
    }

    #[must_use]
    pub const fn sort_order(mut self, sort_order: i64) -> Self {
        self.0.sort_order = Some(sort_order);
        self
    }

    #[must_use]
    pub fn build(self) -> GoalUpdate {
        self.0
    }
}
