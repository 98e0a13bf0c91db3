//! Dashboard nudge types.
//!
//! A nudge is a ranked suggestion computed from current state; nothing about
//! it is persisted. Lower priority = more urgent. The evaluation rules live
//! in the database layer; the types and the ranking cutoff live here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many nudges the dashboard shows.
pub const MAX_NUDGES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeKind {
    Event,
    Practice,
    Reflection,
    Ritual,
    Story,
    Goal,
}

impl NudgeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Practice => "practice",
            Self::Reflection => "reflection",
            Self::Ritual => "ritual",
            Self::Story => "story",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for NudgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked dashboard suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nudge {
    pub kind: NudgeKind,
    pub message: String,
    /// Command or screen the nudge points at ("pipeline", "stories capture").
    pub action: String,
    pub priority: u8,
}

/// Sort candidates by priority and keep the top [`MAX_NUDGES`].
#[must_use]
pub fn rank(mut candidates: Vec<Nudge>) -> Vec<Nudge> {
    candidates.sort_by_key(|n| n.priority);
    candidates.truncate(MAX_NUDGES);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nudge(kind: NudgeKind, priority: u8) -> Nudge {
        Nudge {
            kind,
            message: String::new(),
            action: String::new(),
            priority,
        }
    }

    #[test]
    fn rank_sorts_and_truncates() {
        let ranked = rank(vec![
            nudge(NudgeKind::Story, 4),
            nudge(NudgeKind::Event, 1),
            nudge(NudgeKind::Ritual, 3),
            nudge(NudgeKind::Practice, 2),
        ]);
        let kinds: Vec<NudgeKind> = ranked.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NudgeKind::Event, NudgeKind::Practice, NudgeKind::Ritual]);
    }

    #[test]
    fn rank_is_stable_for_equal_priorities() {
        let ranked = rank(vec![
            nudge(NudgeKind::Practice, 2),
            nudge(NudgeKind::Reflection, 2),
        ]);
        assert_eq!(ranked[0].kind, NudgeKind::Practice);
        assert_eq!(ranked[1].kind, NudgeKind::Reflection);
    }
}
