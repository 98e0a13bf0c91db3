use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CompletionType, Seder};

/// Static reference record for one masechta (tractate).
///
/// `daf_count` is the Vilna Bavli page count; `None` for masechtos with no
/// Bavli. `perakim` is the Mishnah chapter count, present for every
/// masechta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShasMasechta {
    pub id: String,
    pub seder: Seder,
    pub name: String,
    pub perakim: i64,
    pub daf_count: Option<i64>,
    pub has_bavli: bool,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
}

/// Binary completion mark for (masechta, track).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShasCompletion {
    pub id: String,
    pub masechta_id: String,
    pub completion_type: CompletionType,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
}
