//! Shas progress arithmetic.
//!
//! Progress is tracked on two axes: masechtos finished, and study units
//! finished (daf for the gemara track, perakim for mishnayos). The gemara
//! track only covers masechtos with a Bavli.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::{ShasCompletion, ShasMasechta};
use crate::enums::{CompletionType, Seder};

/// Counts for one scope (a seder, or the whole Shas).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressCounts {
    pub total: usize,
    pub completed: usize,
    pub total_units: i64,
    pub completed_units: i64,
}

impl ProgressCounts {
    /// Unit-weighted completion percentage, 0.0 when the scope is empty.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total_units == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.completed_units as f64 / self.total_units as f64 * 100.0
        }
    }
}

/// Per-seder slice of a progress report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SederProgress {
    pub seder: Seder,
    pub counts: ProgressCounts,
    /// (masechta name, completed) in sort order, for rendering the map.
    pub masechtos: Vec<(String, bool)>,
}

/// Full progress report for one completion track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShasProgress {
    pub completion_type: CompletionType,
    pub overall: ProgressCounts,
    pub seders: Vec<SederProgress>,
}

/// Compute the progress report for `track` from the masechta reference list
/// and the completion rows. Completions for the other track are ignored.
#[must_use]
pub fn shas_progress(
    masechtos: &[ShasMasechta],
    completions: &[ShasCompletion],
    track: CompletionType,
) -> ShasProgress {
    let done: HashSet<&str> = completions
        .iter()
        .filter(|c| c.completion_type == track)
        .map(|c| c.masechta_id.as_str())
        .collect();

    let in_scope = |m: &&ShasMasechta| track == CompletionType::Mishnayos || m.has_bavli;

    let mut seders = Vec::new();
    for seder in Seder::ALL {
        let mut list: Vec<&ShasMasechta> = masechtos
            .iter()
            .filter(|m| m.seder == seder)
            .filter(in_scope)
            .collect();
        if list.is_empty() {
            continue;
        }
        list.sort_by_key(|m| m.sort_order);

        seders.push(SederProgress {
            seder,
            counts: counts_for(&list, &done, track),
            masechtos: list
                .iter()
                .map(|m| (m.name.clone(), done.contains(m.id.as_str())))
                .collect(),
        });
    }

    let all: Vec<&ShasMasechta> = masechtos.iter().filter(in_scope).collect();
    ShasProgress {
        completion_type: track,
        overall: counts_for(&all, &done, track),
        seders,
    }
}

fn counts_for(
    list: &[&ShasMasechta],
    done: &HashSet<&str>,
    track: CompletionType,
) -> ProgressCounts {
    let units = |m: &ShasMasechta| match track {
        CompletionType::Gemara => m.daf_count.unwrap_or(0),
        CompletionType::Mishnayos => m.perakim,
    };

    let mut counts = ProgressCounts {
        total: list.len(),
        ..ProgressCounts::default()
    };
    for m in list {
        counts.total_units += units(m);
        if done.contains(m.id.as_str()) {
            counts.completed += 1;
            counts.completed_units += units(m);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn masechta(id: &str, seder: Seder, perakim: i64, daf: Option<i64>, order: i64) -> ShasMasechta {
        ShasMasechta {
            id: id.to_string(),
            seder,
            name: id.to_uppercase(),
            perakim,
            daf_count: daf,
            has_bavli: daf.is_some(),
            sort_order: order,
            created_at: Utc::now(),
        }
    }

    fn completion(masechta_id: &str, track: CompletionType) -> ShasCompletion {
        ShasCompletion {
            id: format!("shc-{masechta_id}"),
            masechta_id: masechta_id.to_string(),
            completion_type: track,
            completed_at: Utc::now(),
            notes: None,
        }
    }

    fn fixture() -> Vec<ShasMasechta> {
        vec![
            masechta("berachos", Seder::Zeraim, 9, Some(64), 1),
            masechta("peah", Seder::Zeraim, 8, None, 2),
            masechta("shabbos", Seder::Moed, 24, Some(157), 12),
            masechta("eruvin", Seder::Moed, 10, Some(105), 13),
        ]
    }

    #[test]
    fn full_seder_is_hundred_percent() {
        let masechtos = fixture();
        let completions = vec![
            completion("shabbos", CompletionType::Gemara),
            completion("eruvin", CompletionType::Gemara),
        ];
        let progress = shas_progress(&masechtos, &completions, CompletionType::Gemara);

        let moed = progress
            .seders
            .iter()
            .find(|s| s.seder == Seder::Moed)
            .unwrap();
        assert_eq!(moed.counts.completed, 2);
        assert!((moed.counts.percent() - 100.0).abs() < f64::EPSILON);

        // Overall: 262 of 326 daf (berachos still open).
        assert_eq!(progress.overall.total_units, 64 + 157 + 105);
        assert_eq!(progress.overall.completed_units, 157 + 105);
    }

    #[test]
    fn gemara_track_excludes_mishnah_only_masechtos() {
        let progress = shas_progress(&fixture(), &[], CompletionType::Gemara);
        assert_eq!(progress.overall.total, 3);

        let zeraim = progress
            .seders
            .iter()
            .find(|s| s.seder == Seder::Zeraim)
            .unwrap();
        assert_eq!(zeraim.masechtos.len(), 1);
    }

    #[test]
    fn mishnayos_track_counts_perakim_over_all() {
        let progress = shas_progress(&fixture(), &[], CompletionType::Mishnayos);
        assert_eq!(progress.overall.total, 4);
        assert_eq!(progress.overall.total_units, 9 + 8 + 24 + 10);
    }

    #[test]
    fn tracks_do_not_bleed() {
        let completions = vec![completion("berachos", CompletionType::Mishnayos)];
        let gemara = shas_progress(&fixture(), &completions, CompletionType::Gemara);
        assert_eq!(gemara.overall.completed, 0);
    }

    #[test]
    fn empty_scope_percent_is_zero() {
        assert!(ProgressCounts::default().percent().abs() < f64::EPSILON);
    }
}
