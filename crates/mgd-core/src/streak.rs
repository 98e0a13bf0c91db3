//! Consecutive-day streak calculation over capture dates.

use chrono::{Days, NaiveDate};

/// Current streak as of `today` for a set of capture dates.
///
/// Distinct dates are considered once, newest first. A streak only exists
/// if the most recent capture is today or yesterday; from there the count
/// walks backward day by day and stops at the first gap.
#[must_use]
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut distinct: Vec<NaiveDate> = dates.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.reverse();

    let Some(&latest) = distinct.first() else {
        return 0;
    };
    let yesterday = today - Days::new(1);
    if latest != today && latest != yesterday {
        return 0;
    }

    let mut streak = 0u32;
    let mut expected = latest;
    for date in distinct {
        if date == expected {
            streak += 1;
            expected = expected - Days::new(1);
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::current_streak;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    const TODAY: &str = "2026-03-10";

    #[rstest]
    #[case::empty(&[], 0)]
    #[case::only_today(&["2026-03-10"], 1)]
    #[case::ends_yesterday(&["2026-03-09"], 1)]
    #[case::three_consecutive(&["2026-03-08", "2026-03-09", "2026-03-10"], 3)]
    #[case::gap_resets(&["2026-03-06", "2026-03-09", "2026-03-10"], 2)]
    #[case::stale(&["2026-03-07", "2026-03-08"], 0)]
    #[case::duplicates_count_once(&["2026-03-10", "2026-03-10", "2026-03-09"], 2)]
    fn streak_cases(#[case] dates: &[&str], #[case] expected: u32) {
        let dates: Vec<NaiveDate> = dates.iter().map(|s| d(s)).collect();
        assert_eq!(current_streak(&dates, d(TODAY)), expected);
    }

    #[test]
    fn long_run_counts_fully() {
        let dates: Vec<NaiveDate> = (0..30).map(|i| d(TODAY) - chrono::Days::new(i)).collect();
        assert_eq!(current_streak(&dates, d(TODAY)), 30);
    }
}
