//! Streak and activity statistics over dated entries.
//!
//! All functions are pure: callers pass `today` explicitly, which keeps them
//! deterministic in tests and lets the CLI pin a date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::datetime::{day_key, parse_local_day};

/// Lowest and highest mood on the 1..=5 scale.
pub const MOOD_MIN: u8 = 1;
pub const MOOD_MAX: u8 = 5;

/// Anything with a local calendar day and, optionally, a 1..=5 mood.
pub trait DatedEntry {
    /// Local calendar day of the entry, `None` if its date is unreadable.
    fn day(&self) -> Option<NaiveDate>;

    /// Mood on the 1..=5 scale, if recorded.
    fn mood(&self) -> Option<u8> {
        None
    }
}

impl DatedEntry for NaiveDate {
    fn day(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl DatedEntry for String {
    fn day(&self) -> Option<NaiveDate> {
        parse_local_day(self)
    }
}

/// One day of the activity strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    /// `YYYY-MM-DD` key of the day.
    pub iso: String,
    pub has_entry: bool,
    /// Short weekday name ("Mon", "Tue", ...).
    pub weekday: String,
}

fn day_set<E: DatedEntry>(entries: &[E]) -> HashSet<NaiveDate> {
    entries.iter().filter_map(|e| e.day()).collect()
}

/// Distinct local days that have at least one entry, ascending.
pub fn unique_days<E: DatedEntry>(entries: &[E]) -> Vec<NaiveDate> {
    entries
        .iter()
        .filter_map(|e| e.day())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Consecutive days with an entry, counted backward from `today`.
///
/// Returns 0 when `today` itself has no entry.
pub fn current_streak<E: DatedEntry>(entries: &[E], today: NaiveDate) -> usize {
    let days = day_set(entries);
    let mut count = 0;
    let mut cursor = today;
    while days.contains(&cursor) {
        count += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    count
}

/// Longest run of consecutive calendar days ever recorded.
///
/// A gap of more than one day restarts the running count at 1.
pub fn best_streak<E: DatedEntry>(entries: &[E]) -> usize {
    let days = unique_days(entries);
    if days.is_empty() {
        return 0;
    }

    let mut best = 1;
    let mut current = 1;
    for pair in days.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            current += 1;
            best = best.max(current);
        } else {
            current = 1;
        }
    }
    best
}

/// The last `n` days ending with `today`, oldest first, each flagged with
/// whether it has an entry.
pub fn last_n_days_activity<E: DatedEntry>(
    entries: &[E],
    n: usize,
    today: NaiveDate,
) -> Vec<DayActivity> {
    let days = day_set(entries);
    (0..n)
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset as i64)))
        .map(|date| DayActivity {
            iso: day_key(date),
            has_entry: days.contains(&date),
            weekday: date.weekday().to_string(),
        })
        .collect()
}

/// Counts entries per mood. Every bucket from 1 to 5 is present; moods
/// outside the scale are ignored.
pub fn mood_histogram<E: DatedEntry>(entries: &[E]) -> BTreeMap<u8, usize> {
    let mut hist: BTreeMap<u8, usize> = (MOOD_MIN..=MOOD_MAX).map(|m| (m, 0)).collect();
    for mood in entries.iter().filter_map(|e| e.mood()) {
        if let Some(bucket) = hist.get_mut(&mood) {
            *bucket += 1;
        }
    }
    hist
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        date: &'static str,
        mood: Option<u8>,
    }

    impl DatedEntry for Entry {
        fn day(&self) -> Option<NaiveDate> {
            parse_local_day(self.date)
        }

        fn mood(&self) -> Option<u8> {
            self.mood
        }
    }

    fn on(date: &'static str) -> Entry {
        Entry { date, mood: None }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_current_streak_zero_without_today_or_yesterday() {
        let entries = vec![on("2025-10-15"), on("2025-10-16")];
        assert_eq!(current_streak(&entries, day("2025-10-19")), 0);
        assert_eq!(current_streak::<Entry>(&[], day("2025-10-19")), 0);
    }

    #[test]
    fn test_current_streak_three_days_ending_today() {
        let entries = vec![on("2025-10-17"), on("2025-10-18"), on("2025-10-19")];
        assert_eq!(current_streak(&entries, day("2025-10-19")), 3);
    }

    #[test]
    fn test_current_streak_counts_days_not_entries() {
        let entries = vec![on("2025-10-19"), on("2025-10-19"), on("2025-10-18")];
        assert_eq!(current_streak(&entries, day("2025-10-19")), 2);
    }

    #[test]
    fn test_best_streak_unchanged_by_detached_day() {
        let mut entries = vec![on("2025-10-17"), on("2025-10-18"), on("2025-10-19")];
        assert_eq!(best_streak(&entries), 3);

        // Two days before the earliest leaves a one-day gap.
        entries.push(on("2025-10-15"));
        assert_eq!(best_streak(&entries), 3);
    }

    #[test]
    fn test_best_streak_grows_when_run_extends() {
        let mut entries = vec![on("2025-10-17"), on("2025-10-18"), on("2025-10-19")];
        entries.push(on("2025-10-16"));
        assert_eq!(best_streak(&entries), 4);
    }

    #[test]
    fn test_best_streak_gap_resets_to_one() {
        let entries = vec![
            on("2025-10-01"),
            on("2025-10-02"),
            on("2025-10-05"),
            on("2025-10-06"),
            on("2025-10-07"),
        ];
        assert_eq!(best_streak(&entries), 3);
        assert_eq!(best_streak::<Entry>(&[]), 0);
        assert_eq!(best_streak(&[on("2025-10-01")]), 1);
    }

    #[test]
    fn test_best_streak_across_month_boundary() {
        let entries = vec![on("2025-09-30"), on("2025-10-01"), on("2025-10-02")];
        assert_eq!(best_streak(&entries), 3);
    }

    #[test]
    fn test_last_n_days_activity_window() {
        let entries = vec![on("2025-10-19"), on("2025-10-16")];
        let window = last_n_days_activity(&entries, 7, day("2025-10-19"));
        assert_eq!(window.len(), 7);
        assert_eq!(window.first().unwrap().iso, "2025-10-13");
        assert_eq!(window.last().unwrap().iso, "2025-10-19");
        assert_eq!(window.last().unwrap().weekday, "Sun");
        let flagged: Vec<&str> = window
            .iter()
            .filter(|d| d.has_entry)
            .map(|d| d.iso.as_str())
            .collect();
        assert_eq!(flagged, vec!["2025-10-16", "2025-10-19"]);
    }

    #[test]
    fn test_mood_histogram() {
        let entries: Vec<Entry> = [1, 1, 3, 5]
            .into_iter()
            .map(|m| Entry {
                date: "2025-10-19",
                mood: Some(m),
            })
            .collect();
        let hist = mood_histogram(&entries);
        let expected: BTreeMap<u8, usize> = [(1, 2), (2, 0), (3, 1), (4, 0), (5, 1)].into();
        assert_eq!(hist, expected);
    }

    #[test]
    fn test_mood_histogram_ignores_out_of_range() {
        let entries = vec![
            Entry {
                date: "2025-10-19",
                mood: Some(9),
            },
            on("2025-10-19"),
        ];
        assert!(mood_histogram(&entries).values().all(|&c| c == 0));
    }

    #[test]
    fn test_unreadable_dates_are_skipped() {
        let entries = vec![on("not a date"), on("2025-10-19")];
        assert_eq!(unique_days(&entries), vec![day("2025-10-19")]);
        assert_eq!(current_streak(&entries, day("2025-10-19")), 1);
    }
}
