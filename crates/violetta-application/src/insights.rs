//! Journey summary: streaks, activity and badges.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use violetta_core::journal::JournalEntry;
use violetta_core::stats::{
    DayActivity, best_streak, current_streak, last_n_days_activity, mood_histogram, unique_days,
};

const FIRST_WEEK_STREAK: usize = 7;
const CONSISTENCY_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    FirstWeek,
    FirstJournal,
    Consistency,
    SafeNetwork,
}

impl BadgeKind {
    pub fn label(self) -> &'static str {
        match self {
            BadgeKind::FirstWeek => "First week",
            BadgeKind::FirstJournal => "First journal",
            BadgeKind::Consistency => "Consistency",
            BadgeKind::SafeNetwork => "Safe network",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySummary {
    pub current_streak: usize,
    pub best_streak: usize,
    pub days_with_entries: usize,
    pub entry_count: usize,
    pub last_7_days: Vec<DayActivity>,
    pub mood_histogram: BTreeMap<u8, usize>,
    pub contacts_count: usize,
    pub badges: Vec<Badge>,
}

pub struct Insights;

impl Insights {
    /// Current streak, still alive when today has no entry yet but yesterday does.
    pub fn journey_streak(entries: &[JournalEntry], today: NaiveDate) -> usize {
        match current_streak(entries, today) {
            0 => today.pred_opt().map_or(0, |yesterday| current_streak(entries, yesterday)),
            n => n,
        }
    }

    pub fn summarize(entries: &[JournalEntry], contacts_count: usize, today: NaiveDate) -> JourneySummary {
        let current = Self::journey_streak(entries, today);
        let days = unique_days(entries).len();
        let badges = vec![
            Badge {
                kind: BadgeKind::FirstWeek,
                achieved: current >= FIRST_WEEK_STREAK,
            },
            Badge {
                kind: BadgeKind::FirstJournal,
                achieved: !entries.is_empty(),
            },
            Badge {
                kind: BadgeKind::Consistency,
                achieved: days >= CONSISTENCY_DAYS,
            },
            Badge {
                kind: BadgeKind::SafeNetwork,
                achieved: contacts_count >= 1,
            },
        ];

        JourneySummary {
            current_streak: current,
            best_streak: best_streak(entries),
            days_with_entries: days,
            entry_count: entries.len(),
            last_7_days: last_n_days_activity(entries, 7, today),
            mood_histogram: mood_histogram(entries),
            contacts_count,
            badges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry_on(day: NaiveDate, mood: Option<u8>) -> JournalEntry {
        JournalEntry {
            id: format!("e-{day}"),
            text: "x".to_string(),
            date_iso: day.format("%Y-%m-%d").to_string(),
            mood,
            ..JournalEntry::default()
        }
    }

    fn achieved(summary: &JourneySummary, kind: BadgeKind) -> bool {
        summary.badges.iter().any(|b| b.kind == kind && b.achieved)
    }

    #[test]
    fn test_empty_journey() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let summary = Insights::summarize(&[], 0, today);
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.last_7_days.len(), 7);
        assert!(summary.badges.iter().all(|b| !b.achieved));
        assert_eq!(summary.mood_histogram.len(), 5);
    }

    #[test]
    fn test_week_streak_badges() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let entries: Vec<JournalEntry> = (0..7)
            .map(|i| entry_on(today - Duration::days(i), Some(3)))
            .collect();
        let summary = Insights::summarize(&entries, 1, today);
        assert_eq!(summary.current_streak, 7);
        assert_eq!(summary.best_streak, 7);
        assert_eq!(summary.mood_histogram[&3], 7);
        assert!(achieved(&summary, BadgeKind::FirstWeek));
        assert!(achieved(&summary, BadgeKind::FirstJournal));
        assert!(achieved(&summary, BadgeKind::SafeNetwork));
        assert!(!achieved(&summary, BadgeKind::Consistency));
        assert!(summary.last_7_days.iter().all(|d| d.has_entry));
    }

    #[test]
    fn test_streak_survives_until_end_of_today() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let entries: Vec<JournalEntry> = (1..4)
            .map(|i| entry_on(today - Duration::days(i), None))
            .collect();
        assert_eq!(Insights::journey_streak(&entries, today), 3);

        let stale = vec![entry_on(today - Duration::days(2), None)];
        assert_eq!(Insights::journey_streak(&stale, today), 0);
    }

    #[test]
    fn test_consistency_counts_distinct_days() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let entries: Vec<JournalEntry> = (0..30)
            .map(|i| entry_on(today - Duration::days(i * 2), None))
            .collect();
        let summary = Insights::summarize(&entries, 0, today);
        assert_eq!(summary.days_with_entries, 30);
        assert_eq!(summary.current_streak, 1);
        assert!(achieved(&summary, BadgeKind::Consistency));
    }
}
