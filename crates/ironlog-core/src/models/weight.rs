// ABOUTME: Bodyweight observation model and history helpers
// ABOUTME: WeightEntry plus latest-entry lookup and same-day collapsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single bodyweight observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Bodyweight in pounds
    pub weight_lbs: f64,
    /// Day the weight was observed
    pub date: NaiveDate,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    /// Create an entry without a note
    #[must_use]
    pub const fn new(weight_lbs: f64, date: NaiveDate) -> Self {
        Self {
            weight_lbs,
            date,
            note: None,
        }
    }

    /// Attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Most recent entry by date
///
/// History is append-mostly, so when several entries share the latest date the
/// one appearing last in the slice wins.
#[must_use]
pub fn latest_entry(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    entries
        .iter()
        .reduce(|best, entry| if entry.date >= best.date { entry } else { best })
}

/// Most recent entry observed on or before `as_of`
#[must_use]
pub fn latest_entry_on_or_before(entries: &[WeightEntry], as_of: NaiveDate) -> Option<&WeightEntry> {
    entries
        .iter()
        .filter(|entry| entry.date <= as_of)
        .reduce(|best, entry| if entry.date >= best.date { entry } else { best })
}

/// One entry per date in ascending date order, keeping the last entry seen for each day
#[must_use]
pub fn collapse_daily(entries: &[WeightEntry]) -> Vec<WeightEntry> {
    let mut by_day: BTreeMap<NaiveDate, &WeightEntry> = BTreeMap::new();
    for entry in entries {
        by_day.insert(entry.date, entry);
    }
    by_day.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_latest_entry_prefers_later_date_regardless_of_order() {
        let entries = vec![
            WeightEntry::new(181.0, date(10)),
            WeightEntry::new(179.0, date(3)),
        ];
        assert_eq!(latest_entry(&entries).map(|e| e.weight_lbs), Some(181.0));
    }

    #[test]
    fn test_same_day_entries_collapse_to_last_logged() {
        let entries = vec![
            WeightEntry::new(180.0, date(5)).with_note("morning"),
            WeightEntry::new(182.5, date(5)).with_note("evening"),
            WeightEntry::new(179.5, date(4)),
        ];

        let latest = latest_entry(&entries).unwrap();
        assert_eq!(latest.note.as_deref(), Some("evening"));

        let collapsed = collapse_daily(&entries);
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].date, date(4));
        assert_eq!(collapsed[1].weight_lbs, 182.5);
    }

    #[test]
    fn test_latest_on_or_before_ignores_future_entries() {
        let entries = vec![
            WeightEntry::new(180.0, date(1)),
            WeightEntry::new(178.0, date(20)),
        ];
        let found = latest_entry_on_or_before(&entries, date(15)).unwrap();
        assert_eq!(found.weight_lbs, 180.0);
        assert!(latest_entry_on_or_before(&entries, NaiveDate::MIN).is_none());
    }
}
