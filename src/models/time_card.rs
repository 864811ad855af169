//! Time card models.
//!
//! An [`EmployeeTimeCard`] holds one [`DailyTimeEntry`] per calendar date for a
//! single employee. Entries are changed only through
//! [`update_entry`](crate::calculation::update_entry), which applies an
//! [`EntryUpdate`] to a snapshot of the cards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single day on an employee's time card.
///
/// When `worked` is false, entry mutation keeps `task_id` empty and
/// `borrowed` at zero. Stored data is not guaranteed to respect this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTimeEntry {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// Whether the employee worked that day.
    #[serde(default)]
    pub worked: bool,
    /// The task the day was worked on.
    #[serde(default)]
    pub task_id: Option<String>,
    /// Cash advanced against future pay on that day.
    #[serde(default)]
    pub borrowed: Decimal,
}

impl DailyTimeEntry {
    /// Creates the default entry for a date: not worked, no task, nothing borrowed.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            worked: false,
            task_id: None,
            borrowed: Decimal::ZERO,
        }
    }
}

/// All recorded days for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTimeCard {
    /// The employee the card belongs to.
    pub employee_id: String,
    /// Recorded days, at most one per date.
    #[serde(default)]
    pub entries: Vec<DailyTimeEntry>,
}

impl EmployeeTimeCard {
    /// Creates a card with no entries.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the entry recorded for `date`, if any.
    pub fn entry(&self, date: NaiveDate) -> Option<&DailyTimeEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Returns every date that appears more than once on the card, in order of
    /// the second occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_ledger::models::{DailyTimeEntry, EmployeeTimeCard};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    /// let mut card = EmployeeTimeCard::new("E1");
    /// card.entries.push(DailyTimeEntry::blank(day));
    /// assert!(card.duplicate_dates().is_empty());
    ///
    /// card.entries.push(DailyTimeEntry::blank(day));
    /// assert_eq!(card.duplicate_dates(), vec![day]);
    /// ```
    pub fn duplicate_dates(&self) -> Vec<NaiveDate> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| !seen.insert(e.date))
            .map(|e| e.date)
            .collect()
    }
}

/// A change to one field of a time entry.
///
/// Serialized as `{"field": "worked", "value": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EntryUpdate {
    /// Sets the worked flag. Unsetting it also clears the task and borrowed amount.
    Worked(bool),
    /// Sets or clears the task worked on.
    TaskId(Option<String>),
    /// Sets the amount borrowed.
    Borrowed(Decimal),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_time_card() {
        let json = r#"{
            "employee_id": "E1",
            "entries": [
                {"date": "2024-04-01", "worked": true, "task_id": "T1", "borrowed": "0"},
                {"date": "2024-04-02", "worked": false}
            ]
        }"#;

        let card: EmployeeTimeCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.employee_id, "E1");
        assert_eq!(card.entries.len(), 2);
        assert_eq!(card.entries[0].task_id.as_deref(), Some("T1"));
        assert_eq!(card.entries[1], DailyTimeEntry::blank(date("2024-04-02")));
    }

    #[test]
    fn test_entry_lookup_by_date() {
        let mut card = EmployeeTimeCard::new("E1");
        card.entries.push(DailyTimeEntry {
            date: date("2024-04-03"),
            worked: true,
            task_id: Some("T2".to_string()),
            borrowed: Decimal::new(25, 0),
        });

        assert!(card.entry(date("2024-04-03")).unwrap().worked);
        assert!(card.entry(date("2024-04-04")).is_none());
    }

    #[test]
    fn test_non_canonical_entry_date_is_rejected() {
        let json = r#"{"date": "04/01/2024", "worked": true}"#;
        let result: Result<DailyTimeEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_update_wire_format() {
        let update: EntryUpdate =
            serde_json::from_str(r#"{"field": "worked", "value": false}"#).unwrap();
        assert_eq!(update, EntryUpdate::Worked(false));

        let update: EntryUpdate =
            serde_json::from_str(r#"{"field": "task_id", "value": null}"#).unwrap();
        assert_eq!(update, EntryUpdate::TaskId(None));

        let update: EntryUpdate =
            serde_json::from_str(r#"{"field": "borrowed", "value": "50.25"}"#).unwrap();
        assert_eq!(update, EntryUpdate::Borrowed(Decimal::new(5025, 2)));
    }

    #[test]
    fn test_entry_update_rejects_unknown_field() {
        let result: Result<EntryUpdate, _> =
            serde_json::from_str(r#"{"field": "hours", "value": 8}"#);
        assert!(result.is_err());
    }
}
