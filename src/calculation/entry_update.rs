//! Time entry mutation.
//!
//! [`update_entry`] is the only way stored entries change. It never touches
//! its input; callers replace their snapshot with the returned one.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DailyTimeEntry, EmployeeTimeCard, EntryUpdate};

/// Applies `update` to the entry for `employee_id` on `date`, returning a new
/// snapshot of the time cards.
///
/// A missing card is appended and a missing entry is inserted in date order,
/// starting from [`DailyTimeEntry::blank`]. Unsetting `worked` also clears
/// the task and the borrowed amount. Setting the task or borrowed amount is
/// applied as given, even on a day that was not worked.
///
/// # Examples
///
/// ```
/// use site_ledger::calculation::update_entry;
/// use site_ledger::models::EntryUpdate;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let cards = update_entry(&[], "E1", day, EntryUpdate::Worked(true));
/// let cards = update_entry(&cards, "E1", day, EntryUpdate::TaskId(Some("T1".to_string())));
/// assert_eq!(cards[0].entry(day).unwrap().task_id.as_deref(), Some("T1"));
///
/// let cards = update_entry(&cards, "E1", day, EntryUpdate::Worked(false));
/// assert_eq!(cards[0].entry(day).unwrap().task_id, None);
/// ```
pub fn update_entry(
    time_cards: &[EmployeeTimeCard],
    employee_id: &str,
    date: NaiveDate,
    update: EntryUpdate,
) -> Vec<EmployeeTimeCard> {
    let mut cards = time_cards.to_vec();

    let card_index = match cards.iter().position(|c| c.employee_id == employee_id) {
        Some(index) => index,
        None => {
            cards.push(EmployeeTimeCard::new(employee_id));
            cards.len() - 1
        }
    };
    let card = &mut cards[card_index];

    let entry_index = match card.entries.iter().position(|e| e.date == date) {
        Some(index) => index,
        None => {
            let index = card
                .entries
                .iter()
                .position(|e| e.date > date)
                .unwrap_or(card.entries.len());
            card.entries.insert(index, DailyTimeEntry::blank(date));
            index
        }
    };

    apply_update(&mut card.entries[entry_index], update);
    cards
}

fn apply_update(entry: &mut DailyTimeEntry, update: EntryUpdate) {
    match update {
        EntryUpdate::Worked(true) => entry.worked = true,
        EntryUpdate::Worked(false) => {
            entry.worked = false;
            entry.task_id = None;
            entry.borrowed = Decimal::ZERO;
        }
        EntryUpdate::TaskId(task_id) => entry.task_id = task_id,
        EntryUpdate::Borrowed(amount) => entry.borrowed = amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn worked_card() -> Vec<EmployeeTimeCard> {
        vec![EmployeeTimeCard {
            employee_id: "E1".to_string(),
            entries: vec![DailyTimeEntry {
                date: date("2024-04-02"),
                worked: true,
                task_id: Some("T1".to_string()),
                borrowed: dec("100"),
            }],
        }]
    }

    #[test]
    fn test_creates_card_and_blank_entry() {
        let cards = update_entry(&[], "E7", date("2024-04-03"), EntryUpdate::Worked(true));

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].employee_id, "E7");
        let entry = cards[0].entry(date("2024-04-03")).unwrap();
        assert!(entry.worked);
        assert_eq!(entry.task_id, None);
        assert_eq!(entry.borrowed, Decimal::ZERO);
    }

    #[test]
    fn test_unsetting_worked_clears_task_and_borrowed() {
        let cards = update_entry(
            &worked_card(),
            "E1",
            date("2024-04-02"),
            EntryUpdate::Worked(false),
        );

        let entry = cards[0].entry(date("2024-04-02")).unwrap();
        assert_eq!(*entry, DailyTimeEntry::blank(date("2024-04-02")));
    }

    #[test]
    fn test_setting_worked_true_is_idempotent() {
        let cards = update_entry(
            &worked_card(),
            "E1",
            date("2024-04-02"),
            EntryUpdate::Worked(true),
        );
        assert_eq!(cards, worked_card());
    }

    #[test]
    fn test_updates_existing_entry_in_place() {
        let cards = update_entry(
            &worked_card(),
            "E1",
            date("2024-04-02"),
            EntryUpdate::TaskId(Some("T2".to_string())),
        );

        assert_eq!(cards[0].entries.len(), 1);
        assert_eq!(cards[0].entries[0].task_id.as_deref(), Some("T2"));
        assert_eq!(cards[0].entries[0].borrowed, dec("100"));
    }

    /// Borrowed can be recorded without working; pinned pending product review.
    #[test]
    fn test_borrowed_on_non_worked_day_is_kept() {
        let cards = update_entry(&[], "E1", date("2024-04-05"), EntryUpdate::Borrowed(dec("50")));

        let entry = cards[0].entry(date("2024-04-05")).unwrap();
        assert!(!entry.worked);
        assert_eq!(entry.borrowed, dec("50"));
    }

    #[test]
    fn test_new_entries_are_kept_in_date_order() {
        let mut cards = worked_card();
        for d in ["2024-04-05", "2024-04-01", "2024-04-03"] {
            cards = update_entry(&cards, "E1", date(d), EntryUpdate::Worked(true));
        }

        let dates: Vec<_> = cards[0].entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![
                date("2024-04-01"),
                date("2024-04-02"),
                date("2024-04-03"),
                date("2024-04-05")
            ]
        );
        assert!(cards[0].duplicate_dates().is_empty());
    }

    #[test]
    fn test_other_employees_are_untouched() {
        let mut cards = worked_card();
        cards.push(EmployeeTimeCard::new("E2"));

        let updated = update_entry(&cards, "E2", date("2024-04-02"), EntryUpdate::Worked(true));

        assert_eq!(updated[0], cards[0]);
        assert_eq!(updated[1].entries.len(), 1);
    }

    #[test]
    fn test_input_snapshot_is_not_mutated() {
        let cards = worked_card();
        let _ = update_entry(&cards, "E1", date("2024-04-02"), EntryUpdate::Worked(false));
        assert_eq!(cards, worked_card());
    }
}
