//! Pay period generation and date window validation.
//!
//! A pay period is 14 consecutive calendar days. Dates cross the engine
//! boundary as canonical `yyyy-MM-dd` strings; anything else in a window is a
//! caller programming error and is rejected.

use chrono::{Days, NaiveDate};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

/// Number of days in a bi-weekly pay period.
pub const PAY_PERIOD_DAYS: u32 = 14;

/// The canonical date format at the engine boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `days` consecutive calendar dates beginning with `start`.
///
/// # Errors
///
/// Returns `InvalidDate` if the run would pass the last date `chrono` can
/// represent. A period is never shortened.
pub fn period_dates(start: NaiveDate, days: u32) -> EngineResult<Vec<NaiveDate>> {
    (0..u64::from(days))
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| EngineError::InvalidDate {
                    value: start.format(DATE_FORMAT).to_string(),
                    message: format!("a {days}-day period from this date leaves the calendar"),
                })
        })
        .collect()
}

/// Generates the 14 dates of the pay period starting at `start`, inclusive.
///
/// # Errors
///
/// Returns `InvalidDate` if the period would run past the end of the calendar.
///
/// # Examples
///
/// ```
/// use site_ledger::calculation::generate_period;
/// use chrono::NaiveDate;
///
/// let dates = generate_period(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()).unwrap();
/// assert_eq!(dates.len(), 14);
/// assert_eq!(dates[0], "2024-04-01");
/// assert_eq!(dates[13], "2024-04-14");
///
/// assert!(generate_period(NaiveDate::MAX).is_err());
/// ```
pub fn generate_period(start: NaiveDate) -> EngineResult<Vec<String>> {
    Ok(period_dates(start, PAY_PERIOD_DAYS)?
        .into_iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect())
}

/// Parses a canonical `yyyy-MM-dd` date.
///
/// Lenient forms such as `2024-4-1` parse as dates but are rejected because
/// they would not round-trip through the boundary format.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| EngineError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        })?;

    if date.format(DATE_FORMAT).to_string() != value {
        return Err(EngineError::InvalidDate {
            value: value.to_string(),
            message: "expected canonical yyyy-MM-dd".to_string(),
        });
    }

    Ok(date)
}

/// The set of dates that aggregation is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayWindow {
    dates: HashSet<NaiveDate>,
}

impl PayWindow {
    /// Builds a window from already-typed dates.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Builds a window from boundary date strings, failing on the first
    /// non-canonical value.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_ledger::calculation::PayWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = PayWindow::from_date_strings(&["2024-04-01".to_string()]).unwrap();
    /// assert!(window.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    ///
    /// assert!(PayWindow::from_date_strings(&["2024/04/01".to_string()]).is_err());
    /// ```
    pub fn from_date_strings(dates: &[String]) -> EngineResult<Self> {
        let dates = dates
            .iter()
            .map(|d| parse_date(d))
            .collect::<EngineResult<HashSet<_>>>()?;
        Ok(Self { dates })
    }

    /// Returns true if `date` falls in the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct dates in the window.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the window has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
