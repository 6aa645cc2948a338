// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business-day counting with an injected working-day calendar.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

/// Which days count as working days.
///
/// The default treats Saturday and Sunday as non-working and consults no
/// holiday list. Both are injected here rather than hard-coded so the
/// counting policy stays independently testable.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    non_working_weekdays: Vec<Weekday>,
    holidays: Vec<NaiveDate>,
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self {
            non_working_weekdays: vec![Weekday::Sat, Weekday::Sun],
            holidays: Vec::new(),
        }
    }
}

impl BusinessCalendar {
    pub fn new(non_working_weekdays: Vec<Weekday>, holidays: Vec<NaiveDate>) -> Self {
        Self {
            non_working_weekdays,
            holidays,
        }
    }

    /// Whether the given calendar date is a working day.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.non_working_weekdays.contains(&date.weekday()) && !self.holidays.contains(&date)
    }
}

/// Count working days between two instants, by calendar date.
///
/// The interval is exclusive of the start date and inclusive of the end
/// date: a request submitted on Monday has accrued 3 business days by
/// Thursday of the same week. Returns 0 when `end` is not after `start`.
pub fn business_days_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    calendar: &BusinessCalendar,
) -> u32 {
    if end <= start {
        return 0;
    }

    let last = end.date_naive();
    let mut day = start.date_naive();
    let mut count = 0;
    while day < last {
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
        if calendar.is_working_day(day) {
            count += 1;
        }
    }
    count
}
