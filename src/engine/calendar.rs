// ==========================================
// Quadrant Engine - Ranking Windows
// ==========================================
// Responsibility: derive the week and month windows that scope
// fairness aggregation from an event's start date
// Red line: stateless, no side effects, no I/O
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};

/// Week and month windows used by the workload ledger. All bounds
/// are inclusive calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingWindows {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
}

impl RankingWindows {
    /// Derives both windows from the event start date.
    ///
    /// # Rules
    /// - week: ISO week containing the date, Monday through Sunday
    /// - month: first through last day of the calendar month
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().number_from_monday() as i64 - 1;
        let week_start = date - Duration::days(offset);
        let week_end = week_start + Duration::days(6);

        let month_start = date.with_day(1).unwrap_or(date);
        let month_end = last_day_of_month(date);

        Self {
            week_start,
            week_end,
            month_start,
            month_end,
        }
    }
}

/// Last calendar day of the month containing `date`.
fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}
