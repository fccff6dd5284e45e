//! Displayed-month state and bound clamping.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use super::date::{add_months, first_of_month};

/// Years offered by the dropdown caption when no start bound is set.
const DROPDOWN_YEARS_BACK: i32 = 100;
/// Upper limit on side-by-side months.
pub const MAX_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tracks which months are on screen.
///
/// Navigation is independent of the selection; nothing here touches it.
pub struct MonthNavigator {
    month: NaiveDate,
    number_of_months: u32,
    start_month: Option<NaiveDate>,
    end_month: Option<NaiveDate>,
}

impl MonthNavigator {
    /// Unbounded navigator showing `number_of_months` months from `month`,
    /// clamped to `1..=MAX_MONTHS`.
    pub fn new(month: NaiveDate, number_of_months: u32) -> Self {
        Self {
            month: first_of_month(month),
            number_of_months: number_of_months.clamp(1, MAX_MONTHS),
            start_month: None,
            end_month: None,
        }
    }

    /// Adds navigation bounds and clamps the current month into them.
    pub fn with_bounds(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_month = start.map(first_of_month);
        self.end_month = end.map(first_of_month);
        self.month = self.clamp(self.month);
        self
    }

    /// First displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Number of side-by-side months.
    pub fn number_of_months(&self) -> u32 {
        self.number_of_months
    }

    /// Every displayed month in order.
    pub fn months(&self) -> Vec<NaiveDate> {
        (0..self.number_of_months)
            .map(|offset| add_months(self.month, offset as i32))
            .collect()
    }

    /// Last displayed month.
    pub fn last_month(&self) -> NaiveDate {
        add_months(self.month, self.number_of_months as i32 - 1)
    }

    /// Whether the previous control is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.start_month
            .map_or(true, |start| add_months(self.month, -1) >= start)
    }

    /// Whether the next control is enabled.
    pub fn can_go_next(&self) -> bool {
        self.end_month
            .map_or(true, |end| add_months(self.last_month(), 1) <= end)
    }

    /// Moves back one month. Returns `false` at the start bound.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.month = add_months(self.month, -1);
        true
    }

    /// Moves forward one month. Returns `false` at the end bound.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.month = add_months(self.month, 1);
        true
    }

    /// Jumps to `month`, clamped into the bounds. Returns whether the display changed.
    pub fn go_to(&mut self, month: NaiveDate) -> bool {
        let target = self.clamp(month);
        if target == self.month {
            return false;
        }
        self.month = target;
        true
    }

    /// Clamps a first displayed month into the bounds.
    ///
    /// The end bound applies first so that the last displayed month never
    /// passes it; the start bound applies after, so inverted bounds settle on
    /// the start bound.
    pub fn clamp(&self, month: NaiveDate) -> NaiveDate {
        let mut month = first_of_month(month);
        if let Some(end) = self.end_month {
            let latest_first = add_months(end, 1 - self.number_of_months as i32);
            if month > latest_first {
                month = latest_first;
            }
        }
        if let Some(start) = self.start_month {
            if month < start {
                month = start;
            }
        }
        month
    }

    /// Whether a month lies inside the bounds.
    pub fn month_selectable(&self, month: NaiveDate) -> bool {
        let month = first_of_month(month);
        self.start_month.map_or(true, |start| month >= start)
            && self.end_month.map_or(true, |end| month <= end)
    }

    /// Year options for the dropdown caption.
    ///
    /// Falls back to a hundred years before `today` and `today`'s year when
    /// the corresponding bound is unset.
    pub fn dropdown_years(&self, today: NaiveDate) -> RangeInclusive<i32> {
        let first = self
            .start_month
            .map_or(today.year() - DROPDOWN_YEARS_BACK, |start| start.year());
        let last = self.end_month.map_or(today.year(), |end| end.year());
        // Keep the displayed year reachable even outside the defaults.
        first.min(self.month.year())..=last.max(self.month.year())
    }
}
