//! Month grid layout and per-day render facts.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::date::{day_key, first_of_month, last_of_month, start_of_week, weekday_short};
use super::matcher::{Matchers, Modifier};
use super::selection::Selection;

const FIXED_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// First column of the grid.
pub enum WeekStart {
    /// US-style weeks.
    Sunday,
    /// ISO-style weeks.
    Monday,
}

impl Default for WeekStart {
    fn default() -> Self {
        Self::Sunday
    }
}

impl WeekStart {
    /// Weekday in the first column.
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Header labels in column order.
    pub fn labels(self) -> [&'static str; 7] {
        let mut weekday = self.weekday();
        let mut labels = [""; 7];
        for label in &mut labels {
            *label = weekday_short(weekday);
            weekday = weekday.succ();
        }
        labels
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Layout switches for [`MonthGrid::build`].
pub struct GridOptions {
    /// First column of each row.
    pub week_starts_on: WeekStart,
    /// Always emit six rows, padding with days of the following month.
    pub fixed_weeks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One cell of the grid.
pub struct GridDay {
    /// Calendar day shown in the cell.
    pub date: NaiveDate,
    /// The day belongs to a neighbouring month.
    pub outside: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the grid.
pub struct GridWeek {
    /// ISO week number of the row.
    pub number: u32,
    /// Seven cells in column order.
    pub days: Vec<GridDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rows of days for one displayed month.
pub struct MonthGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    /// Rows from the week containing the 1st to the week containing the last day.
    pub weeks: Vec<GridWeek>,
}

impl MonthGrid {
    /// Lays out the month containing `month`.
    pub fn build(month: NaiveDate, options: GridOptions) -> Self {
        let month = first_of_month(month);
        let week_start = options.week_starts_on.weekday();
        let first_cell = start_of_week(month, week_start);
        let last_row_start = start_of_week(last_of_month(month), week_start);

        let mut weeks = Vec::with_capacity(FIXED_ROWS);
        let mut row_start = Some(first_cell);
        while let Some(start) = row_start {
            let past_month = start > last_row_start;
            if past_month && (!options.fixed_weeks || weeks.len() >= FIXED_ROWS) {
                break;
            }
            weeks.push(build_week(start, month));
            row_start = start.checked_add_days(Days::new(7));
        }

        Self { month, weeks }
    }

    /// All cells in row-major order.
    pub fn days(&self) -> impl Iterator<Item = &GridDay> + '_ {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }
}

fn build_week(start: NaiveDate, month: NaiveDate) -> GridWeek {
    let days: Vec<GridDay> = start
        .iter_days()
        .take(7)
        .map(|date| GridDay {
            date,
            outside: date.year() != month.year() || date.month() != month.month(),
        })
        .collect();
    let number = days
        .iter()
        .find(|day| day.date.weekday() == Weekday::Mon)
        .map_or_else(|| start.iso_week().week(), |day| day.date.iso_week().week());
    GridWeek { number, days }
}

#[derive(Debug, Clone, Copy)]
/// Inputs shared by every cell of a rendered calendar.
pub struct DayContext<'a> {
    /// Days that cannot be clicked.
    pub disabled: &'a Matchers,
    /// Presentational classifications.
    pub modifiers: &'a [Modifier],
    /// Day highlighted as today, if any.
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Independent boolean facts about one rendered day.
///
/// Facts do not exclude each other: a day seeded as selected can also be
/// disabled.
pub struct DayFacts {
    /// The day.
    pub date: NaiveDate,
    /// Stable `YYYY-MM-DD` key.
    pub key: String,
    /// Part of the selection in any mode.
    pub selected: bool,
    /// The single-mode selected day.
    pub selected_single: bool,
    /// Range start endpoint.
    pub range_start: bool,
    /// Range end endpoint.
    pub range_end: bool,
    /// Strictly between complete range endpoints.
    pub range_middle: bool,
    /// Matches the disabled rules.
    pub disabled: bool,
    /// Belongs to a neighbouring month.
    pub outside: bool,
    /// Equals the configured today.
    pub today: bool,
    /// Names of matching modifiers, in declaration order.
    pub modifiers: Vec<String>,
    /// Extra classes contributed by matching modifiers.
    pub modifier_classes: Vec<String>,
}

impl DayFacts {
    /// Derives the facts for `day` under `selection`.
    pub fn compute(day: GridDay, selection: &Selection, context: DayContext<'_>) -> Self {
        let date = day.date;
        let (range_start, range_end, range_middle) = match selection {
            Selection::Range(range) => (
                range.from == Some(date),
                range.to == Some(date),
                matches!((range.from, range.to), (Some(from), Some(to)) if from < date && date < to),
            ),
            _ => (false, false, false),
        };
        let selected = selection.contains(date);

        let matching: Vec<&Modifier> = context
            .modifiers
            .iter()
            .filter(|modifier| modifier.matcher.matches(date))
            .collect();

        Self {
            date,
            key: day_key(date),
            selected,
            selected_single: selected && matches!(selection, Selection::Single(_)),
            range_start,
            range_end,
            range_middle,
            disabled: context.disabled.matches(date),
            outside: day.outside,
            today: context.today == Some(date),
            modifiers: matching.iter().map(|modifier| modifier.name.clone()).collect(),
            modifier_classes: matching
                .iter()
                .filter_map(|modifier| modifier.class_name.clone())
                .collect(),
        }
    }
}
