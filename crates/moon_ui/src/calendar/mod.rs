//! Calendar: selection state machine, month grid, navigation, and the Leptos view.
//!
//! Everything except the components is plain Rust over `chrono` dates. [`Calendar`] keeps
//! a [`CalendarController`] and a [`MonthNavigator`] in signals and renders
//! each displayed month from a [`MonthGrid`], one [`CalendarDayButton`] per day.

mod controller;
mod date;
mod grid;
mod matcher;
mod navigation;
mod selection;
mod view;

pub use controller::CalendarController;
pub use date::{day_key, parse_day_key, DayKeyError, DAY_KEY_FORMAT};
pub use grid::{DayContext, DayFacts, GridDay, GridOptions, GridWeek, MonthGrid, WeekStart};
pub use matcher::{DateMatcher, Matchers, Modifier};
pub use navigation::{MonthNavigator, MAX_MONTHS};
pub use selection::{select_day, DateRange, Selection, SelectionMode, SelectionRules};
pub use view::{Calendar, CalendarDayButton, CaptionLayout};
