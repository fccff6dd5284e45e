//! Displayed selection plus notify, independent of the DOM.

use chrono::NaiveDate;

use super::matcher::Matchers;
use super::selection::{select_day, Selection, SelectionMode, SelectionRules};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Holds the calendar's displayed selection.
///
/// Clicks update the displayed value immediately and hand the new value back
/// so the caller can be notified. A caller that feeds values back in does so
/// through [`CalendarController::sync_external`].
pub struct CalendarController {
    mode: SelectionMode,
    rules: SelectionRules,
    selection: Selection,
}

impl CalendarController {
    /// Creates a controller; an initial value of the wrong shape starts empty.
    pub fn new(mode: SelectionMode, initial: Option<Selection>, rules: SelectionRules) -> Self {
        let selection = initial.map_or_else(|| Selection::empty(mode), |value| value.normalized(mode));
        Self {
            mode,
            rules,
            selection,
        }
    }

    /// Selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Click constraints.
    pub fn rules(&self) -> SelectionRules {
        self.rules
    }

    /// Currently displayed selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Applies a click. Returns the value to notify, or `None` when ignored.
    pub fn click(&mut self, day: NaiveDate, disabled: &Matchers) -> Option<Selection> {
        let next = select_day(&self.selection, day, disabled, self.rules)?;
        self.selection = next.clone();
        Some(next)
    }

    /// Replaces the displayed value with one supplied by the caller.
    ///
    /// Returns whether the display changed.
    pub fn sync_external(&mut self, value: Selection) -> bool {
        let value = value.normalized(self.mode);
        if value == self.selection {
            return false;
        }
        self.selection = value;
        true
    }
}
