//! Presentational component library: alert, badge, button, card, and calendar.
//!
//! Every component resolves its styling through [`variants`], which maps typed
//! axis values (variant, size) onto `moon-*` class names and appends the
//! caller's `class_name` override. The calendar is the only stateful
//! component; its selection state machine, grid, and navigation live in
//! [`calendar`] as plain Rust so they can be exercised without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod calendar;
mod primitives;
pub mod variants;

pub use calendar::{
    day_key, parse_day_key, select_day, Calendar, CalendarController, CalendarDayButton,
    CaptionLayout, DateMatcher, DateRange, DayContext, DayFacts, DayKeyError, GridDay,
    GridOptions, GridWeek, Matchers, Modifier, MonthGrid, MonthNavigator, Selection,
    SelectionMode, SelectionRules, WeekStart, MAX_MONTHS,
};
pub use primitives::{
    Alert, AlertAction, AlertDescription, AlertTitle, AlertVariant, Badge, BadgeVariant, Button,
    ButtonHost, ButtonSize, ButtonVariant, Card, CardAction, CardContent, CardDescription,
    CardFooter, CardHeader, CardSize, CardTitle,
};
pub use variants::{resolve_classes, ClassList, UnknownVariant, VariantAxis};

/// Convenience imports for applications consuming the component set.
pub mod prelude {
    pub use crate::{
        day_key, Alert, AlertAction, AlertDescription, AlertTitle, AlertVariant, Badge,
        BadgeVariant, Button, ButtonHost, ButtonSize, ButtonVariant, Calendar, CaptionLayout,
        Card, CardAction, CardContent, CardDescription, CardFooter, CardHeader, CardSize,
        CardTitle, DateMatcher, DateRange, Matchers, Modifier, Selection, SelectionMode,
        VariantAxis, WeekStart,
    };
}
