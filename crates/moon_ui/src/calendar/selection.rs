//! Selection state and the day-click transition function.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use leptos::logging;
use serde::{Deserialize, Serialize};

use super::matcher::Matchers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How the calendar interprets day clicks.
pub enum SelectionMode {
    /// At most one day.
    Single,
    /// A `from`/`to` interval.
    Range,
    /// Any set of days.
    Multiple,
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::Single
    }
}

impl SelectionMode {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Range => "range",
            Self::Multiple => "multiple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Range selection; either endpoint may be unset.
pub struct DateRange {
    /// Earlier endpoint.
    pub from: Option<NaiveDate>,
    /// Later endpoint.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Complete range ordered so `from <= to`.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            from: Some(a.min(b)),
            to: Some(a.max(b)),
        }
    }

    /// Range with only a start.
    pub fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Neither endpoint set.
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Both endpoints set.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Whether `date` lies within the selected span (a lone endpoint counts).
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            (Some(edge), None) | (None, Some(edge)) => edge == date,
            (None, None) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
/// Calendar selection, shaped by [`SelectionMode`].
pub enum Selection {
    /// Single-date selection.
    Single(Option<NaiveDate>),
    /// Range selection.
    Range(DateRange),
    /// Multiple-date selection, unique per calendar day.
    Multiple(BTreeSet<NaiveDate>),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl Selection {
    /// Empty selection for a mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Range => Self::Range(DateRange::default()),
            SelectionMode::Multiple => Self::Multiple(BTreeSet::new()),
        }
    }

    /// Mode this selection's shape belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range(_) => SelectionMode::Range,
            Self::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(date) => date.is_none(),
            Self::Range(range) => range.is_empty(),
            Self::Multiple(dates) => dates.is_empty(),
        }
    }

    /// Whether `date` is part of the selection.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::Single(selected) => *selected == Some(date),
            Self::Range(range) => range.contains(date),
            Self::Multiple(dates) => dates.contains(&date),
        }
    }

    /// Earliest selected day, used to pick the initially displayed month.
    pub fn first_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Single(date) => *date,
            Self::Range(range) => match (range.from, range.to) {
                (Some(from), Some(to)) => Some(from.min(to)),
                (from, to) => from.or(to),
            },
            Self::Multiple(dates) => dates.first().copied(),
        }
    }

    /// Returns `self` when it matches `mode`, otherwise that mode's empty selection.
    ///
    /// A complete range with `from > to` is reordered.
    pub fn normalized(self, mode: SelectionMode) -> Self {
        if self.mode() == mode {
            return match self {
                Self::Range(DateRange {
                    from: Some(from),
                    to: Some(to),
                }) if from > to => {
                    logging::debug_warn!("inverted range {} to {}; swapping endpoints", from, to);
                    Self::Range(DateRange::between(from, to))
                }
                other => other,
            };
        }
        logging::debug_warn!(
            "{} selection supplied to a {} calendar; starting empty",
            self.mode().token(),
            mode.token()
        );
        Self::empty(mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Optional constraints on click transitions.
pub struct SelectionRules {
    /// Forbid clicks that would leave nothing selected.
    pub required: bool,
    /// Upper bound on selected days in multiple mode.
    pub max: Option<usize>,
}

/// Applies a click on `day` to `current`.
///
/// Returns the next selection, or `None` when the click is rejected and no
/// change notification should fire: the day is disabled, the click would clear
/// a `required` selection, or it would exceed `max` in multiple mode.
///
/// Single mode clears the selection when the selected day is clicked again.
/// Range mode starts a new range when the current one is empty or complete,
/// and otherwise closes it, swapping endpoints so `from <= to`.
pub fn select_day(
    current: &Selection,
    day: NaiveDate,
    disabled: &Matchers,
    rules: SelectionRules,
) -> Option<Selection> {
    if disabled.matches(day) {
        return None;
    }

    match current {
        Selection::Single(selected) => {
            if *selected == Some(day) {
                (!rules.required).then_some(Selection::Single(None))
            } else {
                Some(Selection::Single(Some(day)))
            }
        }
        Selection::Range(range) => {
            let next = match (range.from, range.to) {
                (Some(anchor), None) | (None, Some(anchor)) => DateRange::between(anchor, day),
                _ => DateRange::starting(day),
            };
            Some(Selection::Range(next))
        }
        Selection::Multiple(dates) => {
            let mut next = dates.clone();
            if next.contains(&day) {
                if rules.required && next.len() == 1 {
                    return None;
                }
                next.remove(&day);
            } else {
                if rules.max.is_some_and(|max| next.len() >= max) {
                    return None;
                }
                next.insert(day);
            }
            Some(Selection::Multiple(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::calendar::matcher::DateMatcher;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn click(current: &Selection, day: NaiveDate) -> Option<Selection> {
        select_day(current, day, &Matchers::new(), SelectionRules::default())
    }

    fn arb_day() -> impl Strategy<Value = NaiveDate> {
        (0i64..730).prop_map(|offset| ymd(2023, 1, 1) + chrono::Duration::days(offset))
    }

    fn arb_selection() -> impl Strategy<Value = Selection> {
        prop_oneof![
            prop::option::of(arb_day()).prop_map(Selection::Single),
            (prop::option::of(arb_day()), prop::option::of(arb_day()))
                .prop_map(|(from, to)| Selection::Range(DateRange { from, to })),
            prop::collection::btree_set(arb_day(), 0..8).prop_map(Selection::Multiple),
        ]
    }

    #[test]
    fn single_click_selects_the_day() {
        let next = click(&Selection::empty(SelectionMode::Single), ymd(2024, 3, 10));
        assert_eq!(next, Some(Selection::Single(Some(ymd(2024, 3, 10)))));
    }

    #[test]
    fn single_click_on_other_day_moves_selection() {
        let current = Selection::Single(Some(ymd(2024, 3, 10)));
        assert_eq!(
            click(&current, ymd(2024, 3, 12)),
            Some(Selection::Single(Some(ymd(2024, 3, 12))))
        );
    }

    #[test]
    fn single_reclick_clears_unless_required() {
        let current = Selection::Single(Some(ymd(2024, 3, 10)));
        assert_eq!(
            click(&current, ymd(2024, 3, 10)),
            Some(Selection::Single(None))
        );

        let required = SelectionRules {
            required: true,
            ..SelectionRules::default()
        };
        assert_eq!(
            select_day(&current, ymd(2024, 3, 10), &Matchers::new(), required),
            None
        );
    }

    #[test]
    fn range_second_click_before_first_swaps_endpoints() {
        let start = Selection::Range(DateRange::default());
        let after_first = click(&start, ymd(2024, 3, 10)).expect("first click");
        assert_eq!(
            after_first,
            Selection::Range(DateRange {
                from: Some(ymd(2024, 3, 10)),
                to: None,
            })
        );

        let after_second = click(&after_first, ymd(2024, 3, 5)).expect("second click");
        assert_eq!(
            after_second,
            Selection::Range(DateRange {
                from: Some(ymd(2024, 3, 5)),
                to: Some(ymd(2024, 3, 10)),
            })
        );
    }

    #[test]
    fn complete_range_restarts_on_next_click() {
        let current = Selection::Range(DateRange::between(ymd(2024, 3, 5), ymd(2024, 3, 10)));
        assert_eq!(
            click(&current, ymd(2024, 3, 20)),
            Some(Selection::Range(DateRange::starting(ymd(2024, 3, 20))))
        );
    }

    #[test]
    fn range_with_only_to_set_closes_around_it() {
        let current = Selection::Range(DateRange {
            from: None,
            to: Some(ymd(2024, 3, 10)),
        });
        assert_eq!(
            click(&current, ymd(2024, 3, 1)),
            Some(Selection::Range(DateRange::between(
                ymd(2024, 3, 1),
                ymd(2024, 3, 10)
            )))
        );
    }

    #[test]
    fn same_day_closes_a_one_day_range() {
        let current = Selection::Range(DateRange::starting(ymd(2024, 3, 10)));
        assert_eq!(
            click(&current, ymd(2024, 3, 10)),
            Some(Selection::Range(DateRange::between(
                ymd(2024, 3, 10),
                ymd(2024, 3, 10)
            )))
        );
    }

    #[test]
    fn multiple_respects_max_bound() {
        let rules = SelectionRules {
            max: Some(2),
            ..SelectionRules::default()
        };
        let current = Selection::Multiple([ymd(2024, 3, 1), ymd(2024, 3, 2)].into_iter().collect());

        assert_eq!(
            select_day(&current, ymd(2024, 3, 3), &Matchers::new(), rules),
            None
        );
        let removed = select_day(&current, ymd(2024, 3, 2), &Matchers::new(), rules)
            .expect("removal is always allowed");
        assert_eq!(removed, Selection::Multiple([ymd(2024, 3, 1)].into_iter().collect()));
    }

    #[test]
    fn multiple_required_keeps_last_day() {
        let rules = SelectionRules {
            required: true,
            max: None,
        };
        let current = Selection::Multiple([ymd(2024, 3, 1)].into_iter().collect());
        assert_eq!(
            select_day(&current, ymd(2024, 3, 1), &Matchers::new(), rules),
            None
        );
    }

    #[test]
    fn preselected_disabled_day_cannot_be_clicked() {
        let day = ymd(2024, 2, 12);
        let disabled = Matchers::from(DateMatcher::dates([day]));
        let current = Selection::Single(Some(day));
        assert_eq!(
            select_day(&current, day, &disabled, SelectionRules::default()),
            None
        );
    }

    #[test]
    fn mismatched_shapes_normalize_to_empty() {
        let single = Selection::Single(Some(ymd(2024, 3, 10)));
        assert_eq!(
            single.clone().normalized(SelectionMode::Range),
            Selection::Range(DateRange::default())
        );
        assert_eq!(single.clone().normalized(SelectionMode::Single), single);
    }

    #[test]
    fn inverted_range_is_reordered_on_normalize() {
        let inverted = Selection::Range(DateRange {
            from: Some(ymd(2024, 3, 10)),
            to: Some(ymd(2024, 3, 1)),
        });
        assert_eq!(
            inverted.normalized(SelectionMode::Range),
            Selection::Range(DateRange::between(ymd(2024, 3, 1), ymd(2024, 3, 10)))
        );

        let open = Selection::Range(DateRange {
            from: None,
            to: Some(ymd(2024, 3, 1)),
        });
        assert_eq!(open.clone().normalized(SelectionMode::Range), open);
    }

    #[test]
    fn first_date_picks_earliest_day() {
        let range = Selection::Range(DateRange {
            from: Some(ymd(2024, 3, 10)),
            to: Some(ymd(2024, 3, 1)),
        });
        assert_eq!(range.first_date(), Some(ymd(2024, 3, 1)));
        assert_eq!(Selection::empty(SelectionMode::Multiple).first_date(), None);
    }

    #[test]
    fn selection_serializes_with_mode_tag() {
        let selection = Selection::Range(DateRange::starting(ymd(2024, 3, 10)));
        let json = serde_json::to_value(&selection).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "mode": "range",
                "value": { "from": "2024-03-10", "to": null }
            })
        );
        let restored: Selection = serde_json::from_value(json).expect("deserialize");
        assert_eq!(restored, selection);
    }

    proptest! {
        #[test]
        fn disabled_days_never_change_selection(
            current in arb_selection(),
            disabled_days in prop::collection::btree_set(arb_day(), 1..16),
            pick in any::<prop::sample::Index>(),
            required in any::<bool>(),
            max in prop::option::of(0usize..6),
        ) {
            let days: Vec<NaiveDate> = disabled_days.iter().copied().collect();
            let day = *pick.get(&days);
            let disabled = Matchers::from(DateMatcher::Dates(disabled_days));
            let rules = SelectionRules { required, max };
            prop_assert_eq!(select_day(&current, day, &disabled, rules), None);
        }

        #[test]
        fn range_clicks_produce_ordered_bounds(d1 in arb_day(), d2 in arb_day()) {
            let empty = Selection::empty(SelectionMode::Range);
            let first = click(&empty, d1).expect("first click accepted");
            let second = click(&first, d2).expect("second click accepted");
            prop_assert_eq!(
                second,
                Selection::Range(DateRange { from: Some(d1.min(d2)), to: Some(d1.max(d2)) })
            );
        }

        #[test]
        fn double_toggle_restores_membership(
            days in prop::collection::btree_set(arb_day(), 0..8),
            day in arb_day(),
        ) {
            let original = Selection::Multiple(days);
            let once = click(&original, day).expect("toggle accepted");
            let twice = click(&once, day).expect("toggle accepted");
            prop_assert_eq!(twice, original);
        }

        #[test]
        fn transitions_preserve_mode(current in arb_selection(), day in arb_day()) {
            if let Some(next) = click(&current, day) {
                prop_assert_eq!(next.mode(), current.mode());
            }
        }
    }
}
