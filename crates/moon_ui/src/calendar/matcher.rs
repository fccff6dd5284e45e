//! Date matchers used for disabled days and presentational modifiers.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Clone)]
/// One rule classifying calendar days.
pub enum DateMatcher {
    /// Explicit set of days.
    Dates(BTreeSet<NaiveDate>),
    /// Days strictly before the given day.
    Before(NaiveDate),
    /// Days strictly after the given day.
    After(NaiveDate),
    /// Days inside an inclusive interval, in either endpoint order.
    Between {
        /// One endpoint.
        from: NaiveDate,
        /// The other endpoint.
        to: NaiveDate,
    },
    /// Days falling on any of the listed weekdays.
    DaysOfWeek(Vec<Weekday>),
    /// Arbitrary predicate.
    Predicate(Rc<dyn Fn(NaiveDate) -> bool>),
}

impl DateMatcher {
    /// Matcher over an explicit list of days.
    pub fn dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self::Dates(dates.into_iter().collect())
    }

    /// Matcher backed by a closure.
    pub fn predicate(predicate: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        Self::Predicate(Rc::new(predicate))
    }

    /// Whether `date` matches this rule.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::Dates(dates) => dates.contains(&date),
            Self::Before(limit) => date < *limit,
            Self::After(limit) => date > *limit,
            Self::Between { from, to } => {
                let (low, high) = if from <= to { (from, to) } else { (to, from) };
                *low <= date && date <= *high
            }
            Self::DaysOfWeek(weekdays) => weekdays.contains(&date.weekday()),
            Self::Predicate(predicate) => predicate(date),
        }
    }
}

impl fmt::Debug for DateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dates(dates) => f.debug_tuple("Dates").field(dates).finish(),
            Self::Before(limit) => f.debug_tuple("Before").field(limit).finish(),
            Self::After(limit) => f.debug_tuple("After").field(limit).finish(),
            Self::Between { from, to } => f
                .debug_struct("Between")
                .field("from", from)
                .field("to", to)
                .finish(),
            Self::DaysOfWeek(weekdays) => f.debug_tuple("DaysOfWeek").field(weekdays).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// A set of matchers; a day matches when any rule matches. Cheap to clone.
pub struct Matchers(Rc<Vec<DateMatcher>>);

impl Matchers {
    /// Empty set, matching nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    pub fn with(self, matcher: DateMatcher) -> Self {
        let mut rules = (*self.0).clone();
        rules.push(matcher);
        Self(Rc::new(rules))
    }

    /// Whether any rule matches `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.0.iter().any(|matcher| matcher.matches(date))
    }

    /// Whether no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<DateMatcher> for Matchers {
    fn from(matcher: DateMatcher) -> Self {
        Self(Rc::new(vec![matcher]))
    }
}

impl From<Vec<DateMatcher>> for Matchers {
    fn from(matchers: Vec<DateMatcher>) -> Self {
        Self(Rc::new(matchers))
    }
}

impl From<Vec<NaiveDate>> for Matchers {
    fn from(dates: Vec<NaiveDate>) -> Self {
        DateMatcher::dates(dates).into()
    }
}

impl FromIterator<DateMatcher> for Matchers {
    fn from_iter<I: IntoIterator<Item = DateMatcher>>(iter: I) -> Self {
        Self(Rc::new(iter.into_iter().collect()))
    }
}

#[derive(Debug, Clone)]
/// Named presentational classification of days ("booked"). Never affects interaction.
pub struct Modifier {
    /// Modifier name, exposed through `data-modifiers`.
    pub name: String,
    /// Days carrying the modifier.
    pub matcher: Matchers,
    /// Extra classes applied to matching day buttons.
    pub class_name: Option<String>,
}

impl Modifier {
    /// New modifier without extra classes.
    pub fn new(name: impl Into<String>, matcher: impl Into<Matchers>) -> Self {
        Self {
            name: name.into(),
            matcher: matcher.into(),
            class_name: None,
        }
    }

    /// Attaches classes to matching day buttons.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn empty_matchers_match_nothing() {
        let matchers = Matchers::new();
        assert!(matchers.is_empty());
        assert!(!matchers.matches(ymd(2024, 3, 10)));
    }

    #[test]
    fn any_rule_is_enough() {
        let matchers = Matchers::new()
            .with(DateMatcher::Before(ymd(1900, 1, 1)))
            .with(DateMatcher::After(ymd(2024, 12, 31)))
            .with(DateMatcher::dates([ymd(2024, 3, 10)]));

        assert!(matchers.matches(ymd(1899, 12, 31)));
        assert!(matchers.matches(ymd(2025, 1, 1)));
        assert!(matchers.matches(ymd(2024, 3, 10)));
        assert!(!matchers.matches(ymd(2024, 3, 11)));
        assert!(!matchers.matches(ymd(1900, 1, 1)));
    }

    #[test]
    fn between_is_inclusive_in_either_order() {
        let matcher = DateMatcher::Between {
            from: ymd(2024, 3, 20),
            to: ymd(2024, 3, 10),
        };
        assert!(matcher.matches(ymd(2024, 3, 10)));
        assert!(matcher.matches(ymd(2024, 3, 15)));
        assert!(matcher.matches(ymd(2024, 3, 20)));
        assert!(!matcher.matches(ymd(2024, 3, 21)));
    }

    #[test]
    fn weekday_and_predicate_rules() {
        let weekends = DateMatcher::DaysOfWeek(vec![Weekday::Sat, Weekday::Sun]);
        assert!(weekends.matches(ymd(2024, 3, 10)));
        assert!(!weekends.matches(ymd(2024, 3, 11)));

        let odd_days = DateMatcher::predicate(|date| date.day() % 2 == 1);
        assert!(odd_days.matches(ymd(2024, 3, 11)));
        assert_eq!(format!("{odd_days:?}"), "Predicate(..)");
    }

    #[test]
    fn date_lists_convert_into_matchers() {
        let matchers = Matchers::from(vec![ymd(2024, 2, 12), ymd(2024, 2, 13)]);
        assert!(matchers.matches(ymd(2024, 2, 13)));
        assert!(!matchers.matches(ymd(2024, 2, 14)));
    }
}
