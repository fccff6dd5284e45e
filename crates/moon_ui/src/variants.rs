//! Class-name resolution for styling axes.
//!
//! Each styling dimension of a component (variant, size) is an exhaustive enum
//! implementing [`VariantAxis`]. Resolution is a pure function of the base
//! classes, the axis values in declaration order, and the caller override:
//! the same inputs always produce the same class string.

use leptos::logging;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A token that is not part of an axis' value set.
#[error("unknown {axis} value `{value}`")]
pub struct UnknownVariant {
    /// Axis name, for example `variant` or `size`.
    pub axis: &'static str,
    /// The rejected token.
    pub value: String,
}

/// A named styling dimension with a fixed, exhaustive set of values.
pub trait VariantAxis: Copy + Eq + Default + 'static {
    /// Axis name used in diagnostics and `data-*` attributes.
    const AXIS: &'static str;
    /// Every value of the axis, default first.
    const ALL: &'static [Self];

    /// Stable string token for the value (`"destructive"`, `"icon-sm"`).
    fn token(self) -> &'static str;

    /// Class emitted for the value.
    fn class(self) -> &'static str;

    /// Parses a token strictly.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `raw` names no value of the axis.
    fn parse(raw: &str) -> Result<Self, UnknownVariant> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.token() == raw)
            .ok_or_else(|| UnknownVariant {
                axis: Self::AXIS,
                value: raw.to_string(),
            })
    }

    /// Parses a token, degrading unknown input to the axis default.
    fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| {
            let fallback = Self::default();
            logging::debug_warn!("{err}; falling back to `{}`", fallback.token());
            fallback
        })
    }
}

/// Joins base classes, axis classes, and an optional override into one class string.
///
/// Fragments are split on whitespace and empty fragments are dropped, so the
/// output never carries doubled or trailing spaces. The override is always
/// appended last and never replaces resolver output.
pub fn resolve_classes<'a>(
    base: &'a str,
    axis_classes: impl IntoIterator<Item = &'a str>,
    class_name: Option<&'a str>,
) -> String {
    let mut resolved = String::new();
    let fragments = std::iter::once(base).chain(axis_classes).chain(class_name);
    for class in fragments.flat_map(str::split_whitespace) {
        if !resolved.is_empty() {
            resolved.push(' ');
        }
        resolved.push_str(class);
    }
    resolved
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed builder over [`resolve_classes`] used by every component.
pub struct ClassList {
    base: &'static str,
    axes: Vec<&'static str>,
}

impl ClassList {
    /// Starts a class list from a component's base classes.
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            axes: Vec::new(),
        }
    }

    /// Adds the class for one axis value. Call in axis declaration order.
    pub fn axis<A: VariantAxis>(mut self, value: A) -> Self {
        self.axes.push(value.class());
        self
    }

    /// Produces the final class string with the caller override appended.
    pub fn build(&self, class_name: Option<&str>) -> String {
        resolve_classes(self.base, self.axes.iter().copied(), class_name)
    }
}
