//! Shared wrapper primitives and their styling axes.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::variants::{ClassList, VariantAxis};

mod alert;
mod badge;
mod button;
mod card;

pub use alert::{Alert, AlertAction, AlertDescription, AlertTitle};
pub use badge::Badge;
pub(crate) use button::button_class;
pub use button::{Button, ButtonHost};
pub use card::{Card, CardAction, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert variants.
pub enum AlertVariant {
    /// Neutral informational alert.
    Default,
    /// Destructive/error alert.
    Destructive,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantAxis for AlertVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Destructive];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "moon-alert--default",
            Self::Destructive => "moon-alert--destructive",
        }
    }
}

impl From<&str> for AlertVariant {
    fn from(raw: &str) -> Self {
        Self::parse_or_default(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge variants.
pub enum BadgeVariant {
    /// Solid primary badge.
    Default,
    /// Muted badge.
    Secondary,
    /// Destructive badge.
    Destructive,
    /// Outlined badge.
    Outline,
    /// Borderless, background-less badge.
    Ghost,
    /// Link-styled badge.
    Link,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantAxis for BadgeVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
        Self::Ghost,
        Self::Link,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "moon-badge--default",
            Self::Secondary => "moon-badge--secondary",
            Self::Destructive => "moon-badge--destructive",
            Self::Outline => "moon-badge--outline",
            Self::Ghost => "moon-badge--ghost",
            Self::Link => "moon-badge--link",
        }
    }
}

impl From<&str> for BadgeVariant {
    fn from(raw: &str) -> Self {
        Self::parse_or_default(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button variants.
pub enum ButtonVariant {
    /// Solid primary action.
    Default,
    /// Outlined action.
    Outline,
    /// Muted secondary action.
    Secondary,
    /// Background-less action.
    Ghost,
    /// Destructive action.
    Destructive,
    /// Link-styled action.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantAxis for ButtonVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Destructive,
        Self::Link,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
            Self::Link => "link",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "moon-button--default",
            Self::Outline => "moon-button--outline",
            Self::Secondary => "moon-button--secondary",
            Self::Ghost => "moon-button--ghost",
            Self::Destructive => "moon-button--destructive",
            Self::Link => "moon-button--link",
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(raw: &str) -> Self {
        Self::parse_or_default(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens, including square icon-only sizes.
pub enum ButtonSize {
    /// Default height and padding.
    Default,
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Large.
    Lg,
    /// Square icon button at default size.
    Icon,
    /// Square icon button, extra small.
    IconXs,
    /// Square icon button, small.
    IconSm,
    /// Square icon button, large.
    IconLg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantAxis for ButtonSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Xs,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconXs,
        Self::IconSm,
        Self::IconLg,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
            Self::IconXs => "icon-xs",
            Self::IconSm => "icon-sm",
            Self::IconLg => "icon-lg",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "moon-button--size-default",
            Self::Xs => "moon-button--size-xs",
            Self::Sm => "moon-button--size-sm",
            Self::Lg => "moon-button--size-lg",
            Self::Icon => "moon-button--size-icon",
            Self::IconXs => "moon-button--size-icon-xs",
            Self::IconSm => "moon-button--size-icon-sm",
            Self::IconLg => "moon-button--size-icon-lg",
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(raw: &str) -> Self {
        Self::parse_or_default(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card density.
pub enum CardSize {
    /// Regular spacing.
    Default,
    /// Compact spacing.
    Sm,
}

impl Default for CardSize {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantAxis for CardSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "moon-card--size-default",
            Self::Sm => "moon-card--size-sm",
        }
    }
}

impl From<&str> for CardSize {
    fn from(raw: &str) -> Self {
        Self::parse_or_default(raw)
    }
}

/// Class string for axis-less sub-slots (titles, descriptions, footers).
pub(crate) fn slot_class(base: &'static str, class_name: Option<&str>) -> String {
    ClassList::new(base).build(class_name)
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Forwards `event` to `handler` unless the control is disabled.
///
/// Returns whether the handler ran.
pub(crate) fn dispatch_unless_disabled<E: 'static>(
    disabled: bool,
    handler: Option<Callback<E>>,
    event: E,
) -> bool {
    if disabled {
        return false;
    }
    match handler {
        Some(handler) => {
            handler.call(event);
            true
        }
        None => false,
    }
}

/// Event handler that reads `disabled` at dispatch time.
///
/// `on_blocked` sees every event swallowed while disabled.
pub(crate) fn disabled_guard<E: 'static>(
    disabled: MaybeSignal<bool>,
    on_click: Option<Callback<E>>,
    on_blocked: impl Fn(&E) + 'static,
) -> impl Fn(E) + 'static {
    move |ev: E| {
        let disabled = disabled.get_untracked();
        if disabled {
            on_blocked(&ev);
        }
        dispatch_unless_disabled(disabled, on_click, ev);
    }
}

/// Click plumbing shared by every clickable host element.
pub(crate) fn guarded_click(
    disabled: MaybeSignal<bool>,
    prevent_default_when_disabled: bool,
    on_click: Option<Callback<MouseEvent>>,
) -> impl Fn(MouseEvent) + 'static {
    disabled_guard(disabled, on_click, move |ev: &MouseEvent| {
        if prevent_default_when_disabled {
            ev.prevent_default();
        }
    })
}

#[cfg(test)]
pub(crate) mod markup {
    //! Server-side rendering helpers for component tests.

    use leptos::*;

    /// Renders `view` to HTML with hydration comments removed.
    pub(crate) fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
        let _ = leptos::create_runtime();
        let html = view().into_view().render_to_string().to_string();
        strip_comments(&html)
    }

    fn strip_comments(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;
        while let Some(start) = rest.find("<!--") {
            out.push_str(&rest[..start]);
            rest = match rest[start..].find("-->") {
                Some(end) => &rest[start + end + 3..],
                None => "",
            };
        }
        out.push_str(rest);
        out
    }

    /// Opening tag of the first element whose attributes contain `marker`.
    pub(crate) fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html
            .find(marker)
            .unwrap_or_else(|| panic!("{marker} missing from {html}"));
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    /// Markup following the opening tag located by `marker`.
    pub(crate) fn after_opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let tag = opening_tag(html, marker);
        let start = html.find(tag).expect("tag present");
        &html[start + tag.len()..]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn all_axis_classes<A: VariantAxis>() -> Vec<&'static str> {
        A::ALL.iter().map(|value| value.class()).collect()
    }

    fn exactly_one_axis_class<A: VariantAxis>(resolved: &str) -> bool {
        let axis_classes = all_axis_classes::<A>();
        resolved
            .split_whitespace()
            .filter(|class| axis_classes.contains(class))
            .count()
            == 1
    }

    #[test]
    fn defaults_are_first_in_every_axis() {
        assert_eq!(AlertVariant::ALL[0], AlertVariant::default());
        assert_eq!(BadgeVariant::ALL[0], BadgeVariant::default());
        assert_eq!(ButtonVariant::ALL[0], ButtonVariant::default());
        assert_eq!(ButtonSize::ALL[0], ButtonSize::default());
        assert_eq!(CardSize::ALL[0], CardSize::default());
    }

    #[test]
    fn tokens_round_trip_through_strict_parse() {
        for value in ButtonSize::ALL {
            assert_eq!(ButtonSize::parse(value.token()), Ok(*value));
        }
        for value in BadgeVariant::ALL {
            assert_eq!(BadgeVariant::parse(value.token()), Ok(*value));
        }
    }

    #[test]
    fn unknown_badge_variant_renders_default_class() {
        let variant = BadgeVariant::from("invalid");
        let classes = ClassList::new("moon-badge").axis(variant).build(None);
        assert_eq!(variant, BadgeVariant::Default);
        assert_eq!(classes, "moon-badge moon-badge--default");
    }

    #[test]
    fn button_resolves_variant_before_size() {
        let classes = ClassList::new("moon-button")
            .axis(ButtonVariant::from("outline"))
            .axis(ButtonSize::from("icon-sm"))
            .build(Some("rounded-full"));
        assert_eq!(
            classes,
            "moon-button moon-button--outline moon-button--size-icon-sm rounded-full"
        );
    }

    #[test]
    fn disabled_control_never_reaches_handler() {
        let _ = leptos::create_runtime();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let handler = Callback::new(move |_: ()| counter.set(counter.get() + 1));

        assert!(!dispatch_unless_disabled(true, Some(handler), ()));
        assert_eq!(calls.get(), 0);

        assert!(dispatch_unless_disabled(false, Some(handler), ()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn guard_reads_disabled_state_per_event() {
        let _ = leptos::create_runtime();
        let locked = create_rw_signal(true);
        let calls = Rc::new(Cell::new(0));
        let blocked = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let blocked_counter = Rc::clone(&blocked);
        let handler = Callback::new(move |_: ()| counter.set(counter.get() + 1));
        let click = disabled_guard(
            MaybeSignal::derive(move || locked.get()),
            Some(handler),
            move |_: &()| blocked_counter.set(blocked_counter.get() + 1),
        );

        click(());
        click(());
        assert_eq!((calls.get(), blocked.get()), (0, 2));

        locked.set(false);
        click(());
        assert_eq!((calls.get(), blocked.get()), (1, 2));
    }

    #[test]
    fn missing_handler_is_not_an_error() {
        assert!(!dispatch_unless_disabled::<()>(false, None, ()));
    }

    proptest! {
        #[test]
        fn every_button_combination_has_one_class_per_axis(
            variant in prop::sample::select(ButtonVariant::ALL),
            size in prop::sample::select(ButtonSize::ALL),
        ) {
            let resolved = ClassList::new("moon-button").axis(variant).axis(size).build(None);
            prop_assert!(exactly_one_axis_class::<ButtonVariant>(&resolved));
            prop_assert!(exactly_one_axis_class::<ButtonSize>(&resolved));
            prop_assert!(resolved.contains(variant.class()));
            prop_assert!(resolved.contains(size.class()));
        }

        #[test]
        fn unrecognized_tokens_resolve_to_default_class(raw in "[a-z-]{0,12}") {
            let known = BadgeVariant::ALL.iter().any(|value| value.token() == raw);
            prop_assume!(!known);
            let resolved = ClassList::new("moon-badge").axis(BadgeVariant::from(raw.as_str())).build(None);
            prop_assert_eq!(resolved, "moon-badge moon-badge--default");
        }
    }
}
