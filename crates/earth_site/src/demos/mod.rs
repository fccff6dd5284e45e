//! Story renderings for each component family.

use leptos::*;

use crate::catalog::DemoKind;

mod alert;
mod badge;
mod button;
mod calendar;
mod card;

use alert::AlertDemo;
use badge::BadgeDemo;
use button::ButtonDemo;
use calendar::CalendarDemo;
use card::CardDemo;

pub(crate) const ARROW_UP: &str = "m5 12 7-7 7 7M12 19V5";
pub(crate) const ARROW_UP_RIGHT: &str = "M7 7h10v10M7 17 17 7";
pub(crate) const ALERT_CIRCLE: &str = "M12 8v4M12 16h.01M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0";
pub(crate) const BOOKMARK: &str = "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z";
pub(crate) const CHECK: &str = "M20 6 9 17l-5-5";
pub(crate) const CIRCLE_CHECK: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0M9 12l2 2 4-4";
pub(crate) const GIT_BRANCH: &str =
    "M6 3v12M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6M18 9a9 9 0 0 1-9 9";

/// Stroke icon in the 24x24 outline style.
pub(crate) fn icon(path: &'static str) -> impl IntoView {
    view! {
        <svg
            class="earth-icon"
            viewBox="0 0 24 24"
            width="16"
            height="16"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

#[component]
/// Captioned story wrapper.
pub(crate) fn Story(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <figure class="earth-story" data-story=title>
            <figcaption class="earth-story-title">{title}</figcaption>
            <div class="earth-story-body">{children()}</div>
        </figure>
    }
}

pub(crate) fn render_demo(kind: DemoKind) -> View {
    match kind {
        DemoKind::Alert => view! { <AlertDemo /> }.into_view(),
        DemoKind::Badge => view! { <BadgeDemo /> }.into_view(),
        DemoKind::Button => view! { <ButtonDemo /> }.into_view(),
        DemoKind::Calendar => view! { <CalendarDemo /> }.into_view(),
        DemoKind::Card => view! { <CardDemo /> }.into_view(),
    }
}
