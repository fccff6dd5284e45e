use chrono::{Datelike, Local, NaiveDate};
use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};

use super::controller::CalendarController;
use super::date::{add_months, day_label, month_caption, month_name};
use super::grid::{DayContext, DayFacts, GridDay, GridOptions, MonthGrid, WeekStart};
use super::matcher::{Matchers, Modifier};
use super::navigation::MonthNavigator;
use super::selection::{Selection, SelectionMode, SelectionRules};
use crate::primitives::{
    bool_token, button_class, guarded_click, slot_class, Button, ButtonSize, ButtonVariant,
};

const CHEVRON_LEFT: &str = "m15 18-6-6 6-6";
const CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How each month caption renders.
pub enum CaptionLayout {
    /// Plain "March 2024" label.
    Label,
    /// Month and year `<select>` controls.
    Dropdown,
}

impl Default for CaptionLayout {
    fn default() -> Self {
        Self::Label
    }
}

impl CaptionLayout {
    fn token(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Dropdown => "dropdown",
        }
    }
}

struct CalendarConfig {
    disabled: Matchers,
    modifiers: Vec<Modifier>,
    today: NaiveDate,
    grid: GridOptions,
    caption_layout: CaptionLayout,
    show_outside_days: bool,
    show_week_number: bool,
}

impl CalendarConfig {
    fn context(&self) -> DayContext<'_> {
        DayContext {
            disabled: &self.disabled,
            modifiers: &self.modifiers,
            today: Some(self.today),
        }
    }
}

/// Applies a day click and notifies `on_select` with the accepted value.
///
/// Returns whether the click was accepted.
pub(crate) fn commit_day_click(
    controller: RwSignal<CalendarController>,
    day: NaiveDate,
    disabled: &Matchers,
    on_select: Option<Callback<Selection>>,
) -> bool {
    let Some(next) = controller
        .try_update(|controller| controller.click(day, disabled))
        .flatten()
    else {
        return false;
    };
    if let Some(on_select) = on_select {
        on_select.call(next);
    }
    true
}

/// Runs a navigation step and notifies `on_month_change` when the display moved.
pub(crate) fn commit_month_change(
    navigator: RwSignal<MonthNavigator>,
    step: impl FnOnce(&mut MonthNavigator) -> bool,
    on_month_change: Option<Callback<NaiveDate>>,
) -> bool {
    let moved = navigator.try_update(step).unwrap_or(false);
    if moved {
        if let Some(on_month_change) = on_month_change {
            on_month_change.call(navigator.get_untracked().month());
        }
    }
    moved
}

pub(crate) fn day_aria_label(facts: &DayFacts) -> String {
    let mut label = day_label(facts.date);
    if facts.today {
        label = format!("Today, {label}");
    }
    if facts.selected {
        label.push_str(", selected");
    }
    label
}

fn day_cell_class(facts: &DayFacts) -> String {
    let mut classes = vec!["moon-calendar-day"];
    if facts.outside {
        classes.push("moon-calendar-day--outside");
    }
    classes.extend(facts.modifier_classes.iter().map(String::as_str));
    classes.join(" ")
}

fn chevron(path: &'static str) -> impl IntoView {
    view! {
        <svg
            class="moon-calendar-chevron"
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
/// Month-grid date picker in single, range, or multiple mode.
///
/// The calendar always displays its latest computed selection and reports
/// accepted clicks through `on_select`. Passing `selected` makes a caller-owned
/// signal authoritative: every change to it replaces the displayed value.
/// Likewise `month` drives the displayed month and `on_month_change` reports
/// navigation.
pub fn Calendar(
    #[prop(optional)] mode: SelectionMode,
    #[prop(optional, into)] selected: Option<Signal<Selection>>,
    #[prop(optional)] default_selected: Option<Selection>,
    #[prop(optional)] on_select: Option<Callback<Selection>>,
    #[prop(optional, into)] disabled: Matchers,
    #[prop(optional)] modifiers: Vec<Modifier>,
    #[prop(optional)] required: bool,
    #[prop(optional)] max: Option<usize>,
    #[prop(optional)] default_month: Option<NaiveDate>,
    #[prop(optional, into)] month: Option<Signal<NaiveDate>>,
    #[prop(optional)] on_month_change: Option<Callback<NaiveDate>>,
    #[prop(optional)] start_month: Option<NaiveDate>,
    #[prop(optional)] end_month: Option<NaiveDate>,
    #[prop(default = 1)] number_of_months: u32,
    #[prop(optional)] caption_layout: CaptionLayout,
    #[prop(default = true)] show_outside_days: bool,
    #[prop(optional)] show_week_number: bool,
    #[prop(optional)] fixed_weeks: bool,
    #[prop(optional)] week_starts_on: WeekStart,
    #[prop(optional)] today: Option<NaiveDate>,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let rules = SelectionRules { required, max };
    let initial = selected
        .map(|selected| selected.get_untracked())
        .or(default_selected);
    let controller = create_rw_signal(CalendarController::new(mode, initial, rules));

    let initial_month = month
        .map(|month| month.get_untracked())
        .or(default_month)
        .or_else(|| controller.with_untracked(|controller| controller.selection().first_date()))
        .unwrap_or(today);
    let navigator = create_rw_signal(
        MonthNavigator::new(initial_month, number_of_months).with_bounds(start_month, end_month),
    );

    let config = store_value(CalendarConfig {
        disabled,
        modifiers,
        today,
        grid: GridOptions {
            week_starts_on,
            fixed_weeks,
        },
        caption_layout,
        show_outside_days,
        show_week_number,
    });

    if let Some(selected) = selected {
        create_effect(move |_| {
            let value = selected.get();
            let changed = controller.with_untracked(|controller| controller.selection() != &value);
            if changed {
                controller.update(|controller| {
                    controller.sync_external(value);
                });
            }
        });
    }

    if let Some(month) = month {
        create_effect(move |_| {
            let target = month.get();
            let changed = navigator.with_untracked(|navigator| navigator.clamp(target) != navigator.month());
            if changed {
                navigator.update(|navigator| {
                    navigator.go_to(target);
                });
            }
        });
    }

    let go_previous = Callback::new(move |_: MouseEvent| {
        commit_month_change(navigator, MonthNavigator::previous, on_month_change);
    });
    let go_next = Callback::new(move |_: MouseEvent| {
        commit_month_change(navigator, MonthNavigator::next, on_month_change);
    });

    view! {
        <div
            class=slot_class("moon-calendar", class_name.as_deref())
            data-slot="calendar"
            data-mode=mode.token()
            data-caption-layout=caption_layout.token()
        >
            <div class="moon-calendar-months">
                <nav class="moon-calendar-nav" aria-label="Calendar navigation">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class_name="moon-calendar-button-previous"
                        aria_label="Go to the Previous Month"
                        disabled=MaybeSignal::derive(move || {
                            !navigator.with(|navigator| navigator.can_go_previous())
                        })
                        on_click=go_previous
                    >
                        {chevron(CHEVRON_LEFT)}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class_name="moon-calendar-button-next"
                        aria_label="Go to the Next Month"
                        disabled=MaybeSignal::derive(move || {
                            !navigator.with(|navigator| navigator.can_go_next())
                        })
                        on_click=go_next
                    >
                        {chevron(CHEVRON_RIGHT)}
                    </Button>
                </nav>
                {move || {
                    navigator
                        .with(|navigator| navigator.months())
                        .into_iter()
                        .enumerate()
                        .map(|(index, month)| {
                            render_month(
                                month,
                                index as i32,
                                controller,
                                navigator,
                                config,
                                on_select,
                                on_month_change,
                            )
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn render_month(
    month: NaiveDate,
    index: i32,
    controller: RwSignal<CalendarController>,
    navigator: RwSignal<MonthNavigator>,
    config: StoredValue<CalendarConfig>,
    on_select: Option<Callback<Selection>>,
    on_month_change: Option<Callback<NaiveDate>>,
) -> View {
    let (grid_options, caption_layout, show_outside_days, show_week_number) =
        config.with_value(|config| {
            (
                config.grid,
                config.caption_layout,
                config.show_outside_days,
                config.show_week_number,
            )
        });
    let grid = MonthGrid::build(month, grid_options);
    let caption = month_caption(month);

    let caption_view = match caption_layout {
        CaptionLayout::Label => view! {
            <span class="moon-calendar-caption-label" aria-live="polite">
                {caption.clone()}
            </span>
        }
        .into_view(),
        CaptionLayout::Dropdown => render_dropdowns(month, index, navigator, config, on_month_change),
    };

    let week_number_header = show_week_number.then(|| {
        view! { <th class="moon-calendar-week-number-header" aria-label="Week Number"></th> }
    });
    let weekday_headers = grid_options
        .week_starts_on
        .labels()
        .into_iter()
        .map(|label| view! { <th class="moon-calendar-weekday" scope="col">{label}</th> })
        .collect_view();

    let rows = grid
        .weeks
        .into_iter()
        .map(|week| {
            let week_number = show_week_number.then(|| {
                view! { <td class="moon-calendar-week-number">{week.number}</td> }
            });
            let cells = week
                .days
                .into_iter()
                .map(|day| render_day_cell(day, show_outside_days, controller, config, on_select))
                .collect_view();
            view! {
                <tr class="moon-calendar-week">
                    {week_number}
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="moon-calendar-month" data-month=month.format("%Y-%m").to_string()>
            <div class="moon-calendar-caption">{caption_view}</div>
            <table class="moon-calendar-month-grid" role="grid" aria-label=caption>
                <thead>
                    <tr class="moon-calendar-weekdays">
                        {week_number_header}
                        {weekday_headers}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_view()
}

fn render_dropdowns(
    month: NaiveDate,
    index: i32,
    navigator: RwSignal<MonthNavigator>,
    config: StoredValue<CalendarConfig>,
    on_month_change: Option<Callback<NaiveDate>>,
) -> View {
    let today = config.with_value(|config| config.today);
    let (years, bounds) = navigator.with_untracked(|navigator| (navigator.dropdown_years(today), *navigator));

    let jump = move |target: Option<NaiveDate>| {
        if let Some(target) = target {
            commit_month_change(
                navigator,
                |navigator| navigator.go_to(add_months(target, -index)),
                on_month_change,
            );
        }
    };

    let month_options = (1..=12)
        .map(|number| {
            let selectable = NaiveDate::from_ymd_opt(month.year(), number, 1)
                .is_some_and(|candidate| bounds.month_selectable(candidate));
            view! {
                <option
                    value=number.to_string()
                    selected={number == month.month()}
                    disabled={!selectable}
                >
                    {month_name(number)}
                </option>
            }
        })
        .collect_view();
    let year_options = years
        .map(|year| {
            view! {
                <option value=year.to_string() selected={year == month.year()}>
                    {year}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="moon-calendar-dropdowns">
            <select
                class="moon-calendar-dropdown moon-calendar-months-dropdown"
                aria-label="Choose the Month"
                on:change=move |ev| {
                    let target = event_target_value(&ev)
                        .parse::<u32>()
                        .ok()
                        .and_then(|number| NaiveDate::from_ymd_opt(month.year(), number, 1));
                    jump(target);
                }
            >
                {month_options}
            </select>
            <select
                class="moon-calendar-dropdown moon-calendar-years-dropdown"
                aria-label="Choose the Year"
                on:change=move |ev| {
                    let target = event_target_value(&ev)
                        .parse::<i32>()
                        .ok()
                        .and_then(|year| NaiveDate::from_ymd_opt(year, month.month(), 1));
                    jump(target);
                }
            >
                {year_options}
            </select>
        </div>
    }
    .into_view()
}

fn render_day_cell(
    day: GridDay,
    show_outside_days: bool,
    controller: RwSignal<CalendarController>,
    config: StoredValue<CalendarConfig>,
    on_select: Option<Callback<Selection>>,
) -> View {
    if day.outside && !show_outside_days {
        return view! { <td class="moon-calendar-day moon-calendar-day--hidden" role="gridcell"></td> }
            .into_view();
    }

    let facts = create_memo(move |_| {
        controller.with(|controller| {
            config.with_value(|config| {
                DayFacts::compute(day, controller.selection(), config.context())
            })
        })
    });
    let on_click = Callback::new(move |_: MouseEvent| {
        config.with_value(|config| {
            commit_day_click(controller, day.date, &config.disabled, on_select);
        });
    });

    view! {
        <td
            class=move || facts.with(day_cell_class)
            role="gridcell"
            aria-selected=move || bool_token(facts.with(|facts| facts.selected))
        >
            <CalendarDayButton facts=facts on_click=on_click/>
        </td>
    }
    .into_view()
}

#[component]
/// One day of the grid, exposing its [`DayFacts`] as `data-*` attributes.
///
/// Disabled days render a disabled button and never forward clicks.
pub fn CalendarDayButton(
    #[prop(into)] facts: Signal<DayFacts>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let extra = match class_name {
        Some(class_name) => format!("moon-calendar-day-button {class_name}"),
        None => "moon-calendar-day-button".to_string(),
    };
    let disabled = MaybeSignal::derive(move || facts.with(|facts| facts.disabled));
    let flag = move |read: fn(&DayFacts) -> bool| move || bool_token(facts.with(read));

    view! {
        <button
            type="button"
            class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, Some(&extra))
            data-slot="calendar-day-button"
            data-day=move || facts.with(|facts| facts.key.clone())
            data-selected=flag(|facts| facts.selected)
            data-selected-single=flag(|facts| facts.selected_single)
            data-range-start=flag(|facts| facts.range_start)
            data-range-end=flag(|facts| facts.range_end)
            data-range-middle=flag(|facts| facts.range_middle)
            data-disabled=flag(|facts| facts.disabled)
            data-outside=flag(|facts| facts.outside)
            data-today=flag(|facts| facts.today)
            data-modifiers=move || {
                facts.with(|facts| (!facts.modifiers.is_empty()).then(|| facts.modifiers.join(" ")))
            }
            aria-label=move || facts.with(day_aria_label)
            disabled=move || disabled.get()
            on:click=guarded_click(disabled, false, on_click)
        >
            {move || facts.with(|facts| facts.date.day())}
        </button>
    }
}
