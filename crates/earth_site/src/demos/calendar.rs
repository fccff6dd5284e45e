use std::collections::BTreeSet;

use chrono::{Datelike, Days, Local, NaiveDate};
use leptos::*;
use moon_ui::prelude::*;

use super::Story;

const PRESETS: [(&str, u64); 5] = [
    ("Today", 0),
    ("Tomorrow", 1),
    ("In 3 days", 3),
    ("In a week", 7),
    ("In 2 weeks", 14),
];
const BOOKED_FROM_DAY: u32 = 12;
const BOOKED_NIGHTS: u32 = 15;
const RANGE_SPAN_DAYS: u64 = 30;
const MULTIPLE_MAX: usize = 3;

/// Day in the current year, falling back to `today` for impossible dates.
fn this_year(today: NaiveDate, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), month, day).unwrap_or(today)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Selected day and displayed month after pressing a preset.
fn preset_target(today: NaiveDate, offset_days: u64) -> (NaiveDate, NaiveDate) {
    let target = today.checked_add_days(Days::new(offset_days)).unwrap_or(today);
    (target, month_start(target))
}

fn booked_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..BOOKED_NIGHTS)
        .filter_map(|offset| NaiveDate::from_ymd_opt(today.year(), 2, BOOKED_FROM_DAY + offset))
        .collect()
}

fn initial_range(today: NaiveDate) -> Selection {
    let from = this_year(today, 1, 12);
    Selection::Range(DateRange {
        from: Some(from),
        to: from.checked_add_days(Days::new(RANGE_SPAN_DAYS)),
    })
}

/// Human readout of a selection.
fn selection_summary(selection: &Selection) -> String {
    match selection {
        Selection::Single(None) => "No date selected".to_string(),
        Selection::Single(Some(date)) => format!("Selected {}", day_key(*date)),
        Selection::Range(DateRange { from: None, to: None }) => "No range selected".to_string(),
        Selection::Range(DateRange {
            from: Some(from),
            to: Some(to),
        }) => format!("{} to {}", day_key(*from), day_key(*to)),
        Selection::Range(DateRange { from, to }) => {
            let edge = from.or(*to).map(day_key).unwrap_or_default();
            format!("{edge} to ...")
        }
        Selection::Multiple(dates) if dates.is_empty() => "No dates selected".to_string(),
        Selection::Multiple(dates) => {
            let keys: Vec<String> = dates.iter().copied().map(day_key).collect();
            format!("{} selected: {}", dates.len(), keys.join(", "))
        }
    }
}

#[component]
pub(crate) fn CalendarDemo() -> impl IntoView {
    let today = Local::now().date_naive();

    view! {
        <div class="earth-demo earth-demo-calendar">
            <Story title="Single">
                <SingleStory today=today />
            </Story>
            <Story title="Range">
                <RangeStory today=today />
            </Story>
            <Story title="Month and year selector">
                <Calendar
                    mode=SelectionMode::Single
                    caption_layout=CaptionLayout::Dropdown
                    today=today
                    class_name="rounded-lg border"
                />
            </Story>
            <Story title="Presets">
                <PresetsStory today=today />
            </Story>
            <Story title="Booked dates">
                <BookedStory today=today />
            </Story>
            <Story title="Week numbers">
                <WeekNumbersStory today=today />
            </Story>
            <Story title="Multiple">
                <MultipleStory today=today />
            </Story>
        </div>
    }
}

#[component]
fn SingleStory(today: NaiveDate) -> impl IntoView {
    let selection = create_rw_signal(Selection::empty(SelectionMode::Single));

    view! {
        <Calendar
            mode=SelectionMode::Single
            today=today
            on_select=Callback::new(move |value: Selection| selection.set(value))
            class_name="rounded-lg border"
        />
        <p class="earth-readout">{move || selection.with(selection_summary)}</p>
    }
}

#[component]
fn RangeStory(today: NaiveDate) -> impl IntoView {
    let range = create_rw_signal(initial_range(today));
    let disabled = Matchers::new()
        .with(DateMatcher::After(today))
        .with(DateMatcher::Before(
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
        ));

    view! {
        <Card class_name="mx-auto w-fit p-0">
            <CardContent class_name="p-0">
                <Calendar
                    mode=SelectionMode::Range
                    selected=range
                    on_select=Callback::new(move |value: Selection| range.set(value))
                    number_of_months=2
                    disabled=disabled
                    today=today
                />
            </CardContent>
            <CardFooter>
                <p class="earth-readout">{move || range.with(selection_summary)}</p>
            </CardFooter>
        </Card>
    }
}

#[component]
fn PresetsStory(today: NaiveDate) -> impl IntoView {
    let date = create_rw_signal(Selection::Single(Some(this_year(today, 2, 12))));
    let month = create_rw_signal(month_start(today));

    view! {
        <Card size=CardSize::Sm class_name="mx-auto w-fit max-w-[300px]">
            <CardContent>
                <Calendar
                    mode=SelectionMode::Single
                    selected=date
                    on_select=Callback::new(move |value: Selection| date.set(value))
                    month=month
                    on_month_change=Callback::new(move |value: NaiveDate| month.set(value))
                    fixed_weeks=true
                    today=today
                    class_name="p-0"
                />
            </CardContent>
            <CardFooter class_name="flex flex-wrap gap-2 border-t">
                {PRESETS
                    .iter()
                    .map(|(label, offset)| {
                        let offset = *offset;
                        view! {
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                class_name="flex-1"
                                on_click=Callback::new(move |_: ev::MouseEvent| {
                                    let (target, target_month) = preset_target(today, offset);
                                    date.set(Selection::Single(Some(target)));
                                    month.set(target_month);
                                })
                            >
                                {*label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </CardFooter>
        </Card>
    }
}

#[component]
fn BookedStory(today: NaiveDate) -> impl IntoView {
    let date = create_rw_signal(Selection::Single(Some(this_year(today, 2, 3))));
    let booked = booked_dates(today);
    let modifiers = vec![Modifier::new("booked", booked.clone())
        .with_class("[&>button]:line-through opacity-100")];

    view! {
        <Card class_name="mx-auto w-fit p-0">
            <CardContent class_name="p-0">
                <Calendar
                    mode=SelectionMode::Single
                    selected=date
                    on_select=Callback::new(move |value: Selection| date.set(value))
                    disabled=booked
                    modifiers=modifiers
                    today=today
                />
            </CardContent>
        </Card>
    }
}

#[component]
fn WeekNumbersStory(today: NaiveDate) -> impl IntoView {
    let date = create_rw_signal(Selection::Single(Some(this_year(today, 2, 3))));

    view! {
        <Card class_name="mx-auto w-fit p-0">
            <CardContent class_name="p-0">
                <Calendar
                    mode=SelectionMode::Single
                    selected=date
                    on_select=Callback::new(move |value: Selection| date.set(value))
                    show_week_number=true
                    week_starts_on=WeekStart::Monday
                    today=today
                />
            </CardContent>
        </Card>
    }
}

#[component]
fn MultipleStory(today: NaiveDate) -> impl IntoView {
    let initial = Selection::Multiple(BTreeSet::from([today]));
    let selection = create_rw_signal(initial.clone());

    view! {
        <Calendar
            mode=SelectionMode::Multiple
            default_selected=initial
            on_select=Callback::new(move |value: Selection| selection.set(value))
            max=MULTIPLE_MAX
            required=true
            show_outside_days=false
            today=today
            class_name="rounded-lg border"
        />
        <p class="earth-readout">{move || selection.with(selection_summary)}</p>
    }
}
