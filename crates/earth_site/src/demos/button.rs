use leptos::*;
use moon_ui::prelude::*;

use super::{icon, Story, ARROW_UP, ARROW_UP_RIGHT, GIT_BRANCH};

const SIZE_ROWS: [(&str, ButtonSize, ButtonSize); 4] = [
    ("Extra Small", ButtonSize::Xs, ButtonSize::IconXs),
    ("Small", ButtonSize::Sm, ButtonSize::IconSm),
    ("Default", ButtonSize::Default, ButtonSize::Icon),
    ("Large", ButtonSize::Lg, ButtonSize::IconLg),
];

#[component]
pub(crate) fn ButtonDemo() -> impl IntoView {
    let enabled_clicks = create_rw_signal(0u32);
    let disabled_clicks = create_rw_signal(0u32);
    let locked = create_rw_signal(true);

    view! {
        <div class="earth-demo earth-demo-button">
            <Story title="Variants">
                <div class="flex flex-wrap items-center gap-2">
                    <Button>"Button"</Button>
                    <Button variant="outline">"Outline"</Button>
                    <Button variant="secondary">"Secondary"</Button>
                    <Button variant="ghost">"Ghost"</Button>
                    <Button variant="destructive">"Destructive"</Button>
                    <Button variant="link">"Link"</Button>
                </div>
            </Story>
            <Story title="Sizes">
                <div class="flex flex-col items-start gap-8 sm:flex-row">
                    {SIZE_ROWS
                        .iter()
                        .map(|(label, size, icon_size)| {
                            view! {
                                <div class="flex items-start gap-2">
                                    <Button variant=ButtonVariant::Outline size=*size>{*label}</Button>
                                    <Button variant=ButtonVariant::Outline size=*icon_size aria_label="Submit">
                                        {icon(ARROW_UP_RIGHT)}
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Story>
            <Story title="Icon">
                <div class="flex flex-wrap items-center gap-2">
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Icon aria_label="Submit">
                        {icon(ARROW_UP)}
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        class_name="rounded-full"
                        aria_label="Scroll to top"
                    >
                        {icon(ARROW_UP)}
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        leading_icon=|| icon(GIT_BRANCH)
                    >
                        "New Branch"
                    </Button>
                </div>
            </Story>
            <Story title="Link host">
                <Button
                    variant=ButtonVariant::Link
                    as_host=ButtonHost::anchor("/components/card")
                    trailing_icon=|| icon(ARROW_UP_RIGHT)
                >
                    "Card demo"
                </Button>
            </Story>
            <Story title="Disabled">
                <div class="flex flex-wrap items-center gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_: ev::MouseEvent| enabled_clicks.update(|count| *count += 1))
                    >
                        {move || format!("Clicked {}", enabled_clicks.get())}
                    </Button>
                    <Button
                        disabled=locked
                        on_click=Callback::new(move |_: ev::MouseEvent| disabled_clicks.update(|count| *count += 1))
                    >
                        {move || format!("Disabled clicks {}", disabled_clicks.get())}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=Callback::new(move |_: ev::MouseEvent| locked.update(|locked| *locked = !*locked))
                    >
                        {move || if locked.get() { "Unlock" } else { "Lock" }}
                    </Button>
                </div>
            </Story>
        </div>
    }
}
