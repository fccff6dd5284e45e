use leptos::*;
use moon_ui::prelude::*;

use super::{icon, Story, ARROW_UP_RIGHT, BOOKMARK, CHECK};

#[component]
pub(crate) fn BadgeDemo() -> impl IntoView {
    view! {
        <div class="earth-demo earth-demo-badge">
            <Story title="Variants">
                <div class="flex flex-wrap gap-2">
                    {BadgeVariant::ALL
                        .iter()
                        .map(|variant| view! { <Badge variant=*variant>{variant_label(*variant)}</Badge> })
                        .collect_view()}
                </div>
            </Story>
            <Story title="With icon">
                <div class="flex flex-wrap gap-2">
                    <Badge variant="secondary">
                        <span data-icon="inline-start">{icon(CHECK)}</span>
                        "Verified"
                    </Badge>
                    <Badge variant="outline">
                        "Bookmark"
                        <span data-icon="inline-end">{icon(BOOKMARK)}</span>
                    </Badge>
                </div>
            </Story>
            <Story title="Link">
                <Badge href="#link">
                    "Open Link "
                    <span data-icon="inline-end">{icon(ARROW_UP_RIGHT)}</span>
                </Badge>
            </Story>
        </div>
    }
}

fn variant_label(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "Default",
        BadgeVariant::Secondary => "Secondary",
        BadgeVariant::Destructive => "Destructive",
        BadgeVariant::Outline => "Outline",
        BadgeVariant::Ghost => "Ghost",
        BadgeVariant::Link => "Link",
    }
}
