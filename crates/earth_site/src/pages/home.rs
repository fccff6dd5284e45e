use leptos::*;
use leptos_router::A;

use crate::catalog::{demo_entries, DemoEntry};
use crate::demos::render_demo;

#[component]
pub(crate) fn HomePage() -> impl IntoView {
    view! {
        <div class="earth-home">
            <h1 class="earth-title">"All Components"</h1>
            <div class="earth-grid">
                {demo_entries().iter().map(demo_section).collect_view()}
            </div>
        </div>
    }
}

fn demo_section(entry: &'static DemoEntry) -> impl IntoView {
    view! {
        <section class="earth-section" data-demo=entry.slug.clone()>
            <h2 class="earth-section-title">
                <A href=entry.href()>{entry.title.clone()}</A>
            </h2>
            <p class="earth-section-summary">{entry.summary.clone()}</p>
            {entry.kind().map(render_demo)}
        </section>
    }
}
