use leptos::*;
use leptos_router::{use_params_map, A};

use crate::catalog::find_demo;
use crate::demos::render_demo;

#[component]
pub(crate) fn ComponentPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|map| map.get("slug").cloned()).unwrap_or_default();

    move || {
        let slug = slug();
        match find_demo(&slug).and_then(|entry| entry.kind().map(|kind| (entry, kind))) {
            Some((entry, kind)) => view! {
                <article class="earth-component" data-demo=entry.slug.clone()>
                    <h1 class="earth-title">{entry.title.clone()}</h1>
                    <p class="earth-section-summary">{entry.summary.clone()}</p>
                    <ul class="earth-stories">
                        {entry
                            .stories
                            .iter()
                            .map(|story| view! { <li>{story.clone()}</li> })
                            .collect_view()}
                    </ul>
                    {render_demo(kind)}
                </article>
            }
            .into_view(),
            None => {
                logging::debug_warn!("no demo registered for `{slug}`");
                view! {
                    <section class="earth-not-found" role="status">
                        <h1 class="earth-title">"Component not found"</h1>
                        <p>{format!("No demo is registered under \"{slug}\".")}</p>
                        <A href="/">"Back to all components"</A>
                    </section>
                }
                .into_view()
            }
        }
    }
}
