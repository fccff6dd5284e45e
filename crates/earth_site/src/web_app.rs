use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::catalog::demo_entries;
use crate::pages::{ComponentPage, HomePage};

#[component]
pub fn EarthApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Earth" />
        <Meta name="description" content="Sandbox for the moon component library." />

        <Router>
            <div class="earth-root">
                <header class="earth-header">
                    <A href="" class="earth-brand">"All Components"</A>
                    <nav class="earth-nav" aria-label="Components">
                        {demo_entries()
                            .iter()
                            .map(|entry| view! { <A href=entry.href()>{entry.title.clone()}</A> })
                            .collect_view()}
                    </nav>
                </header>
                <main class="earth-main">
                    <Routes>
                        <Route path="" view=HomePage />
                        <Route path="/components/:slug" view=ComponentPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
