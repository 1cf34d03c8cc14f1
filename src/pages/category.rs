use leptos::prelude::*;
use leptos_router::components::A;

/// Placeholder destination for the category routes until the catalog pages
/// ship.
#[component]
pub fn CategoryPage(name: &'static str) -> impl IntoView {
    view! {
        <section class="category-page">
            <h1 class="section-title">{format!("{name} Furniture")}</h1>
            <p class="section-description">"The full collection is on its way."</p>
            <A href="/" attr:class="btn btn-secondary">
                "← Back to home"
            </A>
        </section>
    }
}
