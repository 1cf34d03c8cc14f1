// Havenwood furniture landing page — Leptos 0.8, client-side rendered.

mod content;
mod pages;
mod reveal;
mod sections;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{CategoryPage, HomePage};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting havenwood landing");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="page">
                <Routes fallback=|| view! { <HomePage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route
                        path=path!("/living-room-furniture")
                        view=|| view! { <CategoryPage name="Living Room"/> }
                    />
                    <Route
                        path=path!("/bedroom-furniture")
                        view=|| view! { <CategoryPage name="Bedroom"/> }
                    />
                    <Route
                        path=path!("/dining-room-furniture")
                        view=|| view! { <CategoryPage name="Dining Room"/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
