use leptos::prelude::*;

use crate::content::HeroContent;

/// Hero banner: call-to-action panel beside a 2-up image grid. Two columns
/// above the desktop breakpoint, stacked below it (see styles.css).
#[component]
pub fn HeroSection(content: HeroContent) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-panel">
                    <h3 class="hero-eyebrow">"New Collections"</h3>
                    <h2 class="hero-title">{content.title}</h2>
                    <p class="hero-description">{content.description}</p>
                    // Intentionally inert: no destination is part of the
                    // product yet, only the hover affordance.
                    <button class="btn btn-cta">
                        "Shop Now"
                        <span class="btn-chevron">"›"</span>
                    </button>
                </div>
                <div class="hero-images">
                    {content
                        .images
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <img
                                    class="hero-image"
                                    src=src
                                    alt=format!("Chair {}", i + 1)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
