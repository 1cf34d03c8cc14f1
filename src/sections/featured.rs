use leptos::prelude::*;

use crate::content::FeaturedContent;

/// Featured promo block: discount badge, title, subtitle and CTA beside one
/// large product image.
#[component]
pub fn FeaturedSection(content: FeaturedContent) -> impl IntoView {
    view! {
        <section class="featured">
            <div class="featured-grid">
                <div class="featured-copy">
                    <span class="featured-badge">
                        <span class="featured-star">"★"</span>
                        {content.discount}
                    </span>
                    <h2 class="featured-title">{content.title}</h2>
                    <p class="featured-subtitle">{content.subtitle}</p>
                    // Inert, same as the hero CTA.
                    <button class="btn btn-cta">
                        "Shop Collection"
                        <span class="btn-cart">"🛒"</span>
                    </button>
                </div>
                <div class="featured-media">
                    <img class="featured-image" src=content.image alt="Featured Product"/>
                </div>
            </div>
        </section>
    }
}
