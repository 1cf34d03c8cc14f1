use leptos::prelude::*;

use crate::content::{Category, FeaturedContent, HeroContent, default_categories};
use crate::reveal::{RevealDirection, RevealOnScroll};
use crate::sections::{CategorySection, FeaturedSection, HeroSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <LandingPage/> }
}

/// The landing composition: hero, featured promo and category grid, each
/// revealed on first scroll into view. All content props fall back to the
/// built-in sample catalog.
#[component]
pub fn LandingPage(
    #[prop(optional)] hero: Option<HeroContent>,
    #[prop(optional)] featured: Option<FeaturedContent>,
    #[prop(optional)] categories: Option<Vec<Category>>,
) -> impl IntoView {
    let hero = hero.unwrap_or_default();
    let featured = featured.unwrap_or_default();
    let categories = categories.unwrap_or_else(default_categories);

    view! {
        <div class="landing">
            <RevealOnScroll>
                <HeroSection content=hero/>
            </RevealOnScroll>
            // Opposite offset from the hero, so the promo slides down in.
            <RevealOnScroll direction=RevealDirection::Down>
                <FeaturedSection content=featured/>
            </RevealOnScroll>
            <RevealOnScroll>
                <CategorySection categories=categories/>
            </RevealOnScroll>
        </div>
    }
}
