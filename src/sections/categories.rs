use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::content::Category;

/// Pairs each category with its resolved destination, in display order. The
/// grid consumes this directly, so an empty list yields an empty grid.
fn tile_targets(categories: Vec<Category>) -> Vec<(Category, &'static str)> {
    categories
        .into_iter()
        .map(|category| {
            let path = category.route();
            (category, path)
        })
        .collect()
}

/// Category grid: heading, subheading, one clickable tile per category.
/// Three columns at the desktop breakpoint.
#[component]
pub fn CategorySection(categories: Vec<Category>) -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <section class="categories">
            <h2 class="section-title">"Choose Your Category"</h2>
            <p class="section-description">
                "Select your perfect piece from our carefully curated category options"
            </p>
            <div class="category-grid">
                {tile_targets(categories)
                    .into_iter()
                    .map(|(category, path)| {
                        let navigate = navigate.clone();
                        let on_click = move |_| {
                            log::debug!("category tile clicked, navigating to {path}");
                            navigate(path, Default::default());
                        };
                        view! {
                            <div class="category-card" on:click=on_click>
                                <div class="category-card-media">
                                    <img
                                        class="category-card-image"
                                        src=category.image
                                        alt=category.name.clone()
                                    />
                                </div>
                                <div class="category-card-body">
                                    <h3 class="category-card-name">{category.name}</h3>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_categories;

    #[test]
    fn empty_category_list_yields_zero_tiles() {
        assert!(tile_targets(Vec::new()).is_empty());
    }

    #[test]
    fn tiles_keep_display_order_and_routes() {
        let targets = tile_targets(default_categories());
        let routes: Vec<&str> = targets.iter().map(|(_, path)| *path).collect();
        assert_eq!(
            routes,
            [
                "/living-room-furniture",
                "/bedroom-furniture",
                "/dining-room-furniture",
            ]
        );
        assert_eq!(targets[0].0.name, "Living Room");
    }
}
