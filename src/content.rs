// Static content for the landing page. Everything here is the default
// sample catalog; callers can pass their own structs to `LandingPage`.

/// Static image assets, resolved by the hosting environment.
pub mod images {
    pub const BED: &str = "/bed.jpg";
    pub const SHOWPIECE: &str = "/showpiece.jpg";
    pub const WOODEN_SHOWPIECE: &str = "/woodenshowpiece.jpg";
    pub const CHAIR: &str = "/chair.jpg";
    pub const EGG_CHAIR: &str = "/eggchair.jpg";
    pub const DINING: &str = "/dinning.webp";
}

/// Copy for the hero banner. Always exactly two images, shown as a 2-up grid
/// beside the call-to-action panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub description: String,
    pub images: [String; 2],
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Accent Leisure Chairs".into(),
            description: "Elevate your living space with our meticulously crafted \
                          leisure chairs designed for comfort and style."
                .into(),
            images: [images::CHAIR.into(), images::EGG_CHAIR.into()],
        }
    }
}

/// Copy for the featured promo block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeaturedContent {
    pub title: String,
    pub subtitle: String,
    pub discount: String,
    pub image: String,
}

impl Default for FeaturedContent {
    fn default() -> Self {
        Self {
            title: "Modern & Minimal".into(),
            subtitle: "Discover elegance in simplicity".into(),
            discount: "UP TO 20% OFF".into(),
            image: images::SHOWPIECE.into(),
        }
    }
}

/// Destination path for a category name. A plain lookup over the recognized
/// display names; anything else deliberately lands on the root route.
pub fn category_route(name: &str) -> &'static str {
    match name {
        "Living Room" => "/living-room-furniture",
        "Bedroom" => "/bedroom-furniture",
        "Dining Room" => "/dining-room-furniture",
        _ => "/",
    }
}

/// One navigable category tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub image: String,
}

impl Category {
    pub fn new(name: &str, image: &str) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Destination path for this tile's click navigation.
    pub fn route(&self) -> &'static str {
        category_route(&self.name)
    }
}

/// The built-in category grid, in display order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Living Room", images::WOODEN_SHOWPIECE),
        Category::new("Bedroom", images::BED),
        Category::new("Dining Room", images::DINING),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_default_has_two_images() {
        let hero = HeroContent::default();
        assert_eq!(hero.images.len(), 2);
        assert_eq!(hero.images[0], images::CHAIR);
        assert_eq!(hero.images[1], images::EGG_CHAIR);
        assert!(!hero.title.is_empty());
    }

    #[test]
    fn featured_default_carries_discount_label() {
        let featured = FeaturedContent::default();
        assert_eq!(featured.discount, "UP TO 20% OFF");
        assert_eq!(featured.image, images::SHOWPIECE);
    }

    #[test]
    fn default_categories_in_display_order() {
        let names: Vec<String> = default_categories()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Living Room", "Bedroom", "Dining Room"]);
    }

    #[test]
    fn recognized_categories_map_to_their_routes() {
        assert_eq!(category_route("Living Room"), "/living-room-furniture");
        assert_eq!(category_route("Bedroom"), "/bedroom-furniture");
        assert_eq!(category_route("Dining Room"), "/dining-room-furniture");
    }

    // The silent fallback is policy, not an oversight: unknown names go home.
    #[test]
    fn unknown_category_falls_back_to_root() {
        assert_eq!(category_route("Office"), "/");
        assert_eq!(category_route(""), "/");
        assert_eq!(category_route("living room"), "/");
    }

    #[test]
    fn default_tiles_resolve_without_fallback() {
        for category in default_categories() {
            assert_ne!(category.route(), "/", "{} fell back to root", category.name);
        }
    }
}
