// Landing page sections, in display order: hero, featured promo, categories.

mod categories;
mod featured;
mod hero;

pub use categories::CategorySection;
pub use featured::FeaturedSection;
pub use hero::HeroSection;
