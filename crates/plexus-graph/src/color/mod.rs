//! Node category coloring.

mod palette;
mod styles;

pub use palette::CategoryPalette;
pub use styles::apply_styles;
