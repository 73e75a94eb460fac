//! Style patches and computed styles.

mod builder;
mod computed;
mod properties;

pub use builder::Style;
pub use computed::ComputedStyle;
pub use properties::StyleProperties;
