pub mod geometry;
pub mod layout;
pub mod style;

pub use geometry::{Length, Spacing, Unit};
pub use layout::{BoxSizing, Display, Position};
pub use style::{InlineStyle, StyleProps};
