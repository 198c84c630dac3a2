//! # GCSS - Gallery inline styles
//!
//! The small slice of CSS a masonry gallery reads from and writes to its
//! host elements:
//!
//! - **Types**: [`Length`], [`Spacing`], layout keywords and the typed
//!   declaration block [`InlineStyle`]
//! - **Parsing**: inline `style` attributes and `name: value` declaration
//!   lists, built on `nom`
//! - **Serialization**: `InlineStyle` renders back to an attribute value
//!
//! ## Quick Start
//!
//! ```rust
//! use gcss::parser::parse_inline_style;
//! use gcss::{Length, Position};
//!
//! let mut style = parse_inline_style("width: 960px; background: #fff").unwrap();
//! style.merge(&gcss::InlineStyle::new().with_position(Position::Relative));
//!
//! assert_eq!(style.width, Some(Length::px(960.0)));
//! assert_eq!(style.to_css(), "position: relative; width: 960px;");
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::GcssError;
pub use parser::{RawDeclaration, parse_declarations, parse_inline_style};
pub use types::{BoxSizing, Display, InlineStyle, Length, Position, Spacing, StyleProps, Unit};
