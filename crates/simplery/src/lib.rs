//! # Simplery - masonry gallery layout
//!
//! Arranges a fixed, ordered set of items into a fixed number of columns.
//! Every item gets the same width; each one sits directly under the item
//! above it in its column, so columns of uneven heights pack without gaps.
//!
//! The engine talks to its rendering host only through [`GalleryHost`]:
//! element lookup, box measurement and inline style writes. The layout math
//! itself ([`grid`], [`width`], [`heights`], [`positions`]) is pure and works
//! on item indices.
//!
//! ## Quick Start
//!
//! ```
//! use simplery::testing::{ItemShape, TestDocument};
//! use simplery::{Gallery, Options};
//!
//! let mut doc = TestDocument::new(1280.0, 900.0);
//! doc.add_container("gallery", None);
//! for ratio in [0.75, 1.5, 1.0, 0.6, 1.25] {
//!     doc.add_item(ItemShape::AspectRatio(ratio));
//! }
//!
//! let options = Options::new().with_container("#gallery").with_items_per_row(4);
//! let mut gallery = Gallery::create(&options, &mut doc).unwrap();
//!
//! // The fifth item starts the second row, under the first.
//! let layout = gallery.layout(&mut doc);
//! assert_eq!(layout.placements[4].left, 0.0);
//! assert_eq!(layout.placements[4].top, 240.0);
//! ```

pub mod config;
pub mod error;
pub mod gallery;
pub mod grid;
pub mod heights;
pub mod host;
mod log_init;
pub mod positions;
pub mod resize;
pub mod testing;
pub mod width;

pub use config::{GalleryConfig, Options};
pub use error::{GalleryError, Result};
pub use gallery::{Gallery, LayoutResult};
pub use grid::Grid;
pub use host::GalleryHost;
pub use log_init::init_logger;
pub use positions::ItemPlacement;
pub use resize::{Debouncer, Relayout, ResizeController, ResizeSubscription};
pub use width::{ContainerWidth, WidthCalculator, WidthOutcome};

// Re-export so hosts can build styles and log through the same facade.
pub use gcss;
pub use log;
