//! Gallery options and their resolution against the defaults table.
//!
//! [`Options`] is what a caller hands in: every field is optional. An absent
//! field takes its default, a present one is kept as given (including `0`
//! for `space`). [`Options::resolve`] produces the [`GalleryConfig`] the
//! engine works with.
//!
//! Options can also be written as a declaration list, the same syntax an
//! inline `style` attribute uses:
//!
//! ```rust
//! use simplery::Options;
//!
//! let config = Options::from_declarations("container: #gallery; items-per-row: 3; space: 10px")
//!     .unwrap()
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(config.items_per_row, 3);
//! assert_eq!(config.space, 10.0);
//! assert_eq!(config.item_width, 320.0);
//! ```

use std::time::Duration;

use gcss::parser::{parse_declarations, parse_length_value};
use gcss::{GcssError, RawDeclaration};

use crate::error::{GalleryError, Result};

pub const DEFAULT_ITEMS_PER_ROW: usize = 4;
pub const DEFAULT_SPACE: f64 = 0.0;
pub const DEFAULT_ITEM_WIDTH: f64 = 320.0;
pub const DEFAULT_ITEM_SELECTOR: &str = ".gallery-item";
/// Width reserved for a vertical scrollbar once content outgrows the viewport.
pub const DEFAULT_SCROLLBAR_WIDTH: f64 = 17.0;
pub const DEFAULT_RESIZE_DELAY: Duration = Duration::from_millis(50);

/// Caller-supplied gallery options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub container: Option<String>,
    pub items_per_row: Option<usize>,
    pub space: Option<f64>,
    pub item_width: Option<f64>,
    pub item_selector: Option<String>,
    pub scrollbar_width: Option<f64>,
    pub resize_delay: Option<Duration>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Selector of the layout root.
    pub container: String,
    /// Column count, always at least one.
    pub items_per_row: usize,
    /// Gutter size in pixels.
    pub space: f64,
    /// Nominal item width before clamping.
    pub item_width: f64,
    /// Selector matching the ordered items.
    pub item_selector: String,
    pub scrollbar_width: f64,
    /// Coalescing window for resize notifications.
    pub resize_delay: Duration,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.container = Some(selector.into());
        self
    }

    pub fn with_items_per_row(mut self, items_per_row: usize) -> Self {
        self.items_per_row = Some(items_per_row);
        self
    }

    pub fn with_space(mut self, space: f64) -> Self {
        self.space = Some(space);
        self
    }

    pub fn with_item_width(mut self, item_width: f64) -> Self {
        self.item_width = Some(item_width);
        self
    }

    pub fn with_item_selector(mut self, selector: impl Into<String>) -> Self {
        self.item_selector = Some(selector.into());
        self
    }

    pub fn with_scrollbar_width(mut self, width: f64) -> Self {
        self.scrollbar_width = Some(width);
        self
    }

    pub fn with_resize_delay(mut self, delay: Duration) -> Self {
        self.resize_delay = Some(delay);
        self
    }

    /// Parse options from a declaration list.
    ///
    /// Recognized names: `container`, `items-per-row`, `space`, `item-width`,
    /// `item-selector`, `scrollbar-width` and `resize-delay` (milliseconds,
    /// optionally suffixed with `ms`). Later declarations win.
    pub fn from_declarations(source: &str) -> Result<Self> {
        let mut options = Options::default();
        for declaration in parse_declarations(source)? {
            options.apply_declaration(&declaration)?;
        }
        Ok(options)
    }

    fn apply_declaration(&mut self, declaration: &RawDeclaration) -> Result<()> {
        let RawDeclaration { property, value } = declaration;
        match property.as_str() {
            "container" => self.container = Some(value.clone()),
            "item-selector" => self.item_selector = Some(value.clone()),
            "items-per-row" => {
                let count = value
                    .parse::<usize>()
                    .map_err(|_| invalid_value(property, value))?;
                self.items_per_row = Some(count);
            }
            "space" => self.space = Some(pixels(property, value)?),
            "item-width" => self.item_width = Some(pixels(property, value)?),
            "scrollbar-width" => self.scrollbar_width = Some(pixels(property, value)?),
            "resize-delay" => {
                let millis = value
                    .strip_suffix("ms")
                    .unwrap_or(value)
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| invalid_value(property, value))?;
                self.resize_delay = Some(Duration::from_millis(millis));
            }
            _ => return Err(GalleryError::UnknownOption(property.clone())),
        }
        Ok(())
    }

    /// Merge with the defaults table and check the invariants.
    pub fn resolve(&self) -> Result<GalleryConfig> {
        let container = match self.container.as_deref() {
            Some(selector) if !selector.is_empty() => selector.to_string(),
            _ => return Err(GalleryError::MissingContainer),
        };

        let items_per_row = self.items_per_row.unwrap_or(DEFAULT_ITEMS_PER_ROW);
        if items_per_row == 0 {
            return Err(GalleryError::InvalidItemsPerRow(items_per_row));
        }

        let space = non_negative("space", self.space.unwrap_or(DEFAULT_SPACE))?;
        let item_width = positive("item-width", self.item_width.unwrap_or(DEFAULT_ITEM_WIDTH))?;
        let scrollbar_width = non_negative(
            "scrollbar-width",
            self.scrollbar_width.unwrap_or(DEFAULT_SCROLLBAR_WIDTH),
        )?;

        Ok(GalleryConfig {
            container,
            items_per_row,
            space,
            item_width,
            item_selector: self
                .item_selector
                .clone()
                .unwrap_or_else(|| DEFAULT_ITEM_SELECTOR.to_string()),
            scrollbar_width,
            resize_delay: self.resize_delay.unwrap_or(DEFAULT_RESIZE_DELAY),
        })
    }
}

fn pixels(property: &str, value: &str) -> Result<f64> {
    parse_length_value(property, value)?
        .as_px()
        .ok_or_else(|| invalid_value(property, value))
}

fn invalid_value(property: &str, value: &str) -> GalleryError {
    GalleryError::InvalidOption(GcssError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    })
}

fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GalleryError::InvalidNumber { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GalleryError::InvalidNumber { name, value })
    }
}
