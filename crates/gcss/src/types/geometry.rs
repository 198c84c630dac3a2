//! Lengths and box spacing written into inline styles.

use std::fmt;

/// Unit attached to a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// CSS pixels. Unitless numbers are read as pixels.
    #[default]
    Px,
    /// Percentage of the containing block.
    Percent,
    /// Percentage of the viewport width.
    ViewWidth,
    /// Percentage of the viewport height.
    ViewHeight,
    /// Size left to the host.
    Auto,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::ViewWidth => "vw",
            Unit::ViewHeight => "vh",
            Unit::Auto => "",
        }
    }
}

/// A numeric CSS length such as `247.5px` or `100%`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const AUTO: Self = Self {
        value: 0.0,
        unit: Unit::Auto,
    };
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Px,
    };

    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }

    /// Pixel value, if this length is absolute.
    pub fn as_px(&self) -> Option<f64> {
        match self.unit {
            Unit::Px => Some(self.value),
            _ => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            return f.write_str("auto");
        }
        // Normalize -0 so serialized styles stay stable across passes.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{}{}", value, self.unit.suffix())
    }
}

/// Four-sided box spacing, used for padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Spacing {
    pub fn all(value: Length) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn vertical_horizontal(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Pixel spacing with explicit top, right, bottom, left values.
    pub fn px(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: Length::px(top),
            right: Length::px(right),
            bottom: Length::px(bottom),
            left: Length::px(left),
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}
