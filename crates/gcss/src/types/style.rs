//! Typed inline declaration block.
//!
//! [`InlineStyle`] is what a host element's `style` attribute holds. Writes
//! made by the layout engine are themselves `InlineStyle`s and are overlaid
//! onto the element with [`InlineStyle::merge`], mirroring how assigning
//! `element.style.width` leaves every other property in place.

use std::fmt;

use bitflags::bitflags;

use super::geometry::{Length, Spacing};
use super::layout::{BoxSizing, Display, Position};

bitflags! {
    /// Set of properties declared on an [`InlineStyle`].
    ///
    /// # Example
    ///
    /// ```
    /// use gcss::{InlineStyle, Length, StyleProps};
    ///
    /// let style = InlineStyle::new().with_width(Length::px(320.0));
    /// assert_eq!(style.declared(), StyleProps::WIDTH);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleProps: u16 {
        const POSITION   = 0b0000_0000_0001;
        const DISPLAY    = 0b0000_0000_0010;
        const BOX_SIZING = 0b0000_0000_0100;
        const WIDTH      = 0b0000_0000_1000;
        const HEIGHT     = 0b0000_0001_0000;
        const LEFT       = 0b0000_0010_0000;
        const TOP        = 0b0000_0100_0000;
        const PADDING    = 0b0000_1000_0000;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineStyle {
    pub position: Option<Position>,
    pub display: Option<Display>,
    pub box_sizing: Option<BoxSizing>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub padding: Option<Spacing>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_box_sizing(mut self, box_sizing: BoxSizing) -> Self {
        self.box_sizing = Some(box_sizing);
        self
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_left(mut self, left: Length) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_top(mut self, top: Length) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Which properties carry a value.
    pub fn declared(&self) -> StyleProps {
        let mut props = StyleProps::empty();
        props.set(StyleProps::POSITION, self.position.is_some());
        props.set(StyleProps::DISPLAY, self.display.is_some());
        props.set(StyleProps::BOX_SIZING, self.box_sizing.is_some());
        props.set(StyleProps::WIDTH, self.width.is_some());
        props.set(StyleProps::HEIGHT, self.height.is_some());
        props.set(StyleProps::LEFT, self.left.is_some());
        props.set(StyleProps::TOP, self.top.is_some());
        props.set(StyleProps::PADDING, self.padding.is_some());
        props
    }

    pub fn is_empty(&self) -> bool {
        self.declared().is_empty()
    }

    /// Overlay every property declared on `other` onto `self`.
    pub fn merge(&mut self, other: &InlineStyle) {
        if other.position.is_some() {
            self.position = other.position;
        }
        if other.display.is_some() {
            self.display = other.display;
        }
        if other.box_sizing.is_some() {
            self.box_sizing = other.box_sizing;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.left.is_some() {
            self.left = other.left;
        }
        if other.top.is_some() {
            self.top = other.top;
        }
        if other.padding.is_some() {
            self.padding = other.padding;
        }
    }

    /// Serialize as a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(position) = self.position {
            parts.push(format!("position: {position}"));
        }
        if let Some(display) = self.display {
            parts.push(format!("display: {display}"));
        }
        if let Some(box_sizing) = self.box_sizing {
            parts.push(format!("box-sizing: {box_sizing}"));
        }
        if let Some(width) = self.width {
            parts.push(format!("width: {width}"));
        }
        if let Some(height) = self.height {
            parts.push(format!("height: {height}"));
        }
        if let Some(left) = self.left {
            parts.push(format!("left: {left}"));
        }
        if let Some(top) = self.top {
            parts.push(format!("top: {top}"));
        }
        if let Some(padding) = self.padding {
            parts.push(format!("padding: {padding}"));
        }

        if parts.is_empty() {
            return Ok(());
        }
        write!(f, "{};", parts.join("; "))
    }
}
