//! In-memory host for exercising galleries without a browser.
//!
//! [`TestDocument`] models just enough of a document for the layout engine:
//! elements with an id, classes and an inline style, a viewport, and items
//! whose rendered height follows from the width written to them.
//!
//! # Example
//!
//! ```
//! use simplery::testing::{ItemShape, TestDocument};
//! use simplery::{Gallery, Options};
//!
//! let mut doc = TestDocument::new(1000.0, 800.0);
//! doc.add_container("gallery", Some("width: 1000px"));
//! for _ in 0..8 {
//!     doc.add_item(ItemShape::Fixed(100.0));
//! }
//!
//! let options = Options::new().with_container("#gallery").with_space(10.0);
//! let gallery = Gallery::create(&options, &mut doc).unwrap();
//! assert_eq!(gallery.item_width(), 247.5);
//! ```

use gcss::parser::parse_inline_style;
use gcss::{InlineStyle, Length, Spacing};

use crate::config::DEFAULT_ITEM_SELECTOR;
use crate::host::GalleryHost;

/// Handle to an element of a [`TestDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// How an item's content height responds to its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemShape {
    /// Content height is constant, like a block of text.
    Fixed(f64),
    /// Content height is `ratio × content width`, like a scaled image.
    AspectRatio(f64),
}

#[derive(Debug, Clone)]
struct TestElement {
    id: Option<String>,
    classes: Vec<String>,
    style: InlineStyle,
    content_style: InlineStyle,
    shape: ItemShape,
    style_writes: usize,
}

impl TestElement {
    fn new(id: Option<String>, classes: Vec<String>, style: InlineStyle, shape: ItemShape) -> Self {
        Self {
            id,
            classes,
            style,
            content_style: InlineStyle::new(),
            shape,
            style_writes: 0,
        }
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else {
            false
        }
    }
}

/// A flat document with a viewport.
#[derive(Debug, Clone)]
pub struct TestDocument {
    elements: Vec<TestElement>,
    viewport_width: f64,
    viewport_height: f64,
}

impl TestDocument {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            viewport_width,
            viewport_height,
        }
    }

    /// Add a container with the given id and optional inline `style` attribute.
    ///
    /// # Panics
    /// Panics if `style` does not parse.
    pub fn add_container(&mut self, id: &str, style: Option<&str>) -> ElementId {
        let style = style
            .map(|source| parse_inline_style(source).expect("invalid container style"))
            .unwrap_or_default();
        self.push(TestElement::new(
            Some(id.to_string()),
            Vec::new(),
            style,
            ItemShape::Fixed(0.0),
        ))
    }

    /// Add an item carrying the default gallery item class.
    pub fn add_item(&mut self, shape: ItemShape) -> ElementId {
        let class = DEFAULT_ITEM_SELECTOR.trim_start_matches('.');
        self.add_element_with_class(class, shape)
    }

    pub fn add_element_with_class(&mut self, class: &str, shape: ItemShape) -> ElementId {
        self.push(TestElement::new(
            None,
            vec![class.to_string()],
            InlineStyle::new(),
            shape,
        ))
    }

    fn push(&mut self, element: TestElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Replace an element's whole inline style, as editing the attribute would.
    pub fn set_style(&mut self, element: ElementId, style: InlineStyle) {
        self.elements[element.0].style = style;
    }

    pub fn style_of(&self, element: ElementId) -> &InlineStyle {
        &self.elements[element.0].style
    }

    pub fn content_style_of(&self, element: ElementId) -> &InlineStyle {
        &self.elements[element.0].content_style
    }

    /// Number of non-empty style writes the element received.
    pub fn style_writes(&self, element: ElementId) -> usize {
        self.elements[element.0].style_writes
    }

    fn width_of(&self, element: &TestElement) -> f64 {
        match element.style.width {
            Some(Length {
                value,
                unit: gcss::Unit::Px,
            }) => value,
            Some(Length {
                value,
                unit: gcss::Unit::Percent,
            }) => self.viewport_width * value / 100.0,
            Some(Length {
                value,
                unit: gcss::Unit::ViewWidth,
            }) => self.viewport_width * value / 100.0,
            _ => self.viewport_width,
        }
    }
}

fn px(length: Length) -> f64 {
    length.as_px().unwrap_or(0.0)
}

impl GalleryHost for TestDocument {
    type Element = ElementId;

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.matches(selector))
            .map(ElementId)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(selector))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn inline_style(&self, element: ElementId) -> InlineStyle {
        self.elements[element.0].style.clone()
    }

    fn offset_width(&self, element: ElementId) -> f64 {
        self.width_of(&self.elements[element.0])
    }

    fn offset_height(&self, element: ElementId) -> f64 {
        let element = &self.elements[element.0];
        if let Some(height) = element.style.height.and_then(|h| h.as_px()) {
            return height;
        }

        let padding = element.style.padding.unwrap_or(Spacing::all(Length::ZERO));
        let content_width =
            (self.width_of(element) - px(padding.left) - px(padding.right)).max(0.0);
        let content_height = match element.shape {
            ItemShape::Fixed(height) => height,
            ItemShape::AspectRatio(ratio) => content_width * ratio,
        };
        content_height + px(padding.top) + px(padding.bottom)
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn write_style(&mut self, element: ElementId, style: &InlineStyle) {
        if style.is_empty() {
            return;
        }
        let element = &mut self.elements[element.0];
        element.style.merge(style);
        element.style_writes += 1;
    }

    fn write_content_style(&mut self, element: ElementId, style: &InlineStyle) {
        self.elements[element.0].content_style.merge(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_ids_and_classes() {
        let mut doc = TestDocument::new(800.0, 600.0);
        let container = doc.add_container("gallery", None);
        let a = doc.add_item(ItemShape::Fixed(10.0));
        let b = doc.add_item(ItemShape::Fixed(10.0));

        assert_eq!(doc.query("#gallery"), Some(container));
        assert_eq!(doc.query("#missing"), None);
        assert_eq!(doc.query_all(".gallery-item"), vec![a, b]);
        assert!(doc.query_all("div").is_empty());
    }

    #[test]
    fn aspect_ratio_items_scale_with_width() {
        let mut doc = TestDocument::new(800.0, 600.0);
        let item = doc.add_item(ItemShape::AspectRatio(0.5));
        doc.write_style(
            item,
            &InlineStyle::new()
                .with_width(Length::px(200.0))
                .with_padding(Spacing::px(10.0, 10.0, 5.0, 10.0)),
        );

        // content 180 wide → 90 high, plus 15 vertical padding
        assert_eq!(doc.offset_height(item), 105.0);
    }

    #[test]
    fn container_without_width_spans_viewport() {
        let mut doc = TestDocument::new(1024.0, 600.0);
        let container = doc.add_container("g", None);
        assert_eq!(doc.offset_width(container), 1024.0);

        let fixed = doc.add_container("h", Some("width: 640px"));
        assert_eq!(doc.offset_width(fixed), 640.0);
    }

    #[test]
    fn empty_writes_are_not_recorded() {
        let mut doc = TestDocument::new(800.0, 600.0);
        let item = doc.add_item(ItemShape::Fixed(10.0));

        doc.write_style(item, &InlineStyle::new());
        assert_eq!(doc.style_writes(item), 0);

        doc.write_style(item, &InlineStyle::new().with_left(Length::px(12.0)));
        assert_eq!(doc.style_writes(item), 1);
        assert_eq!(doc.style_of(item).declared(), gcss::StyleProps::LEFT);
    }
}
