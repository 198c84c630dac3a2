//! Capabilities a rendering host provides to the layout engine.
//!
//! The engine never touches a document directly. Lookup, measurement and
//! style writes all go through [`GalleryHost`], which a browser binding, a
//! terminal renderer or the in-memory [`TestDocument`](crate::testing::TestDocument)
//! implements.

use std::fmt;

use gcss::InlineStyle;

pub trait GalleryHost {
    /// Handle to one element of the host document.
    type Element: Copy + Eq + fmt::Debug;

    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// The element's inline `style` declarations.
    fn inline_style(&self, element: Self::Element) -> InlineStyle;

    /// Rendered border-box width.
    fn offset_width(&self, element: Self::Element) -> f64;

    /// Rendered border-box height, reflecting the last style writes.
    fn offset_height(&self, element: Self::Element) -> f64;

    /// Width of the document body, used when the container has no explicit width.
    fn viewport_width(&self) -> f64;

    /// Visible height of the document body.
    fn viewport_height(&self) -> f64;

    /// Overlay `style` onto the element's inline style.
    fn write_style(&mut self, element: Self::Element, style: &InlineStyle);

    /// Overlay `style` onto the element's first child, the item's content.
    fn write_content_style(&mut self, element: Self::Element, style: &InlineStyle);
}
