//! The gallery instance and its layout pass.
//!
//! A pass runs synchronously to completion:
//!
//! 1. Read the container width (its box, or the viewport in full-width mode)
//! 2. Derive the item width, writing it to every item and measuring the
//!    result (see [`WidthCalculator`])
//! 3. Compute placements from the measured heights
//! 4. Write offsets to the items and the tallest column to the container
//!
//! The grid is built once at creation. The item width is the only state
//! carried from one pass to the next.

use std::fmt;
use std::future::Future;

use gcss::{BoxSizing, Display, InlineStyle, Length, Position};

use crate::config::{GalleryConfig, Options};
use crate::error::{GalleryError, Result};
use crate::grid::Grid;
use crate::heights::highest_column;
use crate::host::GalleryHost;
use crate::positions::{ItemPlacement, compute_positions, padding_for_row};
use crate::width::{ContainerWidth, WidthCalculator};

/// Output of one layout pass, in container-local pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// One placement per item, row-major.
    pub placements: Vec<ItemPlacement>,
    pub item_width: f64,
    pub container_width: f64,
    /// Height written to the container.
    pub height: f64,
    pub full_width: bool,
    /// The scrollbar compensation ran during this pass.
    pub compensated: bool,
}

/// A masonry gallery bound to one container and its items.
pub struct Gallery<E> {
    config: GalleryConfig,
    container: E,
    items: Vec<E>,
    grid: Grid,
    item_width: f64,
    full_width: bool,
    last_layout: LayoutResult,
}

impl<E> fmt::Debug for Gallery<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("container", &self.container)
            .field("items", &self.items.len())
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("item_width", &self.item_width)
            .field("full_width", &self.full_width)
            .finish()
    }
}

impl<E> Gallery<E>
where
    E: Copy + Eq + fmt::Debug,
{
    /// Resolve `options`, look up the container and items, and run the
    /// initial layout pass.
    pub fn create<H>(options: &Options, host: &mut H) -> Result<Self>
    where
        H: GalleryHost<Element = E>,
    {
        let config = options.resolve().inspect_err(|e| {
            log::debug!("gallery not initialized: {}", e);
        })?;

        let container = host.query(&config.container).ok_or_else(|| {
            log::debug!("gallery container `{}` not found", config.container);
            GalleryError::ContainerNotFound(config.container.clone())
        })?;

        let items = host.query_all(&config.item_selector);
        if items.is_empty() {
            log::debug!("no gallery items match `{}`", config.item_selector);
            return Err(GalleryError::NoItemsFound(config.item_selector.clone()));
        }

        let grid = Grid::partition(items.len(), config.items_per_row);
        log::debug!(
            "gallery `{}`: {} items in {} rows x {} cols",
            config.container,
            items.len(),
            grid.rows(),
            grid.cols()
        );

        let mut gallery = Self {
            item_width: config.item_width,
            config,
            container,
            items,
            grid,
            full_width: false,
            last_layout: LayoutResult::default(),
        };
        gallery.layout(host);
        Ok(gallery)
    }

    /// Wait for the host's "content ready" signal, then [`create`](Self::create).
    pub async fn create_when_ready<H, F>(ready: F, options: &Options, host: &mut H) -> Result<Self>
    where
        H: GalleryHost<Element = E>,
        F: Future<Output = ()>,
    {
        ready.await;
        Self::create(options, host)
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn container(&self) -> E {
        self.container
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Item width the next pass starts from.
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn is_full_width(&self) -> bool {
        self.full_width
    }

    /// Result of the most recent pass.
    pub fn last_layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    /// Width the container currently offers: the viewport in full-width
    /// mode, the container's own box otherwise.
    pub fn current_width<H>(&self, host: &H) -> f64
    where
        H: GalleryHost<Element = E>,
    {
        if self.full_width {
            host.viewport_width()
        } else {
            host.offset_width(self.container)
        }
    }

    /// Run one layout pass.
    pub fn layout<H>(&mut self, host: &mut H) -> &LayoutResult
    where
        H: GalleryHost<Element = E>,
    {
        let container = self.measure_container(host);
        let viewport_height = host.viewport_height();
        let calculator = WidthCalculator::new(
            self.grid.cols(),
            self.config.space,
            self.config.scrollbar_width,
        );

        let mut heights = Vec::new();
        let outcome = calculator.compute(self.item_width, container, viewport_height, |width| {
            self.apply_item_styles(host, width);
            heights = self.measure_heights(host);
            highest_column(&self.grid, &heights)
        });

        let placements =
            compute_positions(&self.grid, outcome.item_width, self.config.space, &heights);
        for placement in &placements {
            let mut style = InlineStyle::new().with_left(Length::px(placement.left));
            if placement.has_explicit_top() {
                style = style.with_top(Length::px(placement.top));
            }
            host.write_style(self.items[placement.index], &style);
        }

        host.write_style(
            self.container,
            &InlineStyle::new()
                .with_position(Position::Relative)
                .with_height(Length::px(outcome.highest_column)),
        );

        log::debug!(
            "layout pass: container {} (full width: {}), item width {}, height {}",
            outcome.container_width,
            container.full_width,
            outcome.item_width,
            outcome.highest_column
        );

        self.item_width = outcome.item_width;
        self.full_width = container.full_width;
        self.last_layout = LayoutResult {
            placements,
            item_width: outcome.item_width,
            container_width: outcome.container_width,
            height: outcome.highest_column,
            full_width: container.full_width,
            compensated: outcome.compensated,
        };
        &self.last_layout
    }

    /// Re-run the layout after the host reported a width change.
    ///
    /// The pass starts again from the configured item width, so items grow
    /// back after an earlier clamp and a width that fits is left untouched.
    pub fn on_resize<H>(&mut self, host: &mut H) -> &LayoutResult
    where
        H: GalleryHost<Element = E>,
    {
        self.item_width = self.config.item_width;
        log::debug!(
            "resize: current width {}, item width reset to {}",
            self.current_width(host),
            self.item_width
        );
        self.layout(host)
    }

    fn measure_container<H>(&self, host: &H) -> ContainerWidth
    where
        H: GalleryHost<Element = E>,
    {
        if host.inline_style(self.container).width.is_some() {
            ContainerWidth {
                width: host.offset_width(self.container),
                full_width: false,
            }
        } else {
            ContainerWidth {
                width: host.viewport_width(),
                full_width: true,
            }
        }
    }

    fn apply_item_styles<H>(&self, host: &mut H, width: f64)
    where
        H: GalleryHost<Element = E>,
    {
        let content = InlineStyle::new()
            .with_display(Display::Block)
            .with_width(Length::percent(100.0));

        for (index, &item) in self.items.iter().enumerate() {
            let row = self.grid.cell_of(index).map_or(0, |(row, _)| row);
            let style = InlineStyle::new()
                .with_display(Display::Block)
                .with_box_sizing(BoxSizing::BorderBox)
                .with_width(Length::px(width))
                .with_position(Position::Absolute)
                .with_padding(padding_for_row(row, self.config.space));
            host.write_style(item, &style);
            host.write_content_style(item, &content);
        }
    }

    fn measure_heights<H>(&self, host: &H) -> Vec<f64>
    where
        H: GalleryHost<Element = E>,
    {
        self.items
            .iter()
            .map(|&item| host.offset_height(item))
            .collect()
    }
}
