//! Uniform item width derivation.
//!
//! A full row must never be wider than the container. When the nominal
//! `item_width * cols` overflows, the width is clamped to
//! `(container_width - space) / cols`.
//!
//! Narrowing items changes their heights. In full-width mode the taller
//! content can push the page past the viewport, and the scrollbar that then
//! appears eats horizontal space. The calculator compensates for that
//! exactly once per pass: the container loses `scrollbar_width + space` and
//! the width is recomputed from the narrower value. It does not iterate to a
//! fixed point.

/// Width of the layout root and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerWidth {
    pub width: f64,
    /// The container has no explicit width and spans the viewport.
    pub full_width: bool,
}

/// Result of one width computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthOutcome {
    /// Width every item ends up with.
    pub item_width: f64,
    /// Container width after any scrollbar compensation.
    pub container_width: f64,
    /// The nominal width was clamped to fit the row.
    pub changed: bool,
    /// The scrollbar compensation pass ran.
    pub compensated: bool,
    /// Tallest column after the final width application.
    pub highest_column: f64,
}

/// Width that fits `cols` items plus one gutter into `container_width`.
pub fn fit_width(container_width: f64, cols: usize, space: f64) -> f64 {
    if cols == 0 {
        return 0.0;
    }
    ((container_width - space) / cols as f64).max(0.0)
}

/// Clamp `item_width` so a row of `cols` items fits the container.
///
/// Returns `None` when the row already fits and the width stays as is.
pub fn clamp_item_width(
    item_width: f64,
    cols: usize,
    space: f64,
    container_width: f64,
) -> Option<f64> {
    let row_width = item_width * cols as f64;
    (cols > 0 && row_width > container_width).then(|| fit_width(container_width, cols, space))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthCalculator {
    pub cols: usize,
    pub space: f64,
    pub scrollbar_width: f64,
}

impl WidthCalculator {
    pub fn new(cols: usize, space: f64, scrollbar_width: f64) -> Self {
        Self {
            cols,
            space,
            scrollbar_width,
        }
    }

    /// Derive the final item width.
    ///
    /// `apply` writes a width onto every item, measures them and returns the
    /// tallest column height. It runs once, or twice when the scrollbar
    /// compensation triggers.
    pub fn compute<F>(
        &self,
        item_width: f64,
        container: ContainerWidth,
        viewport_height: f64,
        mut apply: F,
    ) -> WidthOutcome
    where
        F: FnMut(f64) -> f64,
    {
        let mut container_width = container.width;
        let mut item_width = item_width;
        let mut changed = false;

        if let Some(clamped) =
            clamp_item_width(item_width, self.cols, self.space, container_width)
        {
            log::debug!(
                "item width {} overflows container {}, clamped to {}",
                item_width,
                container_width,
                clamped
            );
            item_width = clamped;
            changed = true;
        }

        let mut highest_column = apply(item_width);
        let mut compensated = false;

        if container.full_width && changed && highest_column > viewport_height {
            container_width -= self.scrollbar_width + self.space;
            item_width = fit_width(container_width, self.cols, self.space);
            log::debug!(
                "content height {} exceeds viewport {}, compensating scrollbar: width {}",
                highest_column,
                viewport_height,
                item_width
            );
            highest_column = apply(item_width);
            compensated = true;
        }

        WidthOutcome {
            item_width,
            container_width,
            changed,
            compensated,
            highest_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(width: f64) -> ContainerWidth {
        ContainerWidth {
            width,
            full_width: true,
        }
    }

    fn fixed(width: f64) -> ContainerWidth {
        ContainerWidth {
            width,
            full_width: false,
        }
    }

    #[test]
    fn row_that_fits_is_left_alone() {
        assert_eq!(clamp_item_width(320.0, 4, 10.0, 1280.0), None);
        assert_eq!(clamp_item_width(200.0, 4, 10.0, 1000.0), None);
    }

    #[test]
    fn overflowing_row_is_clamped() {
        let clamped = clamp_item_width(320.0, 4, 10.0, 1000.0).unwrap();
        assert_eq!(clamped, 247.5);
        assert!((clamped * 4.0 - (1000.0 - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn tiny_container_does_not_go_negative() {
        assert_eq!(fit_width(5.0, 4, 10.0), 0.0);
    }

    #[test]
    fn applies_once_without_overflow() {
        let calc = WidthCalculator::new(4, 10.0, 17.0);
        let mut applied = Vec::new();
        let outcome = calc.compute(320.0, full(1000.0), 800.0, |w| {
            applied.push(w);
            500.0
        });

        assert_eq!(applied, vec![247.5]);
        assert!(outcome.changed);
        assert!(!outcome.compensated);
        assert_eq!(outcome.container_width, 1000.0);
        assert_eq!(outcome.highest_column, 500.0);
    }

    #[test]
    fn compensates_scrollbar_once_in_full_width_mode() {
        let calc = WidthCalculator::new(4, 10.0, 17.0);
        let mut applied = Vec::new();
        let outcome = calc.compute(320.0, full(1000.0), 800.0, |w| {
            applied.push(w);
            2000.0
        });

        // 1000 - 17 - 10 = 973, (973 - 10) / 4 = 240.75
        assert_eq!(applied, vec![247.5, 240.75]);
        assert!(outcome.compensated);
        assert_eq!(outcome.container_width, 973.0);
        assert_eq!(outcome.item_width, 240.75);
    }

    #[test]
    fn fixed_width_container_never_compensates() {
        let calc = WidthCalculator::new(4, 10.0, 17.0);
        let outcome = calc.compute(320.0, fixed(1000.0), 800.0, |_| 2000.0);
        assert!(!outcome.compensated);
        assert_eq!(outcome.item_width, 247.5);
    }

    #[test]
    fn unchanged_width_never_compensates() {
        let calc = WidthCalculator::new(4, 0.0, 17.0);
        let outcome = calc.compute(200.0, full(1000.0), 100.0, |_| 2000.0);
        assert!(!outcome.changed);
        assert!(!outcome.compensated);
        assert_eq!(outcome.item_width, 200.0);
    }
}
