//! Pan/zoom state over a fixed-size image.
//!
//! The visible region is `image / zoom` in size, centred on `center` and
//! pushed back inside the image when the centre is too close to an edge.

use tracing::debug;

use crate::geometry::{Point, Region};

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    center: (f64, f64),
    zoom: f64,
}

impl Viewport {
    /// A viewport showing the whole `width` x `height` image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            center: (width as f64 / 2.0, height as f64 / 2.0),
            zoom: 1.0,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Largest zoom that still leaves one whole pixel visible on each axis.
    pub fn max_zoom(&self) -> f64 {
        self.width.min(self.height).max(1) as f64
    }

    /// Currently visible rectangle in full-image coordinates.
    pub fn visible_region(&self) -> Region {
        let (w, h) = (self.width as f64, self.height as f64);
        let vis_w = w / self.zoom;
        let vis_h = h / self.zoom;

        let x0 = (self.center.0 - vis_w / 2.0).max(0.0).min(w - vis_w);
        let y0 = (self.center.1 - vis_h / 2.0).max(0.0).min(h - vis_h);

        Region {
            x0: x0 as i64,
            y0: y0 as i64,
            x1: (x0 + vis_w) as i64,
            y1: (y0 + vis_h) as i64,
        }
    }

    /// Recentre on a point given relative to the current visible region.
    pub fn set_center(&mut self, local_x: i64, local_y: i64) {
        let top_left = self.visible_region().top_left();
        self.center = ((top_left.x + local_x) as f64, (top_left.y + local_y) as f64);
    }

    /// Multiply the zoom by `factor`, clamped to `[1.0, max_zoom]`.
    pub fn zoom_in(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(1.0, self.max_zoom());
    }

    /// Recentre on a viewport-local point, then zoom in.
    pub fn zoom_at(&mut self, local_x: i64, local_y: i64, factor: f64) {
        self.set_center(local_x, local_y);
        self.zoom_in(factor);
        debug!(center = ?self.center, zoom = self.zoom, "zoomed");
    }

    pub fn reset_zoom(&mut self) {
        self.center = (self.width as f64 / 2.0, self.height as f64 / 2.0);
        self.zoom = 1.0;
    }

    /// Offset of `point` from the visible region's top-left corner, or `None`
    /// when it lies outside the half-open visible region.
    pub fn to_local(&self, point: Point) -> Option<(i64, i64)> {
        let region = self.visible_region();
        if region.contains(point) {
            Some((point.x - region.x0, point.y - region.y0))
        } else {
            None
        }
    }

    /// Full-image coordinates of a viewport-local point.
    pub fn to_full(&self, local_x: i64, local_y: i64) -> Point {
        let top_left = self.visible_region().top_left();
        Point::new(top_left.x + local_x, top_left.y + local_y)
    }
}
