use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Mapping between a [`Viewport`] and the pixels it is drawn into.
///
/// With `equal_aspect` the viewport is letterboxed: one scale is used for
/// both axes and the plotted area is centred inside the pixel rect. The
/// imaginary axis grows upwards on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotArea {
    viewport: Viewport,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    pixel_rect: PixelRect,
}

impl PlotArea {
    #[must_use]
    pub fn new(viewport: Viewport, pixel_rect: PixelRect, equal_aspect: bool) -> Self {
        let rect_left = pixel_rect.top_left().x as f64;
        let rect_top = pixel_rect.top_left().y as f64;
        let rect_width = pixel_rect.width() as f64;
        let rect_height = pixel_rect.height() as f64;

        if !equal_aspect {
            return Self {
                viewport,
                left: rect_left,
                top: rect_top,
                width: rect_width,
                height: rect_height,
                pixel_rect,
            };
        }

        let scale = (rect_width / viewport.width()).min(rect_height / viewport.height());
        let width = viewport.width() * scale;
        let height = viewport.height() * scale;

        Self {
            viewport,
            left: rect_left + (rect_width - width) / 2.0,
            top: rect_top + (rect_height - height) / 2.0,
            width,
            height,
            pixel_rect,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pixel containing `c`, or `None` when `c` lies outside the viewport.
    #[must_use]
    pub fn to_pixel(&self, c: Complex) -> Option<Point> {
        if !self.viewport.contains(c) {
            return None;
        }

        let fx = (c.real - self.viewport.x_min()) / self.viewport.width();
        let fy = (self.viewport.y_max() - c.imag) / self.viewport.height();

        // The right and bottom edges belong to the last pixel column and row.
        let x = (self.left + fx * self.width).floor().min(self.right_edge() - 1.0);
        let y = (self.top + fy * self.height).floor().min(self.bottom_edge() - 1.0);

        let point = Point {
            x: x as i32,
            y: y as i32,
        };

        self.pixel_rect.contains_point(point).then_some(point)
    }

    /// Complex coordinate under the screen position `(x, y)`, or `None` when
    /// the position is outside the plotted area.
    #[must_use]
    pub fn to_complex(&self, x: f64, y: f64) -> Option<Complex> {
        if !(x >= self.left && x <= self.right_edge() && y >= self.top && y <= self.bottom_edge()) {
            return None;
        }

        let fx = (x - self.left) / self.width;
        let fy = (y - self.top) / self.height;

        let v = self.viewport;

        // Rounding at the edges must not push a click off the viewport.
        Some(Complex {
            real: (v.x_min() + fx * v.width()).clamp(v.x_min(), v.x_max()),
            imag: (v.y_max() - fy * v.height()).clamp(v.y_min(), v.y_max()),
        })
    }

    fn right_edge(&self) -> f64 {
        self.left + self.width
    }

    fn bottom_edge(&self) -> f64 {
        self.top + self.height
    }
}
