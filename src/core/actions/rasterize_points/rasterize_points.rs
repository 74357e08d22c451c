use crate::core::data::classified_point_set::ClassifiedPointSet;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::display_hint::DisplayHint;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::plot_area::PlotArea;

const AXIS_COLOUR: Colour = Colour { r: 96, g: 96, b: 96 };

/// Draws `points` as a scatter plot of `viewport` into a fresh pixel buffer.
pub fn rasterize_points(
    points: &ClassifiedPointSet,
    viewport: Viewport,
    pixel_rect: PixelRect,
    hint: &DisplayHint,
) -> PixelBuffer {
    let area = PlotArea::new(viewport, pixel_rect, hint.equal_aspect);
    let mut buffer = PixelBuffer::filled(pixel_rect, hint.background);

    if hint.show_axes {
        draw_axes(&mut buffer, &area, pixel_rect);
    }

    let offset = (hint.marker_size.max(1) as i32 - 1) / 2;

    for &point in points.iter() {
        if let Some(pixel) = area.to_pixel(point) {
            let corner = Point {
                x: pixel.x - offset,
                y: pixel.y - offset,
            };
            buffer.fill_square(corner, hint.marker_size, hint.marker_colour);
        }
    }

    buffer
}

fn draw_axes(buffer: &mut PixelBuffer, area: &PlotArea, pixel_rect: PixelRect) {
    let viewport = area.viewport();
    let origin_x = 0.0_f64.clamp(viewport.x_min(), viewport.x_max());
    let origin_y = 0.0_f64.clamp(viewport.y_min(), viewport.y_max());

    let Some(origin) = area.to_pixel(Complex::new(origin_x, origin_y)) else {
        return;
    };

    for x in pixel_rect.top_left().x..=pixel_rect.bottom_right().x {
        let _ = buffer.set_pixel(Point { x, y: origin.y }, AXIS_COLOUR);
    }

    for y in pixel_rect.top_left().y..=pixel_rect.bottom_right().y {
        let _ = buffer.set_pixel(Point { x: origin.x, y }, AXIS_COLOUR);
    }
}
