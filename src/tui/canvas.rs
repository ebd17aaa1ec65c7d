//! Rasterises an [`Illustration`] onto a ratatui canvas.
//!
//! World coordinates are the illustration's drawing units with y growing
//! downward; the canvas y axis points up, so every y is negated on the way
//! in.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Block, Borders,
    },
    Frame,
};

use super::Theme;
use crate::illustration::{Bounds, Form, Illustration, Primitive};

/// Empty margin around the illustration, in drawing units.
const MARGIN: f64 = 12.0;

/// Length of one dash and of the gap after it, in drawing units.
const DASH: f64 = 8.0;
const DASH_GAP: f64 = 6.0;

/// Canvas bounds that show `extent` undistorted in a `cols` x `rows` cell area.
///
/// Terminal cells are about twice as tall as wide, so one drawing unit must
/// cover the same physical distance on both axes. Returns `(x_bounds,
/// y_bounds)` in canvas coordinates (y up).
#[must_use]
pub fn fit_bounds(extent: Bounds, cols: u16, rows: u16) -> ([f64; 2], [f64; 2]) {
    let cols = f64::from(cols.max(1));
    let rows = f64::from(rows.max(1));
    let width = extent.width + 2.0 * MARGIN;
    let height = extent.height + 2.0 * MARGIN;

    // Drawing units per cell width
    let k = (width / cols).max(height / (2.0 * rows));
    let span_x = k * cols;
    let span_y = k * 2.0 * rows;

    let (cx, cy) = extent.center();
    (
        [cx - span_x / 2.0, cx + span_x / 2.0],
        [-cy - span_y / 2.0, -cy + span_y / 2.0],
    )
}

/// Pixels per cell for a marker, as (columns, rows).
const fn marker_resolution(marker: Marker) -> (f64, f64) {
    match marker {
        Marker::Braille => (2.0, 4.0),
        Marker::HalfBlock => (1.0, 2.0),
        _ => (1.0, 1.0),
    }
}

/// The flattened illustration as a canvas shape.
struct FurnitureShape<'a> {
    primitives: &'a [Primitive],
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    /// Sampling step for rotated and elliptical regions
    step: f64,
}

impl FurnitureShape<'_> {
    /// Fills an axis-aligned world rectangle, clipped to the canvas.
    fn fill_rect(&self, painter: &mut Painter, b: Bounds, color: ratatui::style::Color) {
        let left = b.x.max(self.x_bounds[0]);
        let right = b.right().min(self.x_bounds[1]);
        let top = (-b.y).min(self.y_bounds[1]);
        let bottom = (-b.bottom()).max(self.y_bounds[0]);
        if left > right || bottom > top {
            return;
        }

        let (Some((x0, y0)), Some((x1, y1))) =
            (painter.get_point(left, top), painter.get_point(right, bottom))
        else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                painter.paint(x, y, color);
            }
        }
    }

    /// Fills a rotated rectangle or an ellipse by point sampling.
    fn fill_sampled(&self, painter: &mut Painter, primitive: &Primitive) {
        let color = primitive.color.to_ratatui_color();
        let envelope = primitive.envelope();
        let (cx, cy) = primitive.bounds.center();
        let (half_w, half_h) = (primitive.bounds.width / 2.0, primitive.bounds.height / 2.0);
        let (sin, cos) = primitive.rotation.to_radians().sin_cos();

        let mut wy = envelope.y;
        while wy <= envelope.bottom() {
            let mut wx = envelope.x;
            while wx <= envelope.right() {
                // Undo the clockwise rotation to test against the local box
                let (dx, dy) = (wx - cx, wy - cy);
                let lx = dx.mul_add(cos, dy * sin);
                let ly = (-dx).mul_add(sin, dy * cos);
                let inside = match primitive.form {
                    Form::Rect => lx.abs() <= half_w && ly.abs() <= half_h,
                    Form::Ellipse => {
                        (lx / half_w).powi(2) + (ly / half_h).powi(2) <= 1.0
                    }
                };
                if inside {
                    if let Some((x, y)) = painter.get_point(wx, -wy) {
                        painter.paint(x, y, color);
                    }
                }
                wx += self.step;
            }
            wy += self.step;
        }
    }

    /// Paints a dashed stroke along the region's long axis.
    fn fill_dashed(&self, painter: &mut Painter, primitive: &Primitive) {
        let color = primitive.color.to_ratatui_color();
        let b = primitive.bounds;
        let vertical = b.height >= b.width;
        let length = if vertical { b.height } else { b.width };

        let mut offset = 0.0;
        while offset < length {
            let dash = DASH.min(length - offset);
            let segment = if vertical {
                Bounds::new(b.x, b.y + offset, b.width, dash)
            } else {
                Bounds::new(b.x + offset, b.y, dash, b.height)
            };
            self.fill_rect(painter, segment, color);
            offset += DASH + DASH_GAP;
        }
    }
}

impl Shape for FurnitureShape<'_> {
    fn draw(&self, painter: &mut Painter) {
        for primitive in self.primitives {
            if primitive.dashed {
                self.fill_dashed(painter, primitive);
            } else if primitive.form == Form::Rect && primitive.rotation.abs() < f64::EPSILON {
                self.fill_rect(painter, primitive.bounds, primitive.color.to_ratatui_color());
            } else {
                self.fill_sampled(painter, primitive);
            }
        }
    }
}

/// Renders the illustration inside a bordered block.
pub fn render_illustration(
    f: &mut Frame,
    area: Rect,
    illustration: &Illustration,
    marker: Marker,
    title: &str,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive));
    let inner = block.inner(area);

    let (x_bounds, y_bounds) = fit_bounds(illustration.extent(), inner.width, inner.height);
    let (res_x, res_y) = marker_resolution(marker);
    let pixel_w = (x_bounds[1] - x_bounds[0]) / (f64::from(inner.width.max(1)) * res_x);
    let pixel_h = (y_bounds[1] - y_bounds[0]) / (f64::from(inner.height.max(1)) * res_y);

    let primitives = illustration.layout();
    let shape = FurnitureShape {
        primitives: &primitives,
        x_bounds,
        y_bounds,
        step: pixel_w.min(pixel_h) / 2.0,
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(marker)
        .background_color(theme.surface)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| ctx.draw(&shape));
    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_bounds_contains_extent() {
        let extent = Bounds::new(0.0, -50.0, 300.0, 230.0);
        let (x, y) = fit_bounds(extent, 60, 20);
        assert!(x[0] <= extent.x && x[1] >= extent.right());
        // Canvas y is flipped
        assert!(y[1] >= -extent.y && y[0] <= -extent.bottom());
    }

    #[test]
    fn test_fit_bounds_keeps_cell_aspect() {
        let extent = Bounds::new(0.0, 0.0, 320.0, 140.0);
        let (x, y) = fit_bounds(extent, 80, 30);
        let span_x = x[1] - x[0];
        let span_y = y[1] - y[0];
        // One cell is half as wide as it is tall
        assert!((span_x / 80.0 - span_y / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_bounds_is_centred() {
        let extent = Bounds::new(10.0, 20.0, 100.0, 40.0);
        let (x, y) = fit_bounds(extent, 40, 40);
        assert!(((x[0] + x[1]) / 2.0 - 60.0).abs() < 1e-9);
        assert!(((y[0] + y[1]) / 2.0 + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sized_area_does_not_divide_by_zero() {
        let (x, y) = fit_bounds(Bounds::new(0.0, 0.0, 10.0, 10.0), 0, 0);
        assert!(x[1] > x[0] && y[1] > y[0]);
    }
}
