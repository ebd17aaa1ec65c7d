//! Schematic furniture illustration.
//!
//! [`render`] is a pure function of (configuration, palette, space efficiency).
//! It builds a tree of [`Element`]s whose positions are relative to their
//! parent, in the pixel units of the original drawing with y growing
//! downward. [`Illustration::layout`] flattens the tree into absolute,
//! scaled [`Primitive`]s ready to be rasterised by the terminal canvas.
//!
//! # Example
//!
//! ```
//! use moduliving::illustration;
//! use moduliving::models::{ColorSchemeKey, ConfigurationKey};
//!
//! let palette = ColorSchemeKey::Natural.palette();
//! let picture = illustration::render(ConfigurationKey::Bed, &palette, 100);
//! assert!((picture.scale() - 1.0).abs() < f64::EPSILON);
//! assert!(picture.layout().iter().any(|p| p.label == "Mattress"));
//! ```

mod shapes;

use crate::models::{ConfigurationKey, PaletteDescriptor, RgbColor};

/// Maps a space-efficiency percentage (0-100) to a scale factor (0.5-1.0).
#[must_use]
pub fn scale_factor(space_efficiency: u8) -> f64 {
    0.5 + f64::from(space_efficiency) / 200.0
}

/// Renders the illustration for a configuration.
///
/// Exactly one drawing routine runs per call.
#[must_use]
pub fn render(
    configuration: ConfigurationKey,
    palette: &PaletteDescriptor,
    space_efficiency: u8,
) -> Illustration {
    let root = match configuration {
        ConfigurationKey::Bed => shapes::render_bed(palette),
        ConfigurationKey::Desk => shapes::render_desk(palette),
        ConfigurationKey::Storage => shapes::render_storage(palette),
        ConfigurationKey::Lounge => shapes::render_lounge(palette),
    };

    Illustration {
        configuration,
        scale: scale_factor(space_efficiency),
        root,
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Bounds {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Scales the rectangle about the point `(cx, cy)`.
    #[must_use]
    pub fn scaled_about(&self, cx: f64, cy: f64, factor: f64) -> Self {
        Self::new(
            (self.x - cx).mul_add(factor, cx),
            (self.y - cy).mul_add(factor, cy),
            self.width * factor,
            self.height * factor,
        )
    }
}

/// Outline of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Rectangle filling its bounds
    Rect,
    /// Ellipse inscribed in its bounds
    Ellipse,
}

/// How a region is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Not painted; only groups children
    None,
    /// Opaque color
    Solid(RgbColor),
    /// Color composited over the nearest painted ancestor
    Translucent(RgbColor, f32),
    /// Dashed stroke along the region's long axis
    Dashed(RgbColor),
}

/// A node of the illustration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Human-readable name ("Mattress", "Desk lamp", ...)
    pub label: &'static str,
    /// Position relative to the parent's top-left corner
    pub bounds: Bounds,
    /// Outline
    pub form: Form,
    /// Paint
    pub fill: Fill,
    /// Clockwise rotation about the centre, in degrees
    pub rotation: f64,
    /// Nested regions, painted after this one
    pub children: Vec<Element>,
}

impl Element {
    /// A rectangular region.
    #[must_use]
    pub fn rect(
        label: &'static str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Fill,
    ) -> Self {
        Self {
            label,
            bounds: Bounds::new(x, y, width, height),
            form: Form::Rect,
            fill,
            rotation: 0.0,
            children: Vec::new(),
        }
    }

    /// An elliptical region.
    #[must_use]
    pub fn ellipse(
        label: &'static str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Fill,
    ) -> Self {
        Self {
            form: Form::Ellipse,
            ..Self::rect(label, x, y, width, height, fill)
        }
    }

    /// An unpainted container at the origin.
    #[must_use]
    pub fn group(label: &'static str, width: f64, height: f64) -> Self {
        Self::rect(label, 0.0, 0.0, width, height, Fill::None)
    }

    /// Rotates the region by `degrees` clockwise.
    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Replaces the region's children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }
}

/// A painted region in absolute, scaled coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    /// Label of the element this came from
    pub label: &'static str,
    /// Absolute position and size after scaling
    pub bounds: Bounds,
    /// Outline
    pub form: Form,
    /// Resolved color (translucency already composited)
    pub color: RgbColor,
    /// Drawn as a dashed stroke instead of a solid fill
    pub dashed: bool,
    /// Clockwise rotation about the centre, in degrees
    pub rotation: f64,
    /// Nesting depth (0 = child of the root)
    pub depth: usize,
}

impl Primitive {
    /// Axis-aligned box enclosing the region, rotation included.
    #[must_use]
    pub fn envelope(&self) -> Bounds {
        if self.rotation.abs() < f64::EPSILON {
            return self.bounds;
        }
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let (cx, cy) = self.bounds.center();
        let half_w = self.bounds.width.mul_add(cos.abs(), self.bounds.height * sin.abs()) / 2.0;
        let half_h = self.bounds.width.mul_add(sin.abs(), self.bounds.height * cos.abs()) / 2.0;
        Bounds::new(cx - half_w, cy - half_h, half_w * 2.0, half_h * 2.0)
    }
}

/// The rendered illustration for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Illustration {
    configuration: ConfigurationKey,
    scale: f64,
    root: Element,
}

impl Illustration {
    /// Configuration this illustration depicts.
    pub const fn configuration(&self) -> ConfigurationKey {
        self.configuration
    }

    /// Uniform scale factor applied by [`Self::layout`].
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Root of the element tree (unscaled, parent-relative).
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Flattens the tree into painted primitives, parents before children.
    ///
    /// Everything is scaled about the centre of the root box.
    pub fn layout(&self) -> Vec<Primitive> {
        self.layout_at(self.scale)
    }

    /// Bounding box of the illustration at full scale.
    ///
    /// Independent of the space efficiency, so a frame sized to it makes
    /// the compact/expanded difference visible.
    pub fn extent(&self) -> Bounds {
        self.layout_at(1.0)
            .iter()
            .map(Primitive::envelope)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or(self.root.bounds)
    }

    fn layout_at(&self, scale: f64) -> Vec<Primitive> {
        let (cx, cy) = self.root.bounds.center();
        let mut out = Vec::new();
        for child in &self.root.children {
            flatten(
                child,
                (self.root.bounds.x, self.root.bounds.y),
                None,
                0,
                &mut |mut primitive| {
                    primitive.bounds = primitive.bounds.scaled_about(cx, cy, scale);
                    out.push(primitive);
                },
            );
        }
        out
    }
}

/// Walks `element` depth-first, emitting one primitive per painted region.
fn flatten(
    element: &Element,
    origin: (f64, f64),
    under: Option<RgbColor>,
    depth: usize,
    emit: &mut impl FnMut(Primitive),
) {
    let bounds = Bounds::new(
        origin.0 + element.bounds.x,
        origin.1 + element.bounds.y,
        element.bounds.width,
        element.bounds.height,
    );

    let painted = match element.fill {
        Fill::None => None,
        Fill::Solid(color) => Some((color, false)),
        // Translucent regions with no painted ancestor keep their own color
        Fill::Translucent(color, alpha) => {
            Some((under.map_or(color, |u| color.blend(u, alpha)), false))
        }
        Fill::Dashed(color) => Some((color, true)),
    };

    if let Some((color, dashed)) = painted {
        emit(Primitive {
            label: element.label,
            bounds,
            form: element.form,
            color,
            dashed,
            rotation: element.rotation,
            depth,
        });
    }

    let under = match painted {
        Some((color, false)) => Some(color),
        _ => under,
    };
    for child in &element.children {
        flatten(child, (bounds.x, bounds.y), under, depth + 1, emit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorSchemeKey;

    fn find<'a>(primitives: &'a [Primitive], label: &str) -> &'a Primitive {
        primitives
            .iter()
            .find(|p| p.label == label)
            .unwrap_or_else(|| panic!("no primitive labelled {label}"))
    }

    #[test]
    fn test_scale_factor_range_and_monotonic() {
        let mut previous = None;
        for v in (0..=100).step_by(10) {
            let s = scale_factor(v);
            assert!((0.5..=1.0).contains(&s), "scale {s} for {v}");
            if let Some(p) = previous {
                assert!(s > p, "scale not increasing at {v}");
            }
            previous = Some(s);
        }
        assert!((scale_factor(0) - 0.5).abs() < f64::EPSILON);
        assert!((scale_factor(100) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_each_configuration_has_its_own_routine() {
        let palette = ColorSchemeKey::Natural.palette();
        let roots: Vec<_> = ConfigurationKey::ALL
            .iter()
            .map(|&key| {
                let picture = render(key, &palette, 70);
                assert_eq!(picture.configuration(), key);
                picture.root().label
            })
            .collect();
        assert_eq!(roots, ["Bed", "Desk", "Storage", "Lounge"]);
    }

    #[test]
    fn test_fills_come_from_palette() {
        for scheme in ColorSchemeKey::ALL {
            let palette = scheme.palette();
            for key in ConfigurationKey::ALL {
                let picture = render(key, &palette, 70);
                let mut allowed = palette.colors().to_vec();
                allowed.extend([RgbColor::WHITE, RgbColor::BLACK]);
                // Translucent regions blend the accent over a palette color
                for under in palette.colors() {
                    allowed.push(palette.accent.blend(under, 0.7));
                }
                for primitive in picture.layout() {
                    assert!(
                        allowed.contains(&primitive.color),
                        "{key}/{scheme}: {} has foreign color {}",
                        primitive.label,
                        primitive.color
                    );
                }
            }
        }
    }

    #[test]
    fn test_palette_changes_colors_only() {
        let natural = ColorSchemeKey::Natural.palette();
        let vibrant = ColorSchemeKey::Vibrant.palette();
        for key in ConfigurationKey::ALL {
            let a = render(key, &natural, 50).layout();
            let b = render(key, &vibrant, 50).layout();
            assert_eq!(a.len(), b.len());
            for (pa, pb) in a.iter().zip(&b) {
                assert_eq!(pa.label, pb.label);
                assert_eq!(pa.bounds, pb.bounds);
            }
        }
    }

    #[test]
    fn test_blanket_blends_over_mattress() {
        let palette = ColorSchemeKey::Natural.palette();
        let layout = render(ConfigurationKey::Bed, &palette, 100).layout();
        let blanket = find(&layout, "Blanket");
        assert_eq!(blanket.color, palette.accent.blend(palette.light, 0.7));
        // Mattress at (10, 10), blanket at (0, 80) inside it
        assert_eq!(blanket.bounds, Bounds::new(10.0, 90.0, 280.0, 80.0));
        assert_eq!(blanket.depth, 2);
    }

    #[test]
    fn test_full_scale_uses_drawing_units() {
        let palette = ColorSchemeKey::Modern.palette();
        let layout = render(ConfigurationKey::Storage, &palette, 100).layout();
        let handle = find(&layout, "Bottom drawer handle");
        // Drawer at (165, 160), handle at (40, 25) inside it
        assert_eq!(handle.bounds, Bounds::new(205.0, 185.0, 40.0, 10.0));
        assert_eq!(find(&layout, "Round box").form, Form::Ellipse);
    }

    #[test]
    fn test_scaling_preserves_proportions() {
        let palette = ColorSchemeKey::Natural.palette();
        for key in ConfigurationKey::ALL {
            let full = render(key, &palette, 100);
            let compact = render(key, &palette, 0);
            let (cx, cy) = full.root().bounds.center();
            for (big, small) in full.layout().iter().zip(&compact.layout()) {
                assert!((small.bounds.width - big.bounds.width * 0.5).abs() < 1e-9);
                assert!((small.bounds.height - big.bounds.height * 0.5).abs() < 1e-9);
                // Offsets from the centre halve as well
                assert!(((small.bounds.x - cx) - (big.bounds.x - cx) * 0.5).abs() < 1e-9);
                assert!(((small.bounds.y - cy) - (big.bounds.y - cy) * 0.5).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_extent_ignores_scale() {
        let palette = ColorSchemeKey::Vibrant.palette();
        for key in ConfigurationKey::ALL {
            assert_eq!(
                render(key, &palette, 0).extent(),
                render(key, &palette, 100).extent()
            );
        }
    }

    #[test]
    fn test_extent_covers_overhanging_parts() {
        let palette = ColorSchemeKey::Natural.palette();
        // Headboard sits above the frame
        let bed = render(ConfigurationKey::Bed, &palette, 70).extent();
        assert!((bed.y - -50.0).abs() < 1e-9);
        assert!((bed.bottom() - 180.0).abs() < 1e-9);
        // Side table sticks out to the right of the sofa
        let lounge = render(ConfigurationKey::Lounge, &palette, 70).extent();
        assert!((lounge.right() - 390.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_envelope_is_larger() {
        let palette = ColorSchemeKey::Natural.palette();
        let layout = render(ConfigurationKey::Lounge, &palette, 100).layout();
        let pillow = find(&layout, "Decorative pillow");
        assert!((pillow.rotation - 15.0).abs() < f64::EPSILON);
        let envelope = pillow.envelope();
        assert!(envelope.width > pillow.bounds.width);
        let (ex, ey) = envelope.center();
        let (px, py) = pillow.bounds.center();
        assert!((ex - px).abs() < 1e-9 && (ey - py).abs() < 1e-9);
    }

    #[test]
    fn test_dashed_chair_space() {
        let palette = ColorSchemeKey::Natural.palette();
        let layout = render(ConfigurationKey::Desk, &palette, 100).layout();
        let dashed: Vec<_> = layout.iter().filter(|p| p.dashed).collect();
        assert_eq!(dashed.len(), 2);
        assert!(dashed.iter().all(|p| p.color == palette.light));
        // The chair space itself is not painted
        assert!(layout.iter().all(|p| p.label != "Chair space"));
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(-5.0, 5.0, 10.0, 20.0);
        assert_eq!(a.union(&b), Bounds::new(-5.0, 0.0, 15.0, 25.0));
    }
}
