//! The four drawing routines, one per configuration.
//!
//! Sizes and offsets are fixed; only the fills come from the palette.

use super::{Element, Fill};
use crate::models::{PaletteDescriptor, RgbColor};

/// Opacity of the blanket and the translucent storage box.
const SOFT_OPACITY: f32 = 0.7;

/// Height of the accent edge along the top of a drawer front.
const DRAWER_EDGE: f64 = 2.0;

/// A drawer front with an accent edge along its top.
fn drawer(
    label: &'static str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    face: RgbColor,
    edge: RgbColor,
) -> Element {
    Element::rect(label, x, y, width, height, Fill::Solid(face)).with_children(vec![
        Element::rect("Drawer edge", 0.0, 0.0, width, DRAWER_EDGE, Fill::Solid(edge)),
    ])
}

/// Bed: frame with mattress and drawers, headboard shelf above.
pub(super) fn render_bed(p: &PaletteDescriptor) -> Element {
    Element::group("Bed", 300.0, 180.0).with_children(vec![
        Element::rect("Base frame", 0.0, 0.0, 300.0, 180.0, Fill::Solid(p.secondary))
            .with_children(vec![
                Element::rect("Mattress", 10.0, 10.0, 280.0, 160.0, Fill::Solid(p.light))
                    .with_children(vec![
                        Element::rect("Pillow", 10.0, 10.0, 60.0, 40.0, Fill::Solid(RgbColor::WHITE)),
                        Element::rect(
                            "Blanket",
                            0.0,
                            80.0,
                            280.0,
                            80.0,
                            Fill::Translucent(p.accent, SOFT_OPACITY),
                        ),
                    ]),
                drawer("Left drawer", 20.0, 150.0, 90.0, 20.0, p.primary, p.accent),
                drawer("Right drawer", 190.0, 150.0, 90.0, 20.0, p.primary, p.accent),
            ]),
        Element::rect("Headboard", 0.0, -50.0, 300.0, 50.0, Fill::Solid(p.primary)).with_children(
            vec![
                Element::rect("Left shelf", 20.0, 20.0, 80.0, 10.0, Fill::Solid(p.secondary)),
                Element::rect("Right shelf", 200.0, 20.0, 80.0, 10.0, Fill::Solid(p.secondary)),
            ],
        ),
    ])
}

/// Desk: surface over a body with drawers, chair space and shelving,
/// with a lamp and monitor on top.
pub(super) fn render_desk(p: &PaletteDescriptor) -> Element {
    let drawer_unit = Element::rect("Drawer unit", 10.0, 10.0, 80.0, 100.0, Fill::Solid(p.primary))
        .with_children(vec![
            drawer("Top desk drawer", 5.0, 10.0, 70.0, 20.0, p.light, p.accent),
            drawer("Middle desk drawer", 5.0, 40.0, 70.0, 20.0, p.light, p.accent),
            drawer("Bottom desk drawer", 5.0, 70.0, 70.0, 20.0, p.light, p.accent),
        ]);

    let chair_space = Element::rect("Chair space", 100.0, 40.0, 120.0, 80.0, Fill::None)
        .with_children(vec![
            Element::rect("Chair space left", 0.0, 0.0, 2.0, 80.0, Fill::Dashed(p.light)),
            Element::rect("Chair space right", 118.0, 0.0, 2.0, 80.0, Fill::Dashed(p.light)),
        ]);

    let side_storage = Element::rect("Side storage", 210.0, 10.0, 80.0, 100.0, Fill::Solid(p.primary))
        .with_children(vec![
            Element::rect("Upper shelf", 0.0, 30.0, 80.0, 2.0, Fill::Solid(p.accent)),
            Element::rect("Lower shelf", 0.0, 60.0, 80.0, 2.0, Fill::Solid(p.accent)),
        ]);

    Element::group("Desk", 320.0, 140.0).with_children(vec![
        Element::rect("Desk surface", 0.0, 0.0, 320.0, 20.0, Fill::Solid(p.primary)),
        Element::rect("Desk body", 10.0, 20.0, 300.0, 120.0, Fill::Solid(p.secondary))
            .with_children(vec![drawer_unit, chair_space, side_storage]),
        Element::rect("Desk lamp", 270.0, -50.0, 20.0, 50.0, Fill::Solid(p.accent)).with_children(
            vec![Element::rect("Lamp shade", -5.0, -15.0, 30.0, 15.0, Fill::Solid(p.light)).rotated(-30.0)],
        ),
        Element::rect("Monitor", 110.0, -90.0, 106.0, 76.0, Fill::Solid(p.secondary)).with_children(
            vec![
                Element::rect("Screen", 3.0, 3.0, 100.0, 70.0, Fill::Solid(RgbColor::BLACK)),
                Element::rect("Monitor stand", 48.0, 73.0, 10.0, 20.0, Fill::Solid(p.secondary)),
                Element::rect("Monitor foot", 38.0, 93.0, 30.0, 5.0, Fill::Solid(p.secondary)),
            ],
        ),
    ])
}

/// Storage: shelving on the left, three drawers on the right.
pub(super) fn render_storage(p: &PaletteDescriptor) -> Element {
    let storage_drawer = |label: &'static str, handle: &'static str, y: f64| {
        Element::rect(label, 165.0, y, 120.0, 60.0, Fill::Solid(p.secondary)).with_children(vec![
            Element::rect(handle, 40.0, 25.0, 40.0, 10.0, Fill::Solid(p.light)),
        ])
    };

    Element::group("Storage", 300.0, 220.0).with_children(vec![Element::rect(
        "Storage unit",
        0.0,
        0.0,
        300.0,
        220.0,
        Fill::Solid(p.primary),
    )
    .with_children(vec![
        Element::rect("Divider", 150.0, 0.0, 4.0, 220.0, Fill::Solid(p.secondary)),
        Element::rect("Upper shelf", 0.0, 73.0, 146.0, 2.0, Fill::Solid(p.secondary)),
        Element::rect("Lower shelf", 0.0, 146.0, 146.0, 2.0, Fill::Solid(p.secondary)),
        storage_drawer("Top drawer", "Top drawer handle", 20.0),
        storage_drawer("Middle drawer", "Middle drawer handle", 90.0),
        storage_drawer("Bottom drawer", "Bottom drawer handle", 160.0),
        Element::rect("Tall item", 20.0, 15.0, 30.0, 50.0, Fill::Solid(p.accent)),
        Element::rect("Low item", 60.0, 25.0, 40.0, 30.0, Fill::Solid(p.light)),
        Element::rect(
            "Basket",
            30.0,
            90.0,
            50.0,
            40.0,
            Fill::Translucent(p.accent, SOFT_OPACITY),
        ),
        Element::ellipse("Round box", 40.0, 170.0, 35.0, 35.0, Fill::Solid(p.light)),
    ])])
}

/// Lounge: sofa with cushions and legs, side table to the right.
pub(super) fn render_lounge(p: &PaletteDescriptor) -> Element {
    Element::group("Lounge", 300.0, 100.0).with_children(vec![
        Element::rect("Sofa base", 0.0, 0.0, 300.0, 100.0, Fill::Solid(p.secondary)).with_children(
            vec![
                Element::rect("Seat cushions", 10.0, 10.0, 280.0, 30.0, Fill::Solid(p.light)),
                Element::rect("Back cushions", 10.0, 50.0, 280.0, 50.0, Fill::Solid(p.accent))
                    .with_children(vec![Element::rect(
                        "Cushion divider",
                        140.0,
                        0.0,
                        2.0,
                        50.0,
                        Fill::Solid(p.secondary),
                    )]),
            ],
        ),
        Element::rect("Left leg", 30.0, 100.0, 20.0, 20.0, Fill::Solid(p.primary)),
        Element::rect("Right leg", 250.0, 100.0, 20.0, 20.0, Fill::Solid(p.primary)),
        Element::rect("Side table", 310.0, 50.0, 80.0, 60.0, Fill::Solid(p.primary)).with_children(
            vec![
                Element::rect("Coffee mug", 30.0, 10.0, 20.0, 15.0, Fill::Solid(p.light)),
                Element::rect("Book", 25.0, 35.0, 30.0, 5.0, Fill::Solid(p.accent)),
            ],
        ),
        Element::rect("Decorative pillow", 20.0, -20.0, 30.0, 30.0, Fill::Solid(p.light))
            .rotated(15.0),
    ])
}
