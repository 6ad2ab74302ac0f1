//! Turns physics and layout into paint commands and text readouts.

use ecolor::Color32;
use emath::{pos2, Pos2, Rect};

use crate::constants::FORCE_REFERENCE;
use crate::format::{format_quantity, whole};
use crate::layout::{Layout, Surface, TextMeasure, FORCE_FONT, LABEL_FONT};
use crate::{compute, PlateParams, PlateResult};

const FLUID_SURFACE: Color32 = Color32::from_rgb(0xbf, 0xe8, 0xff);
const FLUID_DEEP: Color32 = Color32::from_rgb(0x1e, 0x90, 0xff);
const GRID: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 15);
const BAR: Color32 = Color32::from_rgba_premultiplied(46, 46, 46, 46);
const LABEL: Color32 = Color32::from_rgb(0x00, 0x33, 0x22);
const WALL_FILL: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
const WALL_EDGE: Color32 = Color32::from_rgb(0xcf, 0xcf, 0xcf);
const FORCE: Color32 = Color32::from_rgb(0xff, 0x45, 0x00);
const FORCE_LABEL: Color32 = Color32::from_rgb(0x03, 0x1d, 0x3a);

/// How the force arrow's on-screen length is normalized. Only the picture
/// depends on this; the readouts always show the real force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceScale {
    /// Full length at a fixed reference force.
    FixedReference { newtons: f64 },
    /// Relative to ρ·g·h·A, the force if the whole plate sat at base depth.
    GeometryMaximum,
}

impl Default for ForceScale {
    fn default() -> Self {
        ForceScale::FixedReference {
            newtons: FORCE_REFERENCE,
        }
    }
}

impl ForceScale {
    /// Fraction of the maximum arrow length, in `0..=1`.
    pub fn fraction(&self, params: &PlateParams, result: &PlateResult) -> f64 {
        let reference = match *self {
            ForceScale::FixedReference { newtons } if newtons > 0.0 => newtons,
            ForceScale::FixedReference { .. } => FORCE_REFERENCE,
            ForceScale::GeometryMaximum => {
                (params.rho * params.g * params.height * params.area).max(1.0)
            }
        };
        (result.force / reference).clamp(0.0, 1.0)
    }
}

/// A single paint command, in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle filled with a top-to-bottom color ramp.
    VerticalGradient {
        rect: Rect,
        top: Color32,
        bottom: Color32,
    },
    FilledRect {
        rect: Rect,
        fill: Color32,
    },
    RectOutline {
        rect: Rect,
        width: f32,
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Triangle {
        points: [Pos2; 3],
        fill: Color32,
    },
    /// Left-aligned, vertically centered text.
    Text {
        pos: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Ordered paint commands for one frame; later shapes draw over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    fn text(&mut self, pos: Pos2, text: impl Into<String>, font_size: f32, color: Color32) {
        self.push(Shape::Text {
            pos,
            text: text.into(),
            font_size,
            color,
        });
    }
}

/// Text handed to the display panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub base_pressure: String,
    pub force: String,
    pub center_of_pressure: String,
    pub summary: String,
    pub interpretation: String,
}

impl Readouts {
    pub fn new(params: &PlateParams, result: &PlateResult) -> Self {
        let pbase = whole(result.base_pressure);
        let force = whole(result.force);
        Self {
            base_pressure: format_quantity(pbase as f64, "Pa"),
            force: format_quantity(force as f64, "N"),
            center_of_pressure: format_quantity(result.center_of_pressure, "m"),
            summary: format!(
                "ρ={} kg/m³ · g={} m/s² · h={} m · A={} m²",
                params.rho, params.g, params.height, params.area
            ),
            interpretation: format!(
                "The pressure at the base is {pbase} Pa. The total resultant force on the \
                 surface is {force} N, applied at the center of pressure (y_p) at {} m.",
                format_quantity(result.center_of_pressure, "")
            ),
        }
    }
}

/// Everything one trigger produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub result: PlateResult,
    pub layout: Layout,
    pub readouts: Readouts,
    pub scene: Scene,
}

/// Compute, lay out and paint one frame from scratch.
pub fn render(
    params: &PlateParams,
    surface: &Surface,
    force_scale: ForceScale,
    measure: &impl TextMeasure,
) -> Frame {
    let result = compute(params);
    let layout = Layout::compute(surface, params, &result, measure);
    let readouts = Readouts::new(params, &result);
    let scene = paint(&layout, params, &result, force_scale);
    tracing::trace!(shapes = scene.shapes.len(), "painted frame");
    Frame {
        result,
        layout,
        readouts,
        scene,
    }
}

fn paint(
    layout: &Layout,
    params: &PlateParams,
    result: &PlateResult,
    force_scale: ForceScale,
) -> Scene {
    let s = layout.surface.scale;
    let fluid = layout.fluid;
    let mut scene = Scene::default();

    scene.push(Shape::VerticalGradient {
        rect: fluid,
        top: FLUID_SURFACE,
        bottom: FLUID_DEEP,
    });

    for &y in &layout.grid_lines {
        scene.push(Shape::FilledRect {
            rect: Rect::from_min_max(pos2(fluid.left(), y), pos2(fluid.right(), y + 1.0)),
            fill: GRID,
        });
    }

    let label_font = LABEL_FONT * s;
    for row in &layout.rows {
        scene.push(Shape::FilledRect {
            rect: row.bar,
            fill: BAR,
        });
        if let Some(labels) = &row.labels {
            scene.text(labels.depth_pos, &labels.depth_text, label_font, LABEL);
            scene.text(labels.pressure_pos, &labels.pressure_text, label_font, LABEL);
        }
    }

    scene.push(Shape::FilledRect {
        rect: layout.wall,
        fill: WALL_FILL,
    });
    scene.push(Shape::RectOutline {
        rect: layout.wall,
        width: s,
        color: WALL_EDGE,
    });

    let origin = layout.arrow_origin;
    let length = force_scale.fraction(params, result) as f32 * layout.arrow_max;
    let tip = pos2(origin.x + length, origin.y);
    let head_base = tip.x - 14.0 * s;
    scene.push(Shape::Line {
        from: origin,
        to: tip,
        width: 3.0 * s,
        color: FORCE,
    });
    scene.push(Shape::Triangle {
        points: [
            tip,
            pos2(head_base, tip.y - 6.0 * s),
            pos2(head_base, tip.y + 6.0 * s),
        ],
        fill: FORCE,
    });
    scene.text(
        pos2(tip.x + 6.0 * s, tip.y - 10.0 * s),
        format!("F = {} N", whole(result.force)),
        FORCE_FONT * s,
        FORCE_LABEL,
    );

    for title in &layout.titles {
        scene.text(title.pos, &title.text, title.font_size, LABEL);
    }

    scene
}
