//! Pixel geometry for the plate diagram.
//!
//! Everything here is recomputed from scratch for each frame: the surface
//! size, the scale factor, the sample count and the measured widths of the
//! label strings fully determine where things go.

use emath::{pos2, vec2, Pos2, Rect};

use crate::constants::{MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH};
use crate::format::whole;
use crate::physics::PhysicsModel;
use crate::{PlateParams, PlateResult};

/// Measures rendered text, so labels can be placed by their real width.
pub trait TextMeasure {
    /// Width in pixels of `text` set at `font_size` pixels.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// The drawing surface a frame is laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    /// Pixel-density scale applied to paddings, strokes and font sizes.
    pub scale: f32,
}

impl Surface {
    /// A surface of at least 600×300 px. Non-positive or non-finite scales
    /// become 1.
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            width: width.max(MIN_SURFACE_WIDTH),
            height: height.max(MIN_SURFACE_HEIGHT),
            scale,
        }
    }
}

// Base sizes at scale 1, in pixels.
const PADDING: f32 = 32.0;
const BAR_GAP: f32 = 10.0;
const MIN_BAR: f32 = 4.0;
const BAR_THICKNESS: f32 = 8.0;
const COLUMN_GAP: f32 = 6.0;
const PRESSURE_GAP: f32 = 12.0;
const WALL_MARGIN: f32 = 20.0;
const ARROW_GAP: f32 = 8.0;
const ARROW_MAX: f32 = 220.0;
const TITLE_RISE: f32 = 12.0;
const TITLE_SPACING: f32 = 24.0;
const TITLE_MIN_OFFSET: f32 = 120.0;

pub const LABEL_FONT: f32 = 12.0;
pub const FORCE_FONT: f32 = 13.0;
pub const TITLE_FONT: f32 = 14.0;

/// Depth and pressure text for an annotated sample row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabels {
    pub depth_text: String,
    pub depth_pos: Pos2,
    pub pressure_text: String,
    pub pressure_pos: Pos2,
    /// Right edge of the pressure text as measured.
    pub pressure_right: f32,
}

/// One pressure sample along the plate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub depth: f64,
    pub pressure: f64,
    /// Screen row of the sample.
    pub y: f32,
    pub bar: Rect,
    pub labels: Option<RowLabels>,
}

/// A left-anchored line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnchor {
    pub text: String,
    pub pos: Pos2,
    pub font_size: f32,
}

/// Geometry of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub surface: Surface,
    pub fluid: Rect,
    /// y coordinates of the faint grid lines across the fluid.
    pub grid_lines: Vec<f32>,
    pub bar_left: f32,
    pub max_bar: f32,
    pub min_bar: f32,
    pub rows: Vec<SampleRow>,
    /// Every n-th row carries labels.
    pub label_stride: u32,
    pub depth_column: f32,
    pub pressure_column: f32,
    /// Right edge of the widest label; the wall starts past this.
    pub label_right: f32,
    pub wall: Rect,
    /// Where the force arrow leaves the wall face, on the yp row.
    pub arrow_origin: Pos2,
    pub arrow_max: f32,
    pub titles: [TextAnchor; 2],
}

impl Layout {
    pub fn compute(
        surface: &Surface,
        params: &PlateParams,
        result: &PlateResult,
        measure: &impl TextMeasure,
    ) -> Self {
        let s = surface.scale;
        let steps = params.steps.max(1);
        let model = PhysicsModel::new(params);

        let pad = PADDING * s;
        let fluid = Rect::from_min_size(
            pos2(pad, pad),
            vec2(
                (surface.width * 0.45).round(),
                (surface.height - pad * 2.0).round(),
            ),
        );

        let grid_count = steps.clamp(10, 80);
        let grid_lines = (0..grid_count)
            .map(|i| fluid.top() + i as f32 / grid_count as f32 * fluid.height())
            .collect();

        // Sample depths and label text first; columns are sized from it.
        let label_stride = steps.div_ceil(6);
        let label_font = LABEL_FONT * s;
        // Depths are never negative; a negative height keeps every row at
        // the surface.
        let height = if params.height > 0.0 { params.height } else { 0.0 };
        let samples: Vec<(f64, f64, f32, Option<(String, String)>)> = (0..=steps)
            .map(|i| {
                let frac = i as f64 / steps as f64;
                let depth = frac * height;
                let pressure = model.pressure_at(depth);
                let y = fluid.top() + frac as f32 * fluid.height();
                let text = (i % label_stride == 0)
                    .then(|| (format!("{depth:.2} m"), pressure_label(pressure)));
                (depth, pressure, y, text)
            })
            .collect();

        let depth_width = samples
            .iter()
            .filter_map(|(_, _, _, t)| t.as_ref())
            .map(|(d, _)| measure.text_width(d, label_font))
            .fold(0.0, f32::max);
        let pressure_width = samples
            .iter()
            .filter_map(|(_, _, _, t)| t.as_ref())
            .map(|(_, p)| measure.text_width(p, label_font))
            .fold(
                measure.text_width(&pressure_label(result.base_pressure), label_font),
                f32::max,
            );

        // Bars get whatever is left once labels, margin and wall are placed,
        // up to 28% of the width.
        let bar_left = fluid.right() + BAR_GAP * s;
        let min_bar = MIN_BAR * s;
        let wall_width = (surface.width * 0.12).round();
        let fixed = COLUMN_GAP * s
            + depth_width
            + PRESSURE_GAP * s
            + pressure_width
            + WALL_MARGIN * s
            + wall_width;
        let room = surface.width - pad - bar_left - fixed;
        let max_bar = (surface.width * 0.28).round().min(room).max(min_bar);

        let depth_column = bar_left + max_bar + COLUMN_GAP * s;
        let pressure_column = depth_column + depth_width + PRESSURE_GAP * s;
        let label_right = pressure_column + pressure_width;

        let denom = match model.rho * model.g * model.height {
            d if d == 0.0 => 1.0,
            d => d,
        };
        let bar_thickness = BAR_THICKNESS * s;
        let rows = samples
            .into_iter()
            .map(|(depth, pressure, y, text)| {
                let rel = (pressure - result.surface_pressure) / denom;
                let len = ((rel as f32) * max_bar).max(min_bar).min(max_bar);
                let bar = Rect::from_min_size(
                    pos2(bar_left, y - bar_thickness / 2.0),
                    vec2(len, bar_thickness),
                );
                let labels = text.map(|(depth_text, pressure_text)| RowLabels {
                    depth_pos: pos2(depth_column, y),
                    pressure_pos: pos2(pressure_column, y),
                    pressure_right: pressure_column
                        + measure.text_width(&pressure_text, label_font),
                    depth_text,
                    pressure_text,
                });
                SampleRow {
                    depth,
                    pressure,
                    y,
                    bar,
                    labels,
                }
            })
            .collect();

        let wall = Rect::from_min_size(
            pos2(label_right + WALL_MARGIN * s, fluid.top()),
            vec2(wall_width, fluid.height()),
        );

        let height_or_one = if params.height == 0.0 {
            1.0
        } else {
            params.height
        };
        let arrow_y =
            fluid.top() + (result.center_of_pressure / height_or_one) as f32 * fluid.height();
        let arrow_origin = pos2(wall.right() + ARROW_GAP * s, arrow_y);

        let title_font = TITLE_FONT * s;
        let title_y = fluid.top() - TITLE_RISE * s;
        let height_title = format!("h = {} m", params.height);
        let rho_x = fluid.left()
            + (measure.text_width(&height_title, title_font) + TITLE_SPACING * s)
                .max(TITLE_MIN_OFFSET * s);
        let titles = [
            TextAnchor {
                text: height_title,
                pos: pos2(fluid.left(), title_y),
                font_size: title_font,
            },
            TextAnchor {
                text: format!("ρ = {} kg/m³", params.rho),
                pos: pos2(rho_x, title_y),
                font_size: title_font,
            },
        ];

        Self {
            surface: *surface,
            fluid,
            grid_lines,
            bar_left,
            max_bar,
            min_bar,
            rows,
            label_stride,
            depth_column,
            pressure_column,
            label_right,
            wall,
            arrow_origin,
            arrow_max: ARROW_MAX * s,
            titles,
        }
    }
}

/// Pressure label as drawn next to the bars (`120945 Pa`).
pub fn pressure_label(pressure: f64) -> String {
    format!("{} Pa", whole(pressure))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::compute;

    /// Fixed-advance text measure for layout tests.
    pub(crate) struct Monospace;

    impl TextMeasure for Monospace {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size * 0.6
        }
    }

    fn layout(width: f32, height: f32, params: &PlateParams) -> Layout {
        Layout::compute(
            &Surface::new(width, height, 1.0),
            params,
            &compute(params),
            &Monospace,
        )
    }

    fn water() -> PlateParams {
        PlateParams {
            rho: 1000.0,
            g: 9.81,
            height: 2.0,
            area: 1.0,
            steps: 30,
        }
    }

    #[test]
    fn test_surface_has_minimum_size() {
        let s = Surface::new(100.0, 50.0, 0.0);
        assert_eq!((s.width, s.height, s.scale), (600.0, 300.0, 1.0));
        let s = Surface::new(1280.0, 720.0, 2.0);
        assert_eq!((s.width, s.height, s.scale), (1280.0, 720.0, 2.0));
    }

    #[test]
    fn test_fluid_column_geometry() {
        let l = layout(1000.0, 600.0, &water());
        assert_eq!(l.fluid.min, pos2(32.0, 32.0));
        assert_eq!(l.fluid.width(), 450.0);
        assert_eq!(l.fluid.height(), 536.0);
    }

    #[test]
    fn test_rows_span_the_fluid_evenly() {
        let l = layout(1000.0, 600.0, &water());
        assert_eq!(l.rows.len(), 31);
        assert_eq!(l.rows[0].y, l.fluid.top());
        assert!((l.rows[30].y - l.fluid.bottom()).abs() < 1e-3);
        assert_eq!(l.rows[0].depth, 0.0);
        assert_eq!(l.rows[30].depth, 2.0);
        let spacing = l.rows[1].y - l.rows[0].y;
        for pair in l.rows.windows(2) {
            assert!(((pair[1].y - pair[0].y) - spacing).abs() < 1e-3);
        }
    }

    #[test]
    fn test_grid_line_count_is_clamped() {
        for (steps, expected) in [(1, 10), (5, 10), (30, 30), (80, 80), (100, 80)] {
            let l = layout(1000.0, 600.0, &PlateParams { steps, ..water() });
            assert_eq!(l.grid_lines.len(), expected, "steps = {steps}");
        }
    }

    #[test]
    fn test_label_stride() {
        let l = layout(1000.0, 600.0, &water());
        assert_eq!(l.label_stride, 5);
        let labelled: Vec<usize> = l
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.labels.is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(labelled, vec![0, 5, 10, 15, 20, 25, 30]);

        let l = layout(1000.0, 600.0, &PlateParams { steps: 7, ..water() });
        assert_eq!(l.label_stride, 2);
        let l = layout(1000.0, 600.0, &PlateParams { steps: 1, ..water() });
        assert!(l.rows.iter().all(|r| r.labels.is_some()));
    }

    #[test]
    fn test_label_text() {
        let l = layout(1000.0, 600.0, &water());
        let last = l.rows[30].labels.as_ref().unwrap();
        assert_eq!(last.depth_text, "2.00 m");
        assert_eq!(last.pressure_text, "120945 Pa");
        let first = l.rows[0].labels.as_ref().unwrap();
        assert_eq!(first.pressure_text, "101325 Pa");
    }

    #[test]
    fn test_bars_grow_with_depth_within_track() {
        let l = layout(1200.0, 700.0, &water());
        assert_eq!(l.rows[0].bar.width(), l.min_bar);
        assert_eq!(l.rows[30].bar.width(), l.max_bar);
        for pair in l.rows.windows(2) {
            assert!(pair[1].bar.width() >= pair[0].bar.width());
        }
        for row in &l.rows {
            assert!(row.bar.left() > l.fluid.right());
            assert!(row.bar.right() < l.depth_column);
            assert_eq!(row.bar.height(), 8.0);
        }
    }

    #[test]
    fn test_no_fluid_draws_minimum_bars() {
        let l = layout(1000.0, 600.0, &PlateParams { rho: 0.0, ..water() });
        assert!(l.rows.iter().all(|r| r.bar.width() == l.min_bar));
        let l = layout(1000.0, 600.0, &PlateParams { height: 0.0, ..water() });
        assert!(l.rows.iter().all(|r| r.bar.width() == l.min_bar));
    }

    #[test]
    fn test_negative_height_samples_the_surface_only() {
        let l = layout(1000.0, 600.0, &PlateParams { height: -2.0, ..water() });
        let surface = pressure_label(crate::constants::ATMOSPHERIC_PRESSURE);
        let labels: Vec<_> = l.rows.iter().filter_map(|r| r.labels.as_ref()).collect();
        assert!(!labels.is_empty());
        for label in labels {
            assert_eq!(label.depth_text, "0.00 m");
            assert_eq!(label.pressure_text, surface);
        }
        assert!(l.rows.iter().all(|r| r.bar.width() == l.min_bar));
    }

    #[test]
    fn test_wall_clears_longest_pressure_label() {
        // Deep mercury column: nine-digit pressure labels.
        let params = PlateParams {
            rho: 13_600.0,
            g: 9.81,
            height: 1000.0,
            area: 50.0,
            steps: 1,
        };
        for width in [600.0, 640.0, 800.0, 1024.0, 1280.0, 1920.0, 3840.0] {
            for steps in 1..=100 {
                let params = PlateParams { steps, ..params };
                let l = layout(width, 480.0, &params);
                let widest = l
                    .rows
                    .iter()
                    .filter_map(|r| r.labels.as_ref())
                    .map(|lab| lab.pressure_right)
                    .fold(f32::MIN, f32::max);
                assert!(
                    l.wall.left() > widest,
                    "wall at {} overlaps label edge {widest} (W={width}, steps={steps})",
                    l.wall.left()
                );
                assert!(l.wall.left() > l.label_right);
                for lab in l.rows.iter().filter_map(|r| r.labels.as_ref()) {
                    assert!(lab.depth_pos.x < lab.pressure_pos.x);
                }
            }
        }
    }

    #[test]
    fn test_bar_track_shrinks_before_wall_leaves_surface() {
        let params = PlateParams {
            rho: 13_600.0,
            height: 1000.0,
            ..water()
        };
        let l = layout(1000.0, 600.0, &params);
        assert!(l.max_bar < 280.0);
        assert!(l.wall.right() <= 1000.0 - 32.0 + 1e-3);
    }

    #[test]
    fn test_arrow_row_follows_center_of_pressure() {
        let l = layout(1000.0, 600.0, &water());
        let expected = l.fluid.top() + (2.0 / 3.0) * l.fluid.height();
        assert!((l.arrow_origin.y - expected).abs() < 1e-3);
        assert_eq!(l.arrow_origin.x, l.wall.right() + 8.0);

        let flat = layout(1000.0, 600.0, &PlateParams { height: 0.0, ..water() });
        assert_eq!(flat.arrow_origin.y, flat.fluid.top());
    }

    #[test]
    fn test_titles_do_not_overlap() {
        let params = PlateParams {
            height: 123_456.789,
            ..water()
        };
        let l = layout(1000.0, 600.0, &params);
        let [h, rho] = &l.titles;
        assert_eq!(h.text, "h = 123456.789 m");
        assert_eq!(rho.text, "ρ = 1000 kg/m³");
        assert!(rho.pos.x > h.pos.x + Monospace.text_width(&h.text, h.font_size));
        assert_eq!(h.pos.y, l.fluid.top() - 12.0);
    }

    #[test]
    fn test_scale_multiplies_fixed_sizes() {
        let params = water();
        let l = Layout::compute(
            &Surface::new(2000.0, 1200.0, 2.0),
            &params,
            &compute(&params),
            &Monospace,
        );
        assert_eq!(l.fluid.min, pos2(64.0, 64.0));
        assert_eq!(l.min_bar, 8.0);
        assert_eq!(l.arrow_max, 440.0);
        assert_eq!(l.rows[0].bar.height(), 16.0);
    }
}
