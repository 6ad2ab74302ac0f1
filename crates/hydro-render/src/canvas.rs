// Plate diagram drawn with the egui painter.

use egui::{Align2, Color32, FontId, Painter, Rect, Sense, Stroke, StrokeKind, Vec2};
use hydro_core::{render, Frame, PlateParams, Shape, Surface, TextMeasure};

use crate::config::AppConfig;

/// Measures text with the context's proportional font.
pub struct EguiMeasure<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiMeasure<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for EguiMeasure<'_> {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(
                    text.to_owned(),
                    FontId::proportional(font_size),
                    Color32::PLACEHOLDER,
                )
                .size()
                .x
        })
    }
}

/// Draw the diagram in the central panel and return the frame together with
/// the screen rect it was painted in.
pub fn draw_canvas(ctx: &egui::Context, params: &PlateParams, config: &AppConfig) -> (Frame, Rect) {
    egui::CentralPanel::default()
        .show(ctx, |ui| {
            let available = ui.available_size();
            let (response, painter) = ui.allocate_painter(available, Sense::hover());
            let rect = response.rect;
            painter.rect_filled(rect, 0.0, Color32::WHITE);

            let surface = Surface::new(rect.width(), rect.height(), config.scale);
            let frame = render(params, &surface, config.force_scale, &EguiMeasure::new(ctx));
            paint_scene(&painter, rect.min.to_vec2(), &frame.scene.shapes);
            (frame, rect)
        })
        .inner
}

/// Replay paint commands, shifted by `offset` into screen space.
pub fn paint_scene(painter: &Painter, offset: Vec2, shapes: &[Shape]) {
    for shape in shapes {
        match shape {
            Shape::VerticalGradient { rect, top, bottom } => {
                painter.add(egui::Shape::mesh(gradient_mesh(rect.translate(offset), *top, *bottom)));
            }
            Shape::FilledRect { rect, fill } => {
                painter.rect_filled(rect.translate(offset), 0.0, *fill);
            }
            Shape::RectOutline { rect, width, color } => {
                painter.rect_stroke(
                    rect.translate(offset),
                    0.0,
                    Stroke::new(*width, *color),
                    StrokeKind::Inside,
                );
            }
            Shape::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment([*from + offset, *to + offset], Stroke::new(*width, *color));
            }
            Shape::Triangle { points, fill } => {
                painter.add(egui::Shape::convex_polygon(
                    points.iter().map(|p| *p + offset).collect(),
                    *fill,
                    Stroke::NONE,
                ));
            }
            Shape::Text {
                pos,
                text,
                font_size,
                color,
            } => {
                painter.text(
                    *pos + offset,
                    Align2::LEFT_CENTER,
                    text,
                    FontId::proportional(*font_size),
                    *color,
                );
            }
        }
    }
}

/// Two triangles with the top edge in `top` and the bottom edge in `bottom`;
/// the GPU interpolates between them.
fn gradient_mesh(rect: Rect, top: Color32, bottom: Color32) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}
