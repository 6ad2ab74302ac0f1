// eframe application: input commit, debounce, clipboard, screenshot export.

use std::sync::Arc;
use std::time::Instant;

use egui::{ColorImage, Rect};
use hydro_core::input::RawInputs;
use hydro_core::schedule::RenderScheduler;
use hydro_core::{PlateParams, Readouts};

use crate::config::AppConfig;
use crate::ui::UiState;
use crate::{canvas, export, plot_view, ui};

pub struct App {
    config: AppConfig,
    /// The record the diagram is drawn from; replaced wholesale on commit.
    params: PlateParams,
    ui_state: UiState,
    scheduler: RenderScheduler,
    /// Canvas rect of the last frame, for cropping screenshots and spotting
    /// resizes.
    canvas_rect: Option<Rect>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: AppConfig) -> Self {
        let ui_state = UiState::new(RawInputs::from_params(&config.initial));
        let params = ui_state.inputs.parse();
        Self {
            config,
            params,
            ui_state,
            scheduler: RenderScheduler::default(),
            canvas_rect: None,
        }
    }

    /// Replace the drawn record with the current field contents.
    fn commit(&mut self) {
        self.params = self.ui_state.inputs.parse();
        tracing::debug!(params = ?self.params, "committed inputs");
    }

    fn handle_screenshots(&mut self, ctx: &egui::Context) {
        let shots: Vec<Arc<ColorImage>> = ctx.input(|i| {
            i.raw
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Screenshot { image, .. } => Some(Arc::clone(image)),
                    _ => None,
                })
                .collect()
        });
        if shots.is_empty() {
            return;
        }

        let pixels_per_point = ctx.pixels_per_point();
        for shot in shots {
            let cropped = match self.canvas_rect {
                Some(rect) => shot.region(&rect, Some(pixels_per_point)),
                None => (*shot).clone(),
            };
            let status = match export::save_png(&cropped, &self.config.export_dir) {
                Ok(path) => format!("Saved {}", path.display()),
                Err(err) => {
                    tracing::error!(%err, "PNG export failed");
                    format!("Export failed: {err}")
                }
            };
            self.ui_state.export_status = Some(status);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_screenshots(ctx);

        let result = hydro_core::compute(&self.params);
        let readouts = Readouts::new(&self.params, &result);
        let actions = ui::draw_controls(ctx, &mut self.ui_state, &readouts, now);

        if actions.edited {
            self.scheduler.input_changed(now);
        }
        if actions.update {
            self.scheduler.render_now();
        }
        if actions.copy {
            ctx.copy_text(self.ui_state.inputs.clipboard_string());
            self.ui_state.copied_at = Some(now);
            tracing::info!("copied parameters to clipboard");
        }
        if actions.export {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        }

        if self.scheduler.poll(now) {
            self.commit();
            // Panels above were drawn from the previous record.
            ctx.request_repaint();
        }

        plot_view::draw_profile(ctx, &self.params);
        let (_frame, rect) = canvas::draw_canvas(ctx, &self.params, &self.config);

        let resized = self
            .canvas_rect
            .is_some_and(|old| (old.size() - rect.size()).length() > 0.5);
        self.canvas_rect = Some(rect);
        if resized {
            // Resizes redraw straight away with whatever is in the fields.
            self.scheduler.render_now();
            ctx.request_repaint();
        }

        if let Some(wait) = self.scheduler.time_until_due(now) {
            ctx.request_repaint_after(wait);
        }
        if let Some(wait) = self.ui_state.copied_feedback_left(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_record_comes_from_config() {
        let config = AppConfig {
            initial: PlateParams {
                rho: 850.0,
                g: 9.81,
                height: 3.0,
                area: 2.0,
                steps: 12,
            },
            ..AppConfig::default()
        };
        let app = App::with_config(config.clone());
        assert_eq!(app.params, config.initial);
        assert_eq!(app.ui_state.inputs.steps, "12");
        assert!(app.canvas_rect.is_none());
    }

    #[test]
    fn test_commit_replaces_record_from_fields() {
        let mut app = App::with_config(AppConfig::default());
        app.ui_state.inputs.height = "5".into();
        app.ui_state.inputs.g = "oops".into();
        assert_eq!(app.params.height, 2.0);
        app.commit();
        assert_eq!(app.params.height, 5.0);
        assert_eq!(app.params.g, 9.81);
    }
}
