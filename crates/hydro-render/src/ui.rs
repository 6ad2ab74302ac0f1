// egui control panel: input fields, actions, readouts.

use std::time::{Duration, Instant};

use hydro_core::input::RawInputs;
use hydro_core::Readouts;

/// How long the copy button shows its confirmation.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1200);

/// UI-only state that doesn't belong in `PlateParams`.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub inputs: RawInputs,
    /// When the parameters were last copied to the clipboard.
    pub copied_at: Option<Instant>,
    /// Outcome of the last PNG export, shown under the buttons.
    pub export_status: Option<String>,
}

impl UiState {
    pub fn new(inputs: RawInputs) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Remaining time the "copied" confirmation stays up.
    pub fn copied_feedback_left(&self, now: Instant) -> Option<Duration> {
        let since = now.saturating_duration_since(self.copied_at?);
        (since < COPIED_FEEDBACK).then(|| COPIED_FEEDBACK - since)
    }
}

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiActions {
    /// Some field's text changed.
    pub edited: bool,
    pub update: bool,
    pub copy: bool,
    pub export: bool,
}

/// Draw the left-side control panel.
pub fn draw_controls(
    ctx: &egui::Context,
    state: &mut UiState,
    readouts: &Readouts,
    now: Instant,
) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::left("controls")
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Plate Parameters");
            ui.separator();

            let inputs = &mut state.inputs;
            for (label, text) in [
                ("Density ρ (kg/m³)", &mut inputs.rho),
                ("Gravity g (m/s²)", &mut inputs.g),
                ("Plate height h (m)", &mut inputs.height),
                ("Plate area A (m²)", &mut inputs.area),
                ("Samples", &mut inputs.steps),
            ] {
                ui.label(label);
                if ui.text_edit_singleline(text).changed() {
                    actions.edited = true;
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                actions.update = ui.button("Update").clicked();
                let copy_label = if state.copied_feedback_left(now).is_some() {
                    "Copied ✓"
                } else {
                    "Copy parameters"
                };
                actions.copy = ui.button(copy_label).clicked();
            });
            actions.export = ui.button("Export PNG").clicked();
            if let Some(status) = &state.export_status {
                ui.small(status);
            }

            ui.separator();

            // --- Results ---
            ui.heading("Results");
            egui::Grid::new("readouts").num_columns(2).show(ui, |ui| {
                ui.label("Base pressure");
                ui.strong(&readouts.base_pressure);
                ui.end_row();
                ui.label("Resultant force");
                ui.strong(&readouts.force);
                ui.end_row();
                ui.label("Center of pressure y_p");
                ui.strong(&readouts.center_of_pressure);
                ui.end_row();
            });
            ui.small(&readouts.summary);

            ui.separator();
            ui.label(&readouts.interpretation);
        });

    actions
}
