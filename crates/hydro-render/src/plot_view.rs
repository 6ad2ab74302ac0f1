// Pressure-vs-depth profile via egui_plot.

use egui_plot::{HLine, Legend, Line, Plot};
use hydro_core::physics::PhysicsModel;
use hydro_core::{compute, PlateParams};

/// (pressure in kPa, depth in metres) per sample, depth plotted downward.
/// A negative height collapses the profile onto the surface.
pub fn profile_points(params: &PlateParams) -> Vec<[f64; 2]> {
    let model = PhysicsModel::new(params);
    let steps = params.steps.max(1);
    let height = if params.height > 0.0 { params.height } else { 0.0 };
    (0..=steps)
        .map(|i| {
            let depth = i as f64 / steps as f64 * height;
            [model.pressure_at(depth) / 1000.0, -depth]
        })
        .collect()
}

/// Plot heights of the centroid and center-of-pressure lines.
pub fn marker_depths(params: &PlateParams) -> [f64; 2] {
    let result = compute(params);
    [-result.centroid_depth, -result.center_of_pressure]
}

/// Draw the pressure profile in a bottom panel.
pub fn draw_profile(ctx: &egui::Context, params: &PlateParams) {
    let [centroid, center_of_pressure] = marker_depths(params);
    egui::TopBottomPanel::bottom("profile")
        .resizable(true)
        .default_height(180.0)
        .show(ctx, |ui| {
            ui.heading("Pressure Profile");

            let line = Line::new(profile_points(params)).name("p(depth)");

            Plot::new("profile_plot")
                .x_axis_label("Pressure (kPa)")
                .y_axis_label("Depth (m)")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                    plot_ui.hline(HLine::new(centroid).name("centroid h_c"));
                    plot_ui.hline(HLine::new(center_of_pressure).name("center of pressure y_p"));
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_runs_from_surface_to_base() {
        let params = PlateParams {
            rho: 1000.0,
            g: 9.81,
            height: 2.0,
            area: 1.0,
            steps: 4,
        };
        let points = profile_points(&params);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], [101.325, 0.0]);
        assert!((points[4][0] - 120.945).abs() < 1e-9);
        assert_eq!(points[4][1], -2.0);
    }

    #[test]
    fn test_markers_follow_the_given_record() {
        let params = PlateParams {
            rho: 1000.0,
            g: 9.81,
            height: 3.0,
            area: 2.0,
            steps: 30,
        };
        let [hc, yp] = marker_depths(&params);
        assert!((hc + 1.5).abs() < 1e-12);
        assert!((yp + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_height_stays_at_surface() {
        let params = PlateParams {
            rho: 1000.0,
            g: 9.81,
            height: -2.0,
            area: 1.0,
            steps: 4,
        };
        let points = profile_points(&params);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| *p == [101.325, 0.0]));
    }
}
