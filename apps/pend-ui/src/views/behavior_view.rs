use egui_plot::{Legend, Line, Plot};
use pend_sim::{FrameProjector, SimulationSession};

/// Static plots for the current window: angle over time and the bob's path
/// in the plane.
#[derive(Default)]
pub struct BehaviorView {}

impl BehaviorView {
    pub fn show(&mut self, ui: &mut egui::Ui, session: &SimulationSession) {
        let times = session.grid().times();
        let trajectory = session.trajectory();

        let theta_points: Vec<[f64; 2]> = times
            .iter()
            .zip(trajectory)
            .map(|(&t, state)| [t, state.theta_rad])
            .collect();

        let projector = FrameProjector::origin_relative(session.params());
        let path_points: Vec<[f64; 2]> = trajectory
            .iter()
            .map(|state| projector.project(state.theta_rad))
            .collect();

        let half = ui.available_height() / 2.0;

        Plot::new("angle_vs_time")
            .height(half)
            .legend(Legend::default())
            .x_axis_label("time (s)")
            .y_axis_label("angle (rad)")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(theta_points).name("θ(t)"));
            });

        Plot::new("bob_path")
            .data_aspect(1.0)
            .legend(Legend::default())
            .x_axis_label("x (m)")
            .y_axis_label("y (m)")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(path_points).name("pendulum"));
            });
    }
}
