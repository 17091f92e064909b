use egui::{Color32, Pos2, Sense, Stroke};
use pend_sim::{FrameProjector, SimulationSession};

/// Live pendulum drawing: rod, bob, and pivot marker on a dark canvas.
#[derive(Default)]
pub struct AnimationView {}

impl AnimationView {
    pub fn show(&mut self, ui: &mut egui::Ui, session: &SimulationSession, frame: usize) {
        let params = session.params();
        let length = params.length_m();

        let Ok(state) = session.state_at(frame) else {
            // Driver/session desync; surface it instead of wrapping
            ui.colored_label(
                Color32::RED,
                format!("frame {frame} out of range for this window"),
            );
            return;
        };

        ui.horizontal(|ui| {
            ui.label(format!("frame {}/{}", frame + 1, session.frame_count()));
            ui.separator();
            ui.label(format!("windows completed: {}", session.windows_completed()));
            ui.separator();
            ui.label(format!("θ = {:+.3} rad", state.theta_rad));
            ui.separator();
            ui.label(format!(
                "E = {:.4}",
                session.dynamics().specific_energy(&state)
            ));
        });

        let projector = FrameProjector::pivot_relative(params);
        let coords = match session.get_frame(frame, &projector) {
            Ok(coords) => coords,
            Err(e) => {
                ui.colored_label(Color32::RED, e.to_string());
                return;
            }
        };

        // World box around the swing: x in [-1.2 L, 1.2 L],
        // y in [-0.2 L, 2.2 L], equal aspect
        let world_w = 2.4 * length;
        let world_h = 2.4 * length;
        let world_cx = 0.0;
        let world_cy = length;

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        let scale = (f64::from(rect.width()) / world_w).min(f64::from(rect.height()) / world_h);

        let to_screen = |p: [f64; 2]| -> Pos2 {
            Pos2::new(
                rect.center().x + ((p[0] - world_cx) * scale) as f32,
                // Screen y grows downward
                rect.center().y - ((p[1] - world_cy) * scale) as f32,
            )
        };

        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let pivot = to_screen(coords.pivot);
        let bob = to_screen(coords.bob);

        painter.line_segment([pivot, bob], Stroke::new(2.0, Color32::WHITE));
        painter.circle_filled(bob, 10.0, Color32::from_rgb(60, 120, 255));
        painter.circle_filled(pivot, 3.0, Color32::WHITE);
    }
}
