use crate::views::{AnimationView, BehaviorView};
use pend_core::{m, mps2, rad, radps};
use pend_sim::{IntegratorKind, PendulumParams, PendulumState, SessionOptions, SimulationSession};

pub struct PendsimApp {
    session: Option<SimulationSession>,
    frame: usize,
    running: bool,
    active_view: ViewTab,
    animation_view: AnimationView,
    behavior_view: BehaviorView,
    last_error: Option<String>,

    // Editable run parameters; applied on Restart
    length_m: f64,
    gravity_mps2: f64,
    theta0_rad: f64,
    omega0_rad_s: f64,
    samples_per_window: usize,
    integrator: IntegratorKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Animation,
    Behavior,
}

impl PendsimApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            session: None,
            frame: 0,
            running: false,
            active_view: ViewTab::Animation,
            animation_view: AnimationView::default(),
            behavior_view: BehaviorView::default(),
            last_error: None,
            // Demo pendulum: fast half-meter swing
            length_m: 0.5,
            gravity_mps2: 100.0,
            theta0_rad: 0.0,
            omega0_rad_s: 3.0,
            samples_per_window: 500,
            integrator: IntegratorKind::RK4,
        };
        app.restart_session();
        app
    }

    fn restart_session(&mut self) {
        self.frame = 0;
        self.last_error = None;

        let result = PendulumParams::new(m(self.length_m), mps2(self.gravity_mps2)).and_then(
            |params| {
                SimulationSession::start(
                    params,
                    PendulumState::new(rad(self.theta0_rad), radps(self.omega0_rad_s)),
                    SessionOptions {
                        samples_per_window: self.samples_per_window,
                        integrator: self.integrator,
                    },
                )
            },
        );

        match result {
            Ok(session) => {
                self.session = Some(session);
                self.running = true;
            }
            Err(e) => {
                self.session = None;
                self.running = false;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// One display tick: advance the frame index, re-arming the session at
    /// the cycle boundary so the next window continues the motion.
    fn advance_animation(&mut self) {
        if !self.running {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        self.frame += 1;
        if self.frame >= session.frame_count() {
            match session.rearm() {
                Ok(()) => self.frame = 0,
                Err(e) => {
                    // Keep showing the last valid window rather than garbage
                    self.last_error = Some(e.to_string());
                    self.running = false;
                    self.frame = session.frame_count() - 1;
                }
            }
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_view, ViewTab::Animation, "Animation");
            ui.selectable_value(&mut self.active_view, ViewTab::Behavior, "Behavior");
            ui.separator();

            ui.add_enabled_ui(self.session.is_some(), |ui| {
                let label = if self.running { "Pause" } else { "Resume" };
                if ui.button(label).clicked() {
                    self.running = !self.running;
                }
            });
            if ui.button("Restart").clicked() {
                self.restart_session();
            }
            ui.separator();

            ui.label("L");
            ui.add(
                egui::DragValue::new(&mut self.length_m)
                    .speed(0.01)
                    .range(0.01..=10.0)
                    .suffix(" m"),
            );
            ui.label("g");
            ui.add(
                egui::DragValue::new(&mut self.gravity_mps2)
                    .speed(0.1)
                    .range(0.1..=1000.0)
                    .suffix(" m/s²"),
            );
            ui.label("θ0");
            ui.add(egui::DragValue::new(&mut self.theta0_rad).speed(0.01));
            ui.label("ω0");
            ui.add(egui::DragValue::new(&mut self.omega0_rad_s).speed(0.05));
            ui.label("samples");
            ui.add(egui::DragValue::new(&mut self.samples_per_window).range(2.0..=20_000.0));

            egui::ComboBox::from_id_salt("integrator_select")
                .selected_text(match self.integrator {
                    IntegratorKind::RK4 => "RK4",
                    IntegratorKind::ForwardEuler => "Forward Euler",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.integrator, IntegratorKind::RK4, "RK4");
                    ui.selectable_value(
                        &mut self.integrator,
                        IntegratorKind::ForwardEuler,
                        "Forward Euler",
                    );
                });
        });
    }
}

impl eframe::App for PendsimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        if self.active_view == ViewTab::Animation {
            self.advance_animation();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.last_error {
                ui.colored_label(egui::Color32::RED, error);
            }

            match self.session.as_ref() {
                None => {
                    ui.label("Adjust the parameters and press Restart");
                }
                Some(session) => match self.active_view {
                    ViewTab::Animation => self.animation_view.show(ui, session, self.frame),
                    ViewTab::Behavior => self.behavior_view.show(ui, session),
                },
            }
        });

        // The display owns the timer: keep ticking while the animation runs
        if self.running && self.active_view == ViewTab::Animation {
            ctx.request_repaint();
        }
    }
}
