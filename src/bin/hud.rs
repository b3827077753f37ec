use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use nalgebra::Point2;

use horizon_sim::config::{presets, AircraftConfig};
use horizon_sim::hud::HorizonGeometry;
use horizon_sim::input::KeyState;
use horizon_sim::sim;
use horizon_sim::types::{FlightState, SimConfig};

const SKY: egui::Color32 = egui::Color32::from_rgb(42, 101, 179);
const GROUND: egui::Color32 = egui::Color32::from_rgb(116, 78, 40);
const LINE: egui::Color32 = egui::Color32::WHITE;
const WARN: egui::Color32 = egui::Color32::from_rgb(235, 60, 40);

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let app = HudApp::new(presets::trainer());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Artificial Horizon", options, Box::new(|_| Ok(Box::new(app))))
}

struct HudApp {
    config: AircraftConfig,
    sim_config: SimConfig,
    state: FlightState,
    history: Vec<FlightState>,
    accumulator: f64,
}

impl HudApp {
    fn new(config: AircraftConfig) -> Self {
        let state = FlightState::default();
        Self {
            config,
            sim_config: SimConfig::default(),
            history: vec![state.clone()],
            state,
            accumulator: 0.0,
        }
    }

    fn reset(&mut self) {
        self.state = FlightState::default();
        self.history.clear();
        self.history.push(self.state.clone());
        self.accumulator = 0.0;
    }

    /// Advance the simulation by however much wall time the frame took,
    /// in fixed steps.
    fn advance(&mut self, frame_dt: f64, keys: KeyState) {
        if self.state.crashed {
            // Terminal: hold the final picture until a reset
            self.accumulator = 0.0;
            return;
        }
        let controls = keys.controls();
        // A long hitch (window drag, etc.) must not trigger a step avalanche
        self.accumulator += frame_dt.min(0.25);
        while self.accumulator >= self.sim_config.dt {
            self.state = sim::step(&self.state, &self.config, &controls, self.sim_config.dt);
            self.accumulator -= self.sim_config.dt;
            self.history.push(self.state.clone());
        }
        // Keep roughly the last two minutes of history for the strip charts
        let cap = (120.0 / self.sim_config.dt) as usize;
        if self.history.len() > cap {
            let excess = self.history.len() - cap;
            self.history.drain(..excess);
        }
    }

    fn draw_horizon(&self, painter: &egui::Painter, rect: egui::Rect) {
        let center = Point2::new(rect.center().x as f64, rect.center().y as f64);
        let reach = (rect.width().max(rect.height()) as f64) * 1.5;
        let geo = HorizonGeometry::new(center, reach, 6.0);

        let (a, b) = geo.horizon_line(self.state.pitch, self.state.roll);

        // Sky everywhere, then the ground as a deep quad below the horizon
        painter.rect_filled(rect, egui::CornerRadius::ZERO, SKY);
        let dir = (b - a).normalize();
        let below = nalgebra::Vector2::new(-dir.y, dir.x) * reach;
        painter.add(egui::Shape::convex_polygon(
            vec![to_pos(a), to_pos(b), to_pos(b + below), to_pos(a + below)],
            GROUND,
            egui::Stroke::NONE,
        ));
        painter.line_segment([to_pos(a), to_pos(b)], egui::Stroke::new(2.0, LINE));

        // Pitch ladder
        let ladder_geo = HorizonGeometry::new(center, 120.0, 6.0);
        for rung in ladder_geo.pitch_ladder(self.state.pitch, self.state.roll) {
            painter.line_segment(
                [to_pos(rung.left), to_pos(rung.right)],
                egui::Stroke::new(1.0, LINE),
            );
            painter.text(
                to_pos(rung.right),
                egui::Align2::LEFT_CENTER,
                format!(" {:.0}", rung.angle),
                egui::FontId::monospace(11.0),
                LINE,
            );
        }

        // Bank pointer and its zero-roll reference mark
        let pointer = ladder_geo.bank_pointer(self.state.roll, 170.0);
        let reference = ladder_geo.bank_pointer(0.0, 185.0);
        painter.circle_filled(to_pos(pointer), 5.0, egui::Color32::YELLOW);
        painter.circle_filled(to_pos(reference), 3.0, LINE);

        // Fixed aircraft symbol
        let c = rect.center();
        let wing = egui::Stroke::new(3.0, egui::Color32::YELLOW);
        painter.line_segment([c + egui::vec2(-60.0, 0.0), c + egui::vec2(-20.0, 0.0)], wing);
        painter.line_segment([c + egui::vec2(20.0, 0.0), c + egui::vec2(60.0, 0.0)], wing);
        painter.circle_filled(c, 3.0, egui::Color32::YELLOW);
    }

    fn draw_readouts(&self, painter: &egui::Painter, rect: egui::Rect) {
        let font = egui::FontId::monospace(15.0);
        let left = [
            format!("SPD {:>6.1} kt", self.state.airspeed),
            format!("ALT {:>6.0} ft", self.state.altitude),
            format!("V/S {:>6.1} ft/s", self.state.vertical_speed),
        ];
        let right = [
            format!("PITCH {:>6.1}°", self.state.pitch),
            format!("ROLL  {:>6.1}°", self.state.roll),
            format!("THR   {:>5.0}%", self.state.throttle * 100.0),
        ];
        for (i, line) in left.iter().enumerate() {
            painter.text(
                rect.left_top() + egui::vec2(16.0, 16.0 + 22.0 * i as f32),
                egui::Align2::LEFT_TOP,
                line,
                font.clone(),
                LINE,
            );
        }
        for (i, line) in right.iter().enumerate() {
            painter.text(
                rect.right_top() + egui::vec2(-16.0, 16.0 + 22.0 * i as f32),
                egui::Align2::RIGHT_TOP,
                line,
                font.clone(),
                LINE,
            );
        }

        let warn_font = egui::FontId::monospace(26.0);
        let warn_pos = egui::pos2(rect.center().x, rect.top() + 60.0);
        if self.state.crashed {
            painter.text(
                warn_pos,
                egui::Align2::CENTER_CENTER,
                "CRASHED — press R for a new flight",
                warn_font,
                WARN,
            );
        } else if self.state.stalled {
            painter.text(warn_pos, egui::Align2::CENTER_CENTER, "STALL", warn_font, WARN);
        }
    }
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (keys, frame_dt, reset) = ctx.input(|i| {
            (
                KeyState {
                    pitch_up: i.key_down(egui::Key::ArrowUp),
                    pitch_down: i.key_down(egui::Key::ArrowDown),
                    roll_left: i.key_down(egui::Key::ArrowLeft),
                    roll_right: i.key_down(egui::Key::ArrowRight),
                    throttle_up: i.key_down(egui::Key::PageUp) || i.key_down(egui::Key::W),
                    throttle_down: i.key_down(egui::Key::PageDown) || i.key_down(egui::Key::S),
                },
                i.stable_dt as f64,
                i.key_pressed(egui::Key::R),
            )
        });

        if reset && self.state.crashed {
            self.reset();
        }
        self.advance(frame_dt, keys);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("Artificial Horizon — {}", self.config.name));
                ui.separator();
                ui.label("↑/↓ pitch   ←/→ roll   PgUp/PgDn or W/S throttle");
            });
        });

        egui::TopBottomPanel::bottom("charts")
            .exact_height(180.0)
            .show(ctx, |ui| {
                let step = (self.history.len() / 2000).max(1);
                let sampled: Vec<&FlightState> = self.history.iter().step_by(step).collect();
                let half_w = ui.available_width() / 2.0 - 8.0;

                ui.horizontal(|ui| {
                    let alt_points: PlotPoints =
                        sampled.iter().map(|s| [s.time, s.altitude]).collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(160.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude (ft)", alt_points));
                        });

                    let spd_points: PlotPoints =
                        sampled.iter().map(|s| [s.time, s.airspeed]).collect();
                    Plot::new("airspeed")
                        .width(half_w)
                        .height(160.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Airspeed (kt)", spd_points));
                        });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let painter = ui.painter_at(rect);
            self.draw_horizon(&painter, rect);
            self.draw_readouts(&painter, rect);
        });

        // Keep simulating even without input events
        ctx.request_repaint();
    }
}

fn to_pos(p: Point2<f64>) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}
