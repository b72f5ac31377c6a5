//! Interactive viewer for gravsim scenarios
//!
//! Draws bodies and their trails, and reloads the scenario whenever the
//! file changes on disk.

use eframe::egui;
use gravsim_core::{
    build_simulation_context_from_source, get_body_states, step_simulation, SimulationContext,
};
use notify::{Event, RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;

/// Fraction of the canvas the scene is fitted into
const FIT_MARGIN: f32 = 0.9;

pub struct ViewerApp {
    source_path: PathBuf,
    source_text: String,
    ctx_opt: Option<SimulationContext>,
    last_load_error: Option<String>,
    warnings: Vec<String>,
    playing: bool,
    steps_per_frame: u32,
    show_trails: bool,
    /// Half-width of the visible world region, fixed at load so the view does not jitter
    world_extent: f64,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(source_path: PathBuf, _cc: &eframe::CreationContext<'_>) -> Self {
        let source_text = std::fs::read_to_string(&source_path)
            .unwrap_or_else(|e| format!("Error reading file: {}", e));

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .ok();

        if let Some(ref mut w) = watcher {
            if let Err(e) = w.watch(&source_path, notify::RecursiveMode::NonRecursive) {
                eprintln!("Not watching {}: {}", source_path.display(), e);
            }
        }

        let mut app = Self {
            source_path,
            source_text,
            ctx_opt: None,
            last_load_error: None,
            warnings: Vec::new(),
            playing: false,
            steps_per_frame: 1,
            show_trails: true,
            world_extent: 1.0,
            file_watcher: watcher,
            file_receiver: rx,
        };

        app.reload_context();

        app
    }

    fn reload_context(&mut self) {
        match build_simulation_context_from_source(&self.source_text) {
            Ok((ctx, diagnostics)) => {
                self.world_extent = scene_extent(&ctx);
                self.warnings = diagnostics.warnings().map(|d| d.to_string()).collect();
                self.ctx_opt = Some(ctx);
                self.last_load_error = None;
            }
            Err(e) => {
                self.last_load_error = Some(e.to_string());
                self.warnings.clear();
                self.ctx_opt = None;
                self.playing = false;
            }
        }
    }

    fn check_file_changes(&mut self) {
        let mut needs_reload = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if paths.contains(&self.source_path) {
                        if let Ok(new_text) = std::fs::read_to_string(&self.source_path) {
                            self.source_text = new_text;
                            needs_reload = true;
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("File watcher error: {}", e);
                }
            }
        }

        if needs_reload {
            self.reload_context();
        }
    }

    fn advance(&mut self) {
        let Some(ref mut ctx) = self.ctx_opt else {
            return;
        };
        for _ in 0..self.steps_per_frame.max(1) {
            match step_simulation(ctx) {
                // Pause once on reaching the last scheduled step; Play resumes past it
                Ok(true) => {
                    self.playing = false;
                    break;
                }
                Ok(false) => {}
                Err(e) => {
                    self.last_load_error = Some(e.to_string());
                    self.playing = false;
                    break;
                }
            }
        }
    }
}

/// Half-width of the square that holds every body at load time
fn scene_extent(ctx: &SimulationContext) -> f64 {
    let extent = ctx
        .engine
        .bodies()
        .iter()
        .map(|b| b.position().abs().max_element())
        .fold(0.0, f64::max);
    if extent > 0.0 {
        extent * 1.5
    } else {
        1.0
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Play/Pause button
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                // Reset button
                if ui.button("⏮ Reset").clicked() {
                    self.reload_context();
                    self.playing = false;
                }

                // Step button
                if ui.button("⏭ Step").clicked() {
                    self.advance();
                }

                ui.separator();

                // Speed control, in whole steps per frame
                ui.label("Steps/frame:");
                ui.add(egui::Slider::new(&mut self.steps_per_frame, 1..=200));
                ui.checkbox(&mut self.show_trails, "Trails");

                ui.separator();

                // Step counter
                if let Some(ref sim) = self.ctx_opt {
                    ui.label(format!(
                        "Step: {} / {}  t = {:.3e}  ΔE/E = {:.2e}",
                        sim.current_step,
                        sim.max_steps,
                        sim.elapsed,
                        sim.energy_drift()
                    ));
                }
            });
        });

        // Bottom panel for errors and analyzer warnings
        if self.last_load_error.is_some() || !self.warnings.is_empty() {
            egui::TopBottomPanel::bottom("diagnostics").show(ctx, |ui| {
                ui.set_max_height(100.0);
                if let Some(ref error) = self.last_load_error {
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED),
                    );
                }
                for warning in &self.warnings {
                    ui.label(egui::RichText::new(warning).color(egui::Color32::YELLOW));
                }
            });
        }

        // Main canvas area
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                let center = rect.center();
                let scale = (rect.width().min(rect.height()) * 0.5 * FIT_MARGIN) as f64
                    / self.world_extent;
                let to_screen = |(x, y): (f64, f64)| {
                    center + egui::vec2((x * scale) as f32, (-y * scale) as f32)
                };

                let Some(ref sim) = self.ctx_opt else {
                    return;
                };

                // Draw trails
                if self.show_trails {
                    for (_, trail) in sim.trails.iter() {
                        let points: Vec<egui::Pos2> =
                            trail.iter().map(|p| to_screen((p.x, p.y))).collect();
                        painter.add(egui::Shape::line(
                            points,
                            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                        ));
                    }
                }

                // Draw bodies
                for body in get_body_states(sim) {
                    let screen_pos = to_screen((body.pos.x, body.pos.y));
                    let radius = (body.mass.cbrt() as f32).clamp(2.0, 20.0);

                    painter.circle_filled(screen_pos, radius, egui::Color32::WHITE);
                    painter.text(
                        screen_pos + egui::vec2(0.0, radius + 6.0),
                        egui::Align2::CENTER_TOP,
                        &body.name,
                        egui::FontId::default(),
                        egui::Color32::LIGHT_GRAY,
                    );
                }
            });

        // Simulation stepping
        if self.playing {
            self.advance();
            // Request repaint for animation
            ctx.request_repaint();
        }
    }
}
