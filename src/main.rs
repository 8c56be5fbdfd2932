//! Catmull-Rom-Spline-Editor.
//!
//! Vier verschiebbare Kontrollpunkte, die zugehörige Catmull-Rom-Kurve
//! wird bei jeder Bewegung neu berechnet und gezeichnet.

use catmull_rom_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Catmull-Rom-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Catmull-Rom-Spline"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Catmull-Rom-Spline",
            options,
            Box::new(|_cc| {
                // Optionen aus TOML laden (oder Standardwerte)
                let config_path = EditorOptions::config_path();
                let editor_options = EditorOptions::load_from_file(&config_path);
                Ok(Box::new(EditorApp::new(editor_options)?))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(options: EditorOptions) -> anyhow::Result<Self> {
        Ok(Self {
            state: AppState::new(options)?,
            controller: AppController::new(),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let canvas_generation = self.state.canvas.generation();
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        let canvas_changed = self.state.canvas.generation() != canvas_generation;
        self.maybe_request_repaint(ctx, has_meaningful_events || canvas_changed);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.canvas,
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                render::paint_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.should_exit || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
