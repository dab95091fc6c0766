//! Entry point for the egui-based credit risk assessor.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use credit_guard::gui::{CreditGuardApp, MIN_VIEWPORT_SIZE};
use credit_guard::{config, logging, scoring};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init("app") {
        eprintln!("Logging disabled: {err}");
    }

    let settings = match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {err}");
            config::AppSettings::default()
        }
    };
    let top_features = settings.top_features;
    let loaded = scoring::init_global(&settings.artifact_paths()).map_err(|err| {
        tracing::error!("{err}");
        err.to_string()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1180.0, 760.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Credit Guard",
        native_options,
        Box::new(move |_cc| match loaded {
            Ok(artifacts) => Ok(Box::new(CreditGuardApp::new(artifacts, top_features))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start risk assessment");
                ui.label(&self.message);
            });
        });
    }
}
