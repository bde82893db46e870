use anyhow::Result;
use eframe::egui;
use gopad_core::{config::editor::Editor, session::APP_NAME};

use crate::app::GopadApp;

mod app;
mod input;
mod shell;

pub fn run(config: &Editor) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        centered: true,
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(GopadApp::new(config)) as Box<dyn eframe::App>)),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;

    tracing::info!("window closed");
    Ok(())
}
