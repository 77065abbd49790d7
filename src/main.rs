mod app;
mod color;
mod constants;
mod logging;

use anyhow::{anyhow, Result};
use app::App;
use constants::*;
use eframe::egui::{Vec2, ViewportBuilder};
use eframe::{run_native, NativeOptions};

fn main() -> Result<()> {
    logging::init()?;

    let title = "Color Picker";

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT)),
            resizable: Some(false),
            maximize_button: Some(false),
            minimize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    log::info!("starting {title}");

    run_native(title, options, Box::new(|_cc| Ok(Box::<App>::default())))
        .map_err(|e| anyhow!("failed to run the ui: {e}"))
}
