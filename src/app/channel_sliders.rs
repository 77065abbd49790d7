use eframe::egui::{Slider, Ui};

use crate::color::Rgb;
use crate::constants::*;

/// Slider positions for the three channels. Kept apart from the
/// canonical color so a drag in progress only commits on release.
pub struct ChannelSliders {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ChannelSliders {
    pub fn new(color: Rgb) -> Self {
        Self {
            red: color.red,
            green: color.green,
            blue: color.blue,
        }
    }

    pub fn set(&mut self, color: Rgb) {
        self.red = color.red;
        self.green = color.green;
        self.blue = color.blue;
    }

    pub fn color(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}

/// Draws the three sliders with a numeric label mirroring each value.
/// Returns true when any slider commits a new value (drag released or
/// value set directly), not on intermediate drag ticks.
pub fn channel_sliders(ui: &mut Ui, data: &mut ChannelSliders) -> bool {
    ui.spacing_mut().slider_width = GUI_SLIDER_WIDTH;
    let mut committed = false;
    committed |= channel_row(ui, "Red", &mut data.red);
    committed |= channel_row(ui, "Green", &mut data.green);
    committed |= channel_row(ui, "Blue", &mut data.blue);
    committed
}

fn channel_row(ui: &mut Ui, label: &str, value: &mut u8) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let response = ui.add(Slider::new(value, 0..=255).show_value(false));
        ui.label(value.to_string());
        response.drag_stopped() || (response.changed() && !response.dragged())
    })
    .inner
}
