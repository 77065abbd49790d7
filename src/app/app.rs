use eframe::egui::{
    Align2, Area, CentralPanel, Color32, Context, Frame, Id, Label, Order, RichText, Sense, Ui,
    Vec2, Window,
};
use eframe::{App as EguiApp, Frame as EguiFrame};
use std::time::{Duration, Instant};

use crate::app::channel_sliders::*;
use crate::app::code_input::*;
use crate::app::toast::Toast;
use crate::color::{self, Rgb};
use crate::constants::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CopyMode {
    Hex,
    Rgb,
}

pub struct App {
    color: Rgb,

    hex_input: String,
    rgb_input: String,
    sliders: ChannelSliders,

    copy_mode: CopyMode,

    toast: Option<Toast>,
    alert: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        let mut app = Self {
            color: DEFAULT_COLOR,
            hex_input: String::new(),
            rgb_input: String::new(),
            sliders: ChannelSliders::new(DEFAULT_COLOR),
            copy_mode: CopyMode::Hex,
            toast: None,
            alert: None,
        };
        app.apply_color(DEFAULT_COLOR);
        app
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut EguiFrame) {
        CentralPanel::default().show(ctx, |ui| {
            self.panel_content(ui);
        });

        self.alert_window(ctx);
        self.toast_overlay(ctx);
    }
}

impl App {
    /// The one broadcast point: overwrites the canonical color and
    /// rewrites every display surface in the same frame.
    fn apply_color(&mut self, color: Rgb) {
        self.color = color;
        self.hex_input = color.to_hex();
        self.rgb_input = color.to_rgb_css();
        self.sliders.set(color);
        log::debug!("color set to #{}", self.hex_input);
    }

    fn panel_content(&mut self, ui: &mut Ui) {
        self.swatch(ui);

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Hex:");
            if hex_code_input(ui, &mut self.hex_input) {
                if let Ok(color) = Rgb::from_hex(&self.hex_input) {
                    self.apply_color(color);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("RGB:");
            rgb_code_input(ui, &mut self.rgb_input);
        });

        ui.separator();

        if channel_sliders(ui, &mut self.sliders) {
            let color = self.sliders.color();
            self.apply_color(color);
        }

        ui.separator();

        if ui.button("Generate random color").clicked() {
            let color = Rgb::random(&mut rand::thread_rng());
            self.apply_color(color);
        }

        ui.separator();

        ui.horizontal(|ui| {
            ui.radio_value(&mut self.copy_mode, CopyMode::Hex, "Hex");
            ui.radio_value(&mut self.copy_mode, CopyMode::Rgb, "RGB");
            if ui.button("Copy to clipboard").clicked() {
                self.copy_active_code(ui.ctx());
            }
        });
    }

    fn swatch(&self, ui: &mut Ui) {
        let size = Vec2::new(ui.available_width(), GUI_SWATCH_HEIGHT);
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        let fill = Color32::from_rgb(self.color.red, self.color.green, self.color.blue);
        ui.painter().rect_filled(rect, 4.0, fill);
    }

    fn copy_active_code(&mut self, ctx: &Context) {
        match clipboard_payload(self.copy_mode, &self.hex_input, &self.rgb_input) {
            Ok(payload) => {
                ctx.copy_text(payload.clone());
                log::info!("copied {payload} to the clipboard");
                self.toast = Some(Toast::new(format!("{payload} copied successfully")));
            }
            Err(message) => {
                log::warn!("copy rejected: {message}");
                self.alert = Some(message.to_string());
            }
        }
    }

    fn alert_window(&mut self, ctx: &Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        let mut dismissed = false;
        Window::new("Invalid color")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.alert = None;
        }
    }

    fn toast_overlay(&mut self, ctx: &Context) {
        let now = Instant::now();

        let finished = match self.toast.as_mut() {
            Some(toast) => !toast.tick(now),
            None => return,
        };
        if finished {
            self.toast = None;
            return;
        }
        let Some(toast) = self.toast.as_mut() else {
            return;
        };

        let offset = toast.slide(now) * TOAST_SLIDE_DISTANCE;
        let clicked = Area::new(Id::new("toast"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, offset - 16.0))
            .show(ctx, |ui| {
                Frame::popup(ui.style())
                    .show(ui, |ui| {
                        let text = RichText::new(toast.message()).strong();
                        ui.add(Label::new(text).sense(Sense::click())).clicked()
                    })
                    .inner
            })
            .inner;

        if clicked {
            toast.dismiss(now);
        }

        // Keeps the timeout and the slide moving without user input.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// What a copy click puts on the clipboard for the active mode, or the
/// alert text when the field content is unusable.
fn clipboard_payload(mode: CopyMode, hex: &str, rgb: &str) -> Result<String, &'static str> {
    match mode {
        CopyMode::Hex => {
            if color::is_valid_hex(hex) {
                Ok(format!("#{hex}"))
            } else {
                Err("Invalid hex code")
            }
        }
        CopyMode::Rgb => {
            if rgb.is_empty() {
                Err("Invalid RGB color")
            } else {
                Ok(rgb.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_mode_prefixes_valid_codes() {
        assert_eq!(
            clipboard_payload(CopyMode::Hex, "FF00FF", ""),
            Ok("#FF00FF".to_string())
        );
    }

    #[test]
    fn hex_mode_rejects_invalid_codes() {
        assert_eq!(
            clipboard_payload(CopyMode::Hex, "ZZZZZZ", ""),
            Err("Invalid hex code")
        );
        assert_eq!(
            clipboard_payload(CopyMode::Hex, "", ""),
            Err("Invalid hex code")
        );
    }

    #[test]
    fn rgb_mode_passes_the_field_through() {
        assert_eq!(
            clipboard_payload(CopyMode::Rgb, "", "rgb(1, 2, 3)"),
            Ok("rgb(1, 2, 3)".to_string())
        );
        assert_eq!(
            clipboard_payload(CopyMode::Rgb, "", ""),
            Err("Invalid RGB color")
        );
    }

    #[test]
    fn default_state_renders_the_initial_color() {
        let app = App::default();
        assert_eq!(app.hex_input, "DDDEEE");
        assert_eq!(app.rgb_input, "rgb(221, 222, 238)");
        assert_eq!(app.sliders.color(), DEFAULT_COLOR);
    }

    #[test]
    fn a_broadcast_moves_every_surface() {
        let mut app = App::default();
        app.apply_color(Rgb::from_hex("1A2B3C").unwrap());
        assert_eq!(app.hex_input, "1A2B3C");
        assert_eq!(app.rgb_input, "rgb(26, 43, 60)");
        let sliders = &app.sliders;
        assert_eq!((sliders.red, sliders.green, sliders.blue), (26, 43, 60));
    }

    #[test]
    fn a_second_toast_replaces_the_first() {
        let mut app = App::default();
        app.toast = Some(Toast::new("first".to_string()));
        app.toast = Some(Toast::new("second".to_string()));
        assert_eq!(app.toast.as_ref().map(Toast::message), Some("second"));
    }
}
