use eframe::egui::{TextEdit, Ui};

use crate::color;
use crate::constants::*;

/// Hex text field. Uppercases the text in place on every keystroke and
/// returns true once the field holds a valid six-digit code for the
/// engine to broadcast. Invalid text is left alone while typing.
pub fn hex_code_input(ui: &mut Ui, text: &mut String) -> bool {
    let response = ui.add(TextEdit::singleline(text).desired_width(GUI_CODE_INPUT_WIDTH));
    if !response.changed() {
        return false;
    }
    *text = text.to_uppercase();
    color::is_valid_hex(text)
}

/// RGB text field. A display surface: the engine rewrites it on every
/// broadcast and user edits are not parsed back.
pub fn rgb_code_input(ui: &mut Ui, text: &mut String) {
    ui.add(TextEdit::singleline(text).desired_width(GUI_CODE_INPUT_WIDTH));
}
