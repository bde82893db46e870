use eframe::egui;
use gopad_core::{
    cmd::Cmd,
    keymap::{self, Key, KeyModifiers},
};

pub fn modifiers_from_egui(modifiers: egui::Modifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.shift {
        out |= KeyModifiers::SHIFT;
    }
    // cmd on macos plays the role of ctrl
    if modifiers.ctrl || modifiers.mac_cmd {
        out |= KeyModifiers::CONTROL;
    }
    if modifiers.alt {
        out |= KeyModifiers::ALT;
    }
    out
}

pub fn keycode_from_egui(key: egui::Key) -> Option<char> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphanumeric() => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}

/// Collects the commands triggered by key presses this frame.
pub fn commands_from_events(events: &[egui::Event], mappings: &[(Key, Cmd)]) -> Vec<Cmd> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } => {
                let keycode = keycode_from_egui(*key)?;
                keymap::get_command_from_input(keycode, modifiers_from_egui(*modifiers), mappings)
            }
            _ => None,
        })
        .collect()
}
