use core::fmt;

use crate::cmd::Cmd;

bitflags::bitflags! {
    #[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const SUPER = 0b0000_1000;
        const NONE = 0b0000_0000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub keycode: char,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub const fn new(keycode: char, modifiers: KeyModifiers) -> Self {
        Self { keycode, modifiers }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            "Ctrl+".fmt(f)?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            "Alt+".fmt(f)?;
        }
        if self.modifiers.contains(KeyModifiers::SUPER) {
            "Super+".fmt(f)?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            "Shift+".fmt(f)?;
        }
        write!(f, "{}", self.keycode.to_ascii_uppercase())
    }
}

pub fn get_default_mappings() -> Vec<(Key, Cmd)> {
    vec![
        (Key::new('n', KeyModifiers::CONTROL), Cmd::New),
        (Key::new('o', KeyModifiers::CONTROL), Cmd::Open),
        (Key::new('s', KeyModifiers::CONTROL), Cmd::Save),
        (Key::new('d', KeyModifiers::CONTROL), Cmd::ToggleTheme),
    ]
}

pub fn get_command_from_input(
    keycode: char,
    modifiers: KeyModifiers,
    mappings: &[(Key, Cmd)],
) -> Option<Cmd> {
    let normalized = Key::new(keycode.to_ascii_lowercase(), modifiers);
    mappings
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, cmd)| *cmd)
}

/// Shortcut hint shown next to a menu entry.
pub fn get_shortcut_for(cmd: Cmd, mappings: &[(Key, Cmd)]) -> Option<Key> {
    mappings
        .iter()
        .find(|(_, mapped)| *mapped == cmd)
        .map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shortcuts() {
        let mappings = get_default_mappings();
        let lookup = |ch| get_command_from_input(ch, KeyModifiers::CONTROL, &mappings);
        assert_eq!(lookup('n'), Some(Cmd::New));
        assert_eq!(lookup('O'), Some(Cmd::Open));
        assert_eq!(lookup('s'), Some(Cmd::Save));
        assert_eq!(lookup('d'), Some(Cmd::ToggleTheme));
        assert_eq!(lookup('x'), None);
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let mappings = get_default_mappings();
        assert_eq!(get_command_from_input('s', KeyModifiers::NONE, &mappings), None);
        assert_eq!(
            get_command_from_input('s', KeyModifiers::CONTROL | KeyModifiers::SHIFT, &mappings),
            None
        );
    }

    #[test]
    fn shortcut_hint() {
        let mappings = get_default_mappings();
        let key = get_shortcut_for(Cmd::ToggleTheme, &mappings).unwrap();
        assert_eq!(key.to_string(), "Ctrl+D");
        assert_eq!(get_shortcut_for(Cmd::SaveAs, &mappings), None);
    }
}
