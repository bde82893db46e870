use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cmd {
    New,
    Open,
    Save,
    SaveAs,
    ToggleTheme,
    Quit,
}

impl Cmd {
    pub fn label(&self) -> &'static str {
        match self {
            Cmd::New => "New",
            Cmd::Open => "Open...",
            Cmd::Save => "Save",
            Cmd::SaveAs => "Save As...",
            Cmd::ToggleTheme => "Toggle Dark Mode",
            Cmd::Quit => "Quit",
        }
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}
