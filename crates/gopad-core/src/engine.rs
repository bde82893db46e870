use crate::{
    cmd::Cmd,
    fs::{FileSystem, StdFileSystem},
    session::Session,
    shell::Shell,
    theme::ThemeVariant,
};

/// Routes user intents from the shell to the session.
pub struct Engine<F = StdFileSystem> {
    pub session: Session<F>,
    theme: ThemeVariant,
}

impl Engine {
    pub fn new(theme: ThemeVariant) -> Self {
        Self::with_session(Session::new(), theme)
    }
}

impl<F: FileSystem> Engine<F> {
    pub fn with_session(session: Session<F>, theme: ThemeVariant) -> Self {
        Self { session, theme }
    }

    pub fn theme(&self) -> ThemeVariant {
        self.theme
    }

    /// Pushes the initial state to a freshly created shell.
    pub fn attach(&mut self, shell: &mut dyn Shell) {
        shell.set_theme(self.theme);
        shell.set_text(self.session.buffer());
        shell.set_title(&self.session.window_title());
    }

    pub fn handle_command(&mut self, cmd: Cmd, shell: &mut dyn Shell) {
        tracing::trace!("handling command: {cmd:?}");
        match cmd {
            Cmd::New => self.session.new_document(shell),
            Cmd::Open => self.session.open(shell),
            Cmd::Save => self.session.save(shell),
            Cmd::SaveAs => self.session.save_as(shell),
            Cmd::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!("switched to {} theme", self.theme);
                shell.set_theme(self.theme);
            }
            Cmd::Quit => {
                if self.session.is_dirty() {
                    tracing::warn!("quitting with unsaved changes");
                }
                shell.quit();
            }
        }
    }
}
