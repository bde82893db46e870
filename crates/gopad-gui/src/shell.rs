use std::{collections::VecDeque, path::PathBuf};

use gopad_core::{
    fs::{FileSystem, StdFileSystem},
    shell::{Destination, OpenedFile, Selection, Shell, display_name},
    theme::ThemeVariant,
};

/// State the core pushes into the window, applied once per frame.
#[derive(Default)]
pub struct EguiShell {
    pub text: String,
    pub pending_title: Option<String>,
    pub pending_theme: Option<ThemeVariant>,
    pub errors: VecDeque<String>,
    pub quit_requested: bool,
    last_dir: Option<PathBuf>,
    fs: StdFileSystem,
}

impl EguiShell {
    fn dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new();
        match &self.last_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember_dir(&mut self, path: &std::path::Path) {
        self.last_dir = path.parent().map(|dir| dir.to_path_buf());
    }

    /// Opens a file the user picked. Failing to open it is reported here,
    /// the core treats `Failed` like a dismissed dialog.
    fn open_picked(&mut self, path: PathBuf) -> Selection<OpenedFile> {
        self.remember_dir(&path);
        let name = display_name(&path);
        match self.fs.open(&path) {
            Ok(reader) => Selection::Picked(OpenedFile { reader, path, name }),
            Err(err) => {
                tracing::error!("Error opening `{}`: {err}", path.display());
                self.show_error(&format!("Could not read {name}: {err}"));
                Selection::Failed(err)
            }
        }
    }
}

impl Shell for EguiShell {
    fn pick_file_to_open(&mut self) -> Selection<OpenedFile> {
        match self.dialog().set_title("Open File").pick_file() {
            Some(path) => self.open_picked(path),
            None => Selection::Cancelled,
        }
    }

    fn pick_save_destination(&mut self) -> Selection<Destination> {
        match self.dialog().set_title("Save File").save_file() {
            Some(path) => {
                self.remember_dir(&path);
                Selection::Picked(Destination::new(path))
            }
            None => Selection::Cancelled,
        }
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.pending_title = Some(title.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push_back(message.to_string());
    }

    fn set_theme(&mut self, theme: ThemeVariant) {
        self.pending_theme = Some(theme);
    }

    fn quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn unopenable_pick_is_reported_once() {
        let tmp_dir = TempDir::new("gopad").unwrap();
        let path = tmp_dir.path().join("missing.txt");

        let mut shell = EguiShell::default();
        let selection = shell.open_picked(path);

        assert!(matches!(selection, Selection::Failed(_)));
        assert_eq!(shell.errors.len(), 1);
        assert!(shell.errors[0].starts_with("Could not read missing.txt: "));
        assert_eq!(shell.last_dir.as_deref(), Some(tmp_dir.path()));
        tmp_dir.close().unwrap();
    }

    #[test]
    fn opened_pick_carries_reader() {
        let tmp_dir = TempDir::new("gopad").unwrap();
        let path = tmp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let mut shell = EguiShell::default();
        let Selection::Picked(opened) = shell.open_picked(path.clone()) else {
            panic!("expected picked file");
        };

        assert_eq!(opened.path, path);
        assert_eq!(opened.name, "notes.txt");
        assert!(shell.errors.is_empty());
        tmp_dir.close().unwrap();
    }

    #[test]
    fn pushes_are_queued_until_applied() {
        let mut shell = EguiShell::default();
        shell.set_text("abc");
        shell.set_title("GoPad - a.txt");
        shell.show_error("first");
        shell.show_error("second");
        shell.set_theme(ThemeVariant::Dark);

        assert_eq!(shell.text(), "abc");
        assert_eq!(shell.pending_title.as_deref(), Some("GoPad - a.txt"));
        assert_eq!(shell.pending_theme, Some(ThemeVariant::Dark));
        assert_eq!(shell.errors.len(), 2);
        assert!(!shell.quit_requested);
    }
}
