use std::path::{Path, PathBuf};

use crate::{
    fs::{FileSystem, StdFileSystem},
    shell::{Destination, OpenedFile, Selection, Shell},
};

pub mod error;
pub mod read;
pub mod write;


pub const APP_NAME: &str = "GoPad";
/// Title of a document that has never been opened from or saved to disk.
pub const UNTITLED: &str = "Simple Text Editor";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionFile {
    path: PathBuf,
    name: String,
}

/// The document currently being edited.
pub struct Session<F = StdFileSystem> {
    buffer: String,
    file: Option<SessionFile>,
    dirty: bool,
    fs: F,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_fs(StdFileSystem)
    }
}

impl<F: FileSystem> Session<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            buffer: String::new(),
            file: None,
            dirty: false,
            fs,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.path.as_path())
    }

    pub fn title(&self) -> &str {
        match &self.file {
            Some(file) => &file.name,
            None => UNTITLED,
        }
    }

    pub fn window_title(&self) -> String {
        format!("{APP_NAME} - {}", self.title())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Records a user edit made in the shell's text area.
    pub fn edit(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.buffer {
            self.buffer = text;
            self.dirty = true;
        }
    }

    pub fn new_document(&mut self, shell: &mut dyn Shell) {
        self.buffer.clear();
        self.file = None;
        self.dirty = false;
        shell.set_text(&self.buffer);
        shell.set_title(&self.window_title());
        tracing::debug!("started new document");
    }

    pub fn open(&mut self, shell: &mut dyn Shell) {
        let selection = shell.pick_file_to_open();
        self.open_selection(selection, shell);
    }

    pub fn open_selection(&mut self, selection: Selection<OpenedFile>, shell: &mut dyn Shell) {
        let OpenedFile { reader, path, name } = match selection {
            Selection::Picked(opened) => opened,
            Selection::Cancelled => {
                tracing::debug!("open dialog cancelled");
                return;
            }
            Selection::Failed(err) => {
                tracing::warn!("open dialog failed: {err}");
                return;
            }
        };

        let text = match read::read(reader) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("Error reading `{}`: {err}", path.display());
                shell.show_error(&format!("Could not read {name}: {err}"));
                return;
            }
        };

        tracing::info!("opened `{}` ({} bytes)", path.display(), text.len());
        self.buffer = text;
        self.file = Some(SessionFile { path, name });
        self.dirty = false;
        shell.set_text(&self.buffer);
        shell.set_title(&self.window_title());
    }

    pub fn save(&mut self, shell: &mut dyn Shell) {
        let Some(path) = self.path().map(Path::to_path_buf) else {
            self.save_as(shell);
            return;
        };

        self.sync_from_shell(shell);
        let name = self.title().to_string();
        if self.write_file(&path, &name, shell) {
            self.dirty = false;
        }
    }

    pub fn save_as(&mut self, shell: &mut dyn Shell) {
        let selection = shell.pick_save_destination();
        self.save_as_selection(selection, shell);
    }

    pub fn save_as_selection(&mut self, selection: Selection<Destination>, shell: &mut dyn Shell) {
        let Destination { path, name } = match selection {
            Selection::Picked(destination) => destination,
            Selection::Cancelled => {
                tracing::debug!("save dialog cancelled");
                return;
            }
            Selection::Failed(err) => {
                tracing::warn!("save dialog failed: {err}");
                return;
            }
        };

        self.sync_from_shell(shell);
        if !self.write_file(&path, &name, shell) {
            return;
        }

        self.file = Some(SessionFile { path, name });
        self.dirty = false;
        shell.set_title(&self.window_title());
    }

    fn sync_from_shell(&mut self, shell: &dyn Shell) {
        let text = shell.text();
        if text != self.buffer {
            self.buffer = text;
            self.dirty = true;
        }
    }

    /// Writes the buffer to `path`, reporting failure through the shell.
    fn write_file(&self, path: &Path, name: &str, shell: &mut dyn Shell) -> bool {
        match self.fs.write(path, self.buffer.as_bytes()) {
            Ok(()) => {
                tracing::info!("saved `{}`", path.display());
                true
            }
            Err(err) => {
                tracing::error!("Error writing `{}`: {err}", path.display());
                shell.show_error(&format!("Could not save {name}: {err}"));
                false
            }
        }
    }
}
