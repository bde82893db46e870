use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::theme::ThemeVariant;

/// Outcome of a modal file dialog.
#[derive(Debug)]
pub enum Selection<T> {
    Picked(T),
    Cancelled,
    Failed(io::Error),
}

pub struct OpenedFile {
    pub reader: Box<dyn Read>,
    pub path: PathBuf,
    pub name: String,
}

impl OpenedFile {
    /// The display name is taken from the last path component.
    pub fn new(reader: impl Read + 'static, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            reader: Box::new(reader),
            name: display_name(&path),
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    pub name: String,
}

impl Destination {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            path,
        }
    }
}

pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.to_string_lossy().to_string(),
    }
}

/// The windowing layer the editor core drives.
///
/// Every method runs on the ui thread. The dialog methods block until the
/// user has picked something or dismissed the dialog.
pub trait Shell {
    fn pick_file_to_open(&mut self) -> Selection<OpenedFile>;
    fn pick_save_destination(&mut self) -> Selection<Destination>;
    /// Replaces the full contents of the text area.
    fn set_text(&mut self, text: &str);
    /// Current full contents of the text area.
    fn text(&self) -> String;
    fn set_title(&mut self, title: &str);
    fn show_error(&mut self, message: &str);
    fn set_theme(&mut self, theme: ThemeVariant);
    fn quit(&mut self);
}
