use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, VecDeque},
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
};

use crate::{
    fs::FileSystem,
    session::error::FileError,
    shell::{Destination, OpenedFile, Selection, Shell},
    theme::ThemeVariant,
};

#[derive(Default)]
pub struct MemFileSystem {
    pub files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    pub fail_writes: Cell<bool>,
    pub writes: Cell<usize>,
}

impl MemFileSystem {
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl FileSystem for MemFileSystem {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>, io::Error> {
        match self.contents(path) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes))),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileError> {
        if self.fail_writes.get() {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied).into());
        }
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

/// A reader that fails on the first read.
pub struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

#[derive(Default)]
pub struct FakeShell {
    pub text: String,
    pub title: String,
    pub errors: Vec<String>,
    pub theme: Option<ThemeVariant>,
    pub quit: bool,
    pub open_selections: VecDeque<Selection<OpenedFile>>,
    pub save_selections: VecDeque<Selection<Destination>>,
    pub open_prompts: usize,
    pub save_prompts: usize,
}

impl FakeShell {
    pub fn opening(bytes: &[u8], path: &str) -> Self {
        let mut shell = Self::default();
        shell.queue_open(bytes, path);
        shell
    }

    pub fn queue_open(&mut self, bytes: &[u8], path: &str) {
        self.open_selections
            .push_back(Selection::Picked(OpenedFile::new(
                Cursor::new(bytes.to_vec()),
                path,
            )));
    }

    pub fn queue_save(&mut self, path: &str) {
        self.save_selections
            .push_back(Selection::Picked(Destination::new(path)));
    }

    /// Simulates the user typing into the text area.
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl Shell for FakeShell {
    fn pick_file_to_open(&mut self) -> Selection<OpenedFile> {
        self.open_prompts += 1;
        self.open_selections
            .pop_front()
            .unwrap_or(Selection::Cancelled)
    }

    fn pick_save_destination(&mut self) -> Selection<Destination> {
        self.save_prompts += 1;
        self.save_selections
            .pop_front()
            .unwrap_or(Selection::Cancelled)
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn set_theme(&mut self, theme: ThemeVariant) {
        self.theme = Some(theme);
    }

    fn quit(&mut self) {
        self.quit = true;
    }
}
