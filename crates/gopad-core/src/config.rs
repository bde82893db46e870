use std::path::PathBuf;

use editor::Editor;

pub mod editor;

pub struct Config {
    pub editor: Editor,
    pub editor_path: Option<PathBuf>,
}

impl Config {
    /// Loads the user config, falling back to the embedded defaults.
    ///
    /// The error is handed back instead of logged since logging is set up
    /// from the loaded config.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        let editor_path = Editor::get_default_location().ok();
        let (editor, err) = match Editor::load_from_default_location() {
            Ok(editor) => (editor, None),
            Err(err) => (Editor::default(), Some(err)),
        };
        (
            Self {
                editor,
                editor_path,
            },
            err,
        )
    }
}
