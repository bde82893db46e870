use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::session::{error::FileError, write};

/// Byte level access to the files a session reads and writes.
pub trait FileSystem {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>, io::Error>;
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>, io::Error> {
        Ok(Box::new(File::open(path)?))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileError> {
        let written = write::write(bytes, path)?;
        tracing::trace!("wrote {written} bytes to `{}`", path.display());
        Ok(())
    }
}
