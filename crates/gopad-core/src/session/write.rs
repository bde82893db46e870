use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use super::error::FileError;

/// Permissions given to files created by a save.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

pub fn write(bytes: &[u8], path: impl AsRef<Path>) -> Result<usize, FileError> {
    let mut options = OpenOptions::new();
    options.create(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DEFAULT_FILE_MODE);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    let locked = rustix::fs::flock(&file, rustix::fs::FlockOperation::LockExclusive).is_ok();
    let res = write_inner(bytes, BufWriter::new(&mut file));
    #[cfg(unix)]
    if locked {
        let _ = rustix::fs::flock(&file, rustix::fs::FlockOperation::Unlock);
    }
    res
}

fn write_inner(bytes: &[u8], mut file: BufWriter<&mut File>) -> Result<usize, FileError> {
    // truncate only once the lock is held
    file.get_mut().set_len(0)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.get_mut().sync_all()?;
    Ok(bytes.len())
}
