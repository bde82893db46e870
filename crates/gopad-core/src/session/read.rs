use std::io::{self, Read};

/// Reads the whole stream and decodes it as UTF-8.
///
/// No validation is performed, invalid sequences are replaced with U+FFFD.
pub fn read(mut reader: impl Read) -> Result<String, io::Error> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    Ok(match String::from_utf8(content) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
