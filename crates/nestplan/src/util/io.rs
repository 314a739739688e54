//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename.
///
/// The content goes to a sibling `.tmp` file first, which is then renamed
/// over the target, so an interrupted write never leaves a truncated file.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)
}
