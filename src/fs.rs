//! Filesystem helpers (`std` only).
//!
//! Path policy lives here, outside the codec proper: the conventional
//! `.limg` extension is appended when missing, and parent directories are
//! created before writing. Filesystem failures surface unmasked as
//! [`LimgError::Io`].

use std::fs;
use std::path::{Path, PathBuf};

use enough::Stop;

use crate::decode::decode_limg;
use crate::encode::encode_limg;
use crate::error::LimgError;
use crate::grid::Grid;

/// Conventional filename extension for LIMG streams.
pub const FILE_EXTENSION: &str = "limg";

/// Encode `grid` and write it to `path`, returning the path actually
/// written (with the `.limg` extension appended if `path` lacked it).
///
/// Parent directories are created as needed. The file handle is scoped to
/// the write and released on every exit path, including errors.
pub fn write_file(
    grid: &Grid,
    path: impl AsRef<Path>,
    stop: impl Stop,
) -> Result<PathBuf, LimgError> {
    let encoded = encode_limg(grid, &stop)?;
    let path = ensure_extension(path.as_ref());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, &encoded)?;
    Ok(path)
}

/// Read `path` and decode its contents into a [`Grid`].
///
/// The path is consumed as-is; no extension is appended on the read side.
pub fn read_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<Grid, LimgError> {
    let data = fs::read(path)?;
    decode_limg(&data, None, &stop)
}

/// Append `.limg` unless the path already ends in it. A different existing
/// extension is kept and suffixed, not replaced: `frame.raw` becomes
/// `frame.raw.limg`.
fn ensure_extension(path: &Path) -> PathBuf {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
    {
        return path.to_path_buf();
    }
    let mut os = path.as_os_str().to_os_string();
    os.push(".");
    os.push(FILE_EXTENSION);
    PathBuf::from(os)
}
