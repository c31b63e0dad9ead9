//! Writing encoded images to disk or any writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::store::Dimensions;

/// Download name the editor proposes for an image of `dimensions`.
pub fn suggested_file_name(dimensions: Dimensions) -> String {
    format!("ANIM_{}x{}.BIN", dimensions.rows(), dimensions.cols())
}

/// Export failures.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes raw image bytes. No header or trailer is added.
///
/// Usage:
/// ```ignore
/// let bytes = encode(store.animation(), OutputMode::eeprom());
/// let stats = Exporter::save_in(".", store.dimensions(), &bytes)?;
/// println!("{stats}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter;

impl Exporter {
    /// Write `bytes` to `writer` and flush.
    pub fn write_to<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
        writer.write_all(bytes)?;
        writer.flush()
    }

    /// Create (or truncate) `path` and write `bytes` into it.
    pub fn save<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<ExportStats, ExportError> {
        let path = path.as_ref();
        let io_err = |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(&mut writer, bytes).map_err(io_err)?;

        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(ExportStats {
            path: path.to_path_buf(),
            bytes_written: bytes.len(),
        })
    }

    /// Save under [`suggested_file_name`] inside `dir`.
    pub fn save_in<P: AsRef<Path>>(
        dir: P,
        dimensions: Dimensions,
        bytes: &[u8],
    ) -> Result<ExportStats, ExportError> {
        Self::save(dir.as_ref().join(suggested_file_name(dimensions)), bytes)
    }
}

/// Result of a file export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStats {
    /// File that was written.
    pub path: PathBuf,
    /// Bytes written (the full image).
    pub bytes_written: usize,
}

impl std::fmt::Display for ExportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes written to {}", self.bytes_written, self.path.display())
    }
}
