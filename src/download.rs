//! PDF download persistence
//!
//! Writes exported PDF bytes through a named temporary file in the
//! target directory, then persists it under the fixed download name.
//! The temporary handle is consumed by the persist, so no stray file is
//! left behind on either path.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name offered for every exported itinerary
pub const PDF_FILENAME: &str = "Itinerary.pdf";

/// Save PDF bytes into `dir` as [`PDF_FILENAME`] and return the final path.
pub fn save_pdf(bytes: &[u8], dir: &Path) -> Result<PathBuf> {
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| "Failed to write PDF bytes")?;

    let target = dir.join(PDF_FILENAME);
    tmp.persist(&target)
        .with_context(|| format!("Failed to persist {}", target.display()))?;

    Ok(target)
}
