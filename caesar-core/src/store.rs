//! Persists candidate sets as pretty-printed JSON for human review

use crate::candidates::CandidateSet;
use crate::error::StoreError;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where the candidates land when no other path is configured
pub const DEFAULT_OUTPUT_PATH: &str = "decrypted_messages.json";

/// Durable destination for a candidate set
pub trait Store {
    /// Writes the whole candidate set, replacing any earlier record
    fn save(&self, candidates: &CandidateSet) -> Result<(), StoreError>;

    /// Tells the reader where the record was written.
    /// Only meaningful after a successful `save`.
    fn display_file_location(&self, out: &mut dyn Write) -> io::Result<()>;

    fn location(&self) -> &Path;
}

impl<S: Store + ?Sized> Store for &S {
    fn save(&self, candidates: &CandidateSet) -> Result<(), StoreError> {
        (**self).save(candidates)
    }

    fn display_file_location(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).display_file_location(out)
    }

    fn location(&self) -> &Path {
        (**self).location()
    }
}

/// Store backed by a single file at a fixed path.
///
/// The parent directory must already exist; it is never created here.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads a previously saved record back
    pub fn load(&self) -> Result<CandidateSet, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::destination_unavailable(&self.path, e))?;

        serde_json::from_str(&raw)
            .map_err(|e| StoreError::destination_unavailable(&self.path, e.into()))
    }

    /// Directory the record is staged in before the final rename
    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl Store for FileStore {
    fn save(&self, candidates: &CandidateSet) -> Result<(), StoreError> {
        let unavailable = |e: io::Error| StoreError::destination_unavailable(&self.path, e);

        // Staged under a unique name; dropped (and deleted) on every error path
        let mut staging = NamedTempFile::new_in(self.staging_dir()).map_err(unavailable)?;
        write_record(staging.as_file_mut(), candidates).map_err(unavailable)?;
        staging
            .persist(&self.path)
            .map_err(|e| unavailable(e.error))?;

        log::info!(
            "saved {} candidates to {}",
            candidates.len(),
            self.path.display()
        );

        Ok(())
    }

    fn display_file_location(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[ok] Your file is located in {}", self.path.display())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Serializes `candidates` into `file` and syncs it to disk
fn write_record(file: &mut File, candidates: &CandidateSet) -> io::Result<()> {
    let mut writer = BufWriter::new(&mut *file);

    serde_json::to_writer_pretty(&mut writer, candidates)?;
    writer.write_all(b"\n")?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
