//! Brute-force breaker: tries every non-identity shift on one ciphertext
//! and hands the candidates to a [`Store`].

use crate::candidates::{CandidateSet, KEY_SPACE};
use crate::error::StoreError;
use crate::store::{FileStore, Store};
use crate::translator::decode;
use std::io::{self, Write};
use std::path::PathBuf;

/// What happened to the candidate record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Failed,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Owns one ciphertext for exactly one decrypt pass.
///
/// Notices meant for the person reviewing the output are written to `out`
/// (stdout unless another writer is supplied).
pub struct Breaker<S = FileStore, W = io::Stdout> {
    ciphertext: String,
    store: S,
    out: W,
}

impl Breaker {
    /// Breaker that saves to [`DEFAULT_OUTPUT_PATH`](crate::store::DEFAULT_OUTPUT_PATH)
    /// and reports on stdout
    pub fn new(ciphertext: impl Into<String>) -> Self {
        Self::with_store(ciphertext, FileStore::default(), io::stdout())
    }
}

impl<S: Store, W: Write> Breaker<S, W> {
    pub fn with_store(ciphertext: impl Into<String>, store: S, out: W) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            store,
            out,
        }
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Builds every candidate and saves them. Consumes the breaker.
    pub fn decrypt(mut self) -> SaveOutcome {
        let candidates = self.create_decrypted_messages();
        self.save_decrypted_messages(&candidates)
    }

    /// Decodes the ciphertext under every key in [`KEY_SPACE`]
    pub fn create_decrypted_messages(&self) -> CandidateSet {
        let candidates: CandidateSet = KEY_SPACE
            .map(|key| (key, decode(&self.ciphertext, key.into())))
            .collect();

        log::debug!(
            "built {} candidates for a {}-char ciphertext",
            candidates.len(),
            self.ciphertext.chars().count()
        );

        candidates
    }

    /// Saves `candidates` through the store. A store failure is reported to
    /// `out` and swallowed here; it never reaches the caller.
    pub fn save_decrypted_messages(&mut self, candidates: &CandidateSet) -> SaveOutcome {
        match self.store.save(candidates) {
            Ok(()) => {
                if let Err(e) = self.store.display_file_location(&mut self.out) {
                    log::warn!("could not report file location: {}", e);
                }
                SaveOutcome::Saved(self.store.location().to_path_buf())
            }
            Err(err @ StoreError::DestinationUnavailable { .. }) => {
                log::warn!("candidate record not saved: {}", err);
                self.report_failure(&err);
                SaveOutcome::Failed
            }
        }
    }

    fn report_failure(&mut self, err: &StoreError) {
        let written = writeln!(
            self.out,
            "[error] Error while saving the candidates for \"{}\".",
            self.ciphertext
        )
        .and_then(|_| writeln!(self.out, "[error] The file could not be saved: {}", err));

        if let Err(e) = written {
            log::warn!("could not write failure notice: {}", e);
        }
    }
}
