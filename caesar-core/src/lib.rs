//! core functionality for breaking Caesar ciphers
//! by brute force over every shift key
//!
//! # Modules
//!
//! - `translator`: the shift transform (encode/decode)
//! - `candidates`: the 25-entry candidate set
//! - `breaker`: drives the translator over the key space
//! - `store`: persists candidates for review
//! - `error`: persistence error type

pub mod breaker;
pub mod candidates;
pub mod error;
pub mod store;
pub mod translator;

// Re-export commonly used items
pub use breaker::{Breaker, SaveOutcome};
pub use candidates::{CandidateSet, KEY_SPACE};
pub use error::StoreError;
pub use store::{DEFAULT_OUTPUT_PATH, FileStore, Store};
pub use translator::{ALPHABET_LEN, Direction, decode, encode, shift_letter, translate};
