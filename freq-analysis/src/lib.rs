//! # Frequency Analysis Library
//!
//! This library implements letter-frequency statistics and monoalphabetic
//! substitution ciphers over 26-letter English text.
//!
//! ## Components
//!
//! - **Analysis** - per-letter frequency tables over text corpora, weighted
//!   aggregation across corpora, JSON persistence of the reference table
//! - **Cipher** - uniformly random substitution ciphers with case-preserving
//!   application
//! - **Inference** - best-effort recovery of a decryption mapping by matching
//!   ciphertext frequencies against a reference distribution
//!
//! ## Usage
//!
//! ```rust
//! use freq_analysis::{analyze_text, DecryptionGuess, SubstitutionCipher};
//!
//! let plaintext = "The quick brown fox jumps over the lazy dog";
//! let cipher = SubstitutionCipher::random(&mut rand::rng());
//! let ciphertext = cipher.apply(plaintext);
//!
//! // With the plaintext's own distribution as reference, nearest-frequency
//! // matching recovers a best-effort decryption mapping.
//! let reference = analyze_text(plaintext)?.table;
//! let observed = analyze_text(&ciphertext)?.table;
//! let guess = DecryptionGuess::infer(&reference, &observed);
//! let recovered = guess.apply(&ciphertext);
//! # Ok::<(), freq_analysis::FrequencyError>(())
//! ```
//!
//! ## Limitations
//!
//! Inference is single-pass nearest-frequency matching only. The guessed
//! mapping is not forced to be a bijection, there is no candidate ranking,
//! and no bigram/trigram or hill-climbing refinement is performed.

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod error;

// Re-exports for easy access
pub use alphabet::{Letter, LetterMap, ALPHABET_LEN};
pub use analysis::{
    aggregate, analyze_file, analyze_reader, analyze_text, CorpusStats, FrequencyTable,
};
pub use cipher::{substitute, DecryptionGuess, SubstitutionCipher};
pub use error::{FrequencyError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
