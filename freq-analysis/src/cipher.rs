//! Monoalphabetic substitution ciphers and guessed decryption mappings

use rand::Rng;

use crate::alphabet::{Letter, LetterMap, ALPHABET_LEN};
use crate::analysis::FrequencyTable;
use crate::error::{FrequencyError, Result};

/// Applies `mapping` to every recognized letter of `text`.
///
/// The entry is looked up under case folding and the substituted letter
/// takes the case of the original, so uppercase input yields uppercase
/// output. Every unmapped character (digits, punctuation, whitespace,
/// non-Latin letters) passes through unchanged.
pub fn substitute(text: &str, mapping: &LetterMap<Letter>) -> String {
    text.chars()
        .map(|c| match Letter::from_char(c) {
            Some(letter) => {
                let substituted = mapping[letter].as_char();
                if c.is_ascii_uppercase() {
                    substituted.to_ascii_uppercase()
                } else {
                    substituted
                }
            }
            None => c,
        })
        .collect()
}

/// A bijective letter-for-letter replacement scheme.
///
/// Construction guarantees the permutation invariant: every letter occurs
/// exactly once as a source and exactly once as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionCipher {
    forward: LetterMap<Letter>,
}

impl SubstitutionCipher {
    /// Draws a uniformly random permutation of the alphabet.
    ///
    /// Targets are assigned to a..z in order by removing a uniformly random
    /// element from the pool of still-unused letters, so each of the 26!
    /// permutations is equally likely.
    pub fn random<R: Rng>(rng: &mut R) -> SubstitutionCipher {
        let mut pool: Vec<Letter> = Letter::ALL.to_vec();
        let forward = LetterMap::from_fn(|_| {
            let index = rng.random_range(0..pool.len());
            pool.remove(index)
        });
        SubstitutionCipher { forward }
    }

    /// Builds a cipher from explicit (source, target) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FrequencyError::NotBijective`] unless every letter occurs
    /// exactly once on each side.
    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Result<SubstitutionCipher> {
        if pairs.len() != ALPHABET_LEN {
            return Err(FrequencyError::NotBijective);
        }

        let mut seen_source = [false; ALPHABET_LEN];
        let mut seen_target = [false; ALPHABET_LEN];
        let mut forward = LetterMap::from_fn(|letter| letter);
        for &(source, target) in pairs {
            if seen_source[source.index()] || seen_target[target.index()] {
                return Err(FrequencyError::NotBijective);
            }
            seen_source[source.index()] = true;
            seen_target[target.index()] = true;
            forward[source] = target;
        }

        Ok(SubstitutionCipher { forward })
    }

    /// Substitution target for one letter.
    pub fn target(&self, source: Letter) -> Letter {
        self.forward[source]
    }

    /// The exact inverse cipher.
    pub fn inverse(&self) -> SubstitutionCipher {
        let mut backward = LetterMap::from_fn(|letter| letter);
        for (source, &target) in self.forward.iter() {
            backward[target] = source;
        }
        SubstitutionCipher { forward: backward }
    }

    /// Encrypts `text` (or decrypts it, for an inverse cipher).
    pub fn apply(&self, text: &str) -> String {
        substitute(text, &self.forward)
    }

    /// Read-only view of the underlying mapping.
    pub fn mapping(&self) -> &LetterMap<Letter> {
        &self.forward
    }
}

/// A decryption mapping guessed by nearest-frequency matching.
///
/// Unlike [`SubstitutionCipher`] this is not necessarily a bijection: two
/// ciphertext letters whose observed frequencies are both closest to the
/// same reference letter collide on that letter, and the collision is
/// neither detected nor reported. Decryption accuracy degrades silently in
/// that case; no refinement pass exists to repair it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptionGuess {
    mapping: LetterMap<Letter>,
}

impl DecryptionGuess {
    /// Matches every ciphertext letter against the reference distribution.
    ///
    /// For each letter in alphabetical order the reference letter with the
    /// smallest absolute frequency difference is selected. Ties go to the
    /// alphabetically first reference letter, following the reference
    /// table's sorted iteration order.
    pub fn infer(reference: &FrequencyTable, observed: &FrequencyTable) -> DecryptionGuess {
        let mapping = LetterMap::from_fn(|ciphertext_letter| {
            let observed_frequency = observed.get(ciphertext_letter);

            let mut best = Letter::ALL[0];
            let mut best_distance = f64::INFINITY;
            for (candidate, reference_frequency) in reference.iter() {
                let distance = (reference_frequency - observed_frequency).abs();
                if distance < best_distance {
                    best_distance = distance;
                    best = candidate;
                }
            }
            best
        });

        DecryptionGuess { mapping }
    }

    /// Guessed plaintext letter for one ciphertext letter.
    pub fn target(&self, ciphertext_letter: Letter) -> Letter {
        self.mapping[ciphertext_letter]
    }

    /// Applies the guessed mapping to `text`.
    pub fn apply(&self, text: &str) -> String {
        substitute(text, &self.mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_text;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    /// Permutation swapping a/x, b/y and c/z, fixing every other letter.
    fn swap_cipher() -> SubstitutionCipher {
        let pairs: Vec<(Letter, Letter)> = Letter::ALL
            .iter()
            .map(|&source| {
                let target = match source.as_char() {
                    'a' => 'x',
                    'b' => 'y',
                    'c' => 'z',
                    'x' => 'a',
                    'y' => 'b',
                    'z' => 'c',
                    other => other,
                };
                (source, letter(target))
            })
            .collect();
        SubstitutionCipher::from_pairs(&pairs).unwrap()
    }

    #[test]
    fn test_random_cipher_is_a_bijection() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cipher = SubstitutionCipher::random(&mut rng);

            let mut seen = [false; ALPHABET_LEN];
            for source in Letter::ALL {
                let target = cipher.target(source);
                assert!(!seen[target.index()], "target {target} assigned twice");
                seen[target.index()] = true;
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let cipher = SubstitutionCipher::random(&mut rng);
        let text = "Attack at dawn! Bring 12 torches.";
        assert_eq!(cipher.inverse().apply(&cipher.apply(text)), text);
    }

    #[test]
    fn test_case_preservation() {
        let cipher = swap_cipher();
        assert_eq!(cipher.apply("Abc"), "Xyz");
        assert_eq!(cipher.apply("aBC"), "xYZ");
    }

    #[test]
    fn test_non_letters_pass_through() {
        let cipher = swap_cipher();
        assert_eq!(cipher.apply("123 ,.;\t"), "123 ,.;\t");
        // 'Ä' is outside the alphabet; r, g, e are fixed points of the swap
        assert_eq!(cipher.apply("Ärger?"), "Ärger?");
    }

    #[test]
    fn test_from_pairs_rejects_collisions() {
        let mut pairs: Vec<(Letter, Letter)> =
            Letter::ALL.iter().map(|&l| (l, l)).collect();
        // Both a and b now target a
        pairs[1].1 = letter('a');
        assert!(matches!(
            SubstitutionCipher::from_pairs(&pairs),
            Err(FrequencyError::NotBijective)
        ));

        let too_short = [(letter('a'), letter('b'))];
        assert!(matches!(
            SubstitutionCipher::from_pairs(&too_short),
            Err(FrequencyError::NotBijective)
        ));
    }

    #[test]
    fn test_infer_picks_nearest_frequency() {
        let reference = analyze_text("aabbbccccc").unwrap().table;
        let observed = analyze_text("xxyyyzzzzz").unwrap().table;
        let guess = DecryptionGuess::infer(&reference, &observed);

        assert_eq!(guess.target(letter('x')), letter('a'));
        assert_eq!(guess.target(letter('y')), letter('b'));
        assert_eq!(guess.target(letter('z')), letter('c'));
    }
}
