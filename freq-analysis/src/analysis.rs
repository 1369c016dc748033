//! Letter-frequency statistics over text corpora

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::alphabet::{Letter, LetterMap, ALPHABET_LEN};
use crate::error::{FrequencyError, Result};

/// Probability of each letter in a corpus.
///
/// Values sum to 1.0 (within floating-point tolerance) whenever the table
/// was derived from a non-empty corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable(LetterMap<f64>);

impl FrequencyTable {
    /// Frequency of a single letter.
    pub fn get(&self, letter: Letter) -> f64 {
        self.0[letter]
    }

    /// Entries in alphabetical key order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, f64)> + '_ {
        self.0.iter().map(|(letter, &frequency)| (letter, frequency))
    }

    /// Normalizes raw counts into probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`FrequencyError::EmptyCorpus`] when `total` is zero.
    fn from_counts(counts: &LetterMap<u64>, total: u64) -> Result<FrequencyTable> {
        if total == 0 {
            return Err(FrequencyError::EmptyCorpus);
        }
        Ok(FrequencyTable(LetterMap::from_fn(|letter| {
            counts[letter] as f64 / total as f64
        })))
    }

    /// Renders the table as pretty-printed JSON with keys in sorted order.
    ///
    /// The key order and indentation are stable, so the serialized form is
    /// reproducible byte-for-byte for the same table.
    pub fn to_json(&self) -> Result<String> {
        let sorted: BTreeMap<String, f64> = self
            .iter()
            .map(|(letter, frequency)| (letter.to_string(), frequency))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Parses a table previously rendered by [`FrequencyTable::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`FrequencyError::MalformedTable`] unless the record maps
    /// exactly the 26 lowercase letters to numbers.
    pub fn from_json(json: &str) -> Result<FrequencyTable> {
        let raw: BTreeMap<String, f64> = serde_json::from_str(json)?;
        if raw.len() != ALPHABET_LEN {
            return Err(FrequencyError::MalformedTable(format!(
                "expected {} letter keys, found {}",
                ALPHABET_LEN,
                raw.len()
            )));
        }

        let mut values: LetterMap<f64> = LetterMap::default();
        for (key, &frequency) in &raw {
            let mut chars = key.chars();
            let letter = chars
                .next()
                .filter(|c| chars.next().is_none() && c.is_ascii_lowercase())
                .and_then(Letter::from_char)
                .ok_or_else(|| {
                    FrequencyError::MalformedTable(format!("invalid letter key {key:?}"))
                })?;
            values[letter] = frequency;
        }
        Ok(FrequencyTable(values))
    }

    /// Persists the table as the reference distribution file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Loads a table previously written by [`FrequencyTable::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<FrequencyTable> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Frequency table of one corpus together with its total letter count.
///
/// The count serves as the corpus weight in [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusStats {
    pub table: FrequencyTable,
    pub letter_count: u64,
}

/// Counts case-folded letters over `text` and normalizes to probabilities.
///
/// Every character outside the 26 ASCII letters is dropped silently; this
/// is text-processing policy, not a failure.
///
/// # Errors
///
/// Returns [`FrequencyError::EmptyCorpus`] if no letter was counted.
pub fn analyze_text(text: &str) -> Result<CorpusStats> {
    let mut counts: LetterMap<u64> = LetterMap::default();
    let mut letter_count: u64 = 0;

    for c in text.chars() {
        if let Some(letter) = Letter::from_char(c) {
            counts[letter] += 1;
            letter_count += 1;
        }
    }

    Ok(CorpusStats {
        table: FrequencyTable::from_counts(&counts, letter_count)?,
        letter_count,
    })
}

/// Line-by-line streaming variant of [`analyze_text`].
pub fn analyze_reader(reader: impl BufRead) -> Result<CorpusStats> {
    let mut counts: LetterMap<u64> = LetterMap::default();
    let mut letter_count: u64 = 0;

    for line in reader.lines() {
        for c in line?.chars() {
            if let Some(letter) = Letter::from_char(c) {
                counts[letter] += 1;
                letter_count += 1;
            }
        }
    }

    Ok(CorpusStats {
        table: FrequencyTable::from_counts(&counts, letter_count)?,
        letter_count,
    })
}

/// Opens `path` and analyzes its content line by line.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<CorpusStats> {
    let file = File::open(path)?;
    analyze_reader(BufReader::new(file))
}

/// Combines several corpora into one reference table.
///
/// Each corpus contributes in proportion to its share of the combined
/// letter count, so the averaged table still sums to 1.0.
///
/// # Errors
///
/// Returns [`FrequencyError::EmptyCorpus`] when `corpora` is empty or the
/// combined letter count is zero.
pub fn aggregate(corpora: &[CorpusStats]) -> Result<FrequencyTable> {
    let combined: u64 = corpora.iter().map(|stats| stats.letter_count).sum();
    if combined == 0 {
        return Err(FrequencyError::EmptyCorpus);
    }

    let mut averaged: LetterMap<f64> = LetterMap::default();
    for stats in corpora {
        let weight = stats.letter_count as f64 / combined as f64;
        for (letter, frequency) in stats.table.iter() {
            averaged[letter] += frequency * weight;
        }
    }

    Ok(FrequencyTable(averaged))
}
