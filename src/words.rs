//! Word-frequency workload over any `OrderedMap`.

use crate::error::{Error, Result};
use crate::map::OrderedMap;
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::Path;

/// Words whose frequencies are included in every `Report`.
pub const REPORTED_WORDS: [&str; 2] = ["tale", "you"];

/// Splits text into lowercase words. A word is a maximal run of alphabetic characters; every
/// other character separates words.
///
/// # Examples
///
/// ```
/// use bst_maps::words::tokenize;
///
/// assert_eq!(tokenize("It was the best of times,it was"), vec![
///     "it", "was", "the", "best", "of", "times", "it", "was",
/// ]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

/// Reads a file and tokenizes its contents.
pub fn read_words<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = tokenize(&text);
    info!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Counts the occurrences of every word into `map`. Existing counts are bumped with `set` and new
/// words are added with a count of one.
///
/// # Examples
///
/// ```
/// use bst_maps::avl_tree::AvlMap;
/// use bst_maps::words::{tokenize, word_frequencies};
///
/// let mut map: AvlMap<String, usize> = AvlMap::new();
/// word_frequencies(&tokenize("the cat and the hat"), &mut map).unwrap();
/// assert_eq!(map.get("the"), Some(&2));
/// assert_eq!(map.len(), 4);
/// ```
pub fn word_frequencies<M>(words: &[String], map: &mut M) -> Result<()>
where
    M: OrderedMap<String, usize>,
{
    for word in words {
        if map.contains_key(word) {
            let count = map.get(word).cloned().ok_or(Error::KeyNotFound)?;
            map.set(word, count + 1).map_err(|err| {
                warn!("failed to update the count of {:?}: {}", word, err);
                err
            })?;
        } else {
            map.insert(word.clone(), 1);
        }
    }
    debug!("counted {} distinct words", map.len());
    Ok(())
}

/// Summary of a word-frequency map.
#[derive(Debug, PartialEq)]
pub struct Report {
    pub total_words: usize,
    pub distinct_words: usize,
    pub frequencies: Vec<(String, Option<usize>)>,
    pub is_bst: Option<bool>,
    pub is_balanced: Option<bool>,
}

impl Report {
    pub fn new<M>(words: &[String], map: &M) -> Self
    where
        M: OrderedMap<String, usize>,
    {
        let frequencies = REPORTED_WORDS
            .iter()
            .map(|word| {
                let word = word.to_string();
                let count = map.get(&word).cloned();
                (word, count)
            })
            .collect();
        Report {
            total_words: words.len(),
            distinct_words: map.len(),
            frequencies,
            is_bst: None,
            is_balanced: None,
        }
    }

    pub fn with_is_bst(mut self, is_bst: bool) -> Self {
        self.is_bst = Some(is_bst);
        self
    }

    pub fn with_is_balanced(mut self, is_balanced: bool) -> Self {
        self.is_balanced = Some(is_balanced);
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total words: {}", self.total_words)?;
        write!(f, "Total different words: {}", self.distinct_words)?;
        for (word, count) in &self.frequencies {
            match count {
                Some(count) => write!(f, "\nFrequency of {}: {}", word, count)?,
                None => write!(f, "\nFrequency of {}: none", word)?,
            }
        }
        if let Some(is_bst) = self.is_bst {
            write!(f, "\nis BST: {}", is_bst)?;
        }
        if let Some(is_balanced) = self.is_balanced {
            write!(f, "\nis Balanced: {}", is_balanced)?;
        }
        Ok(())
    }
}
