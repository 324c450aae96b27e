mod path;

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use serde::Serialize;

use super::adjacency::is_adjacent;
use super::neighbors::{neighbors, NeighborStrategy};
use super::Dictionary;
use crate::error::{LadderError, Result};
use crate::trace_time;

/// Options for word ladder search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LadderOptions {
    /// How neighbors are enumerated
    pub strategy: NeighborStrategy,
    /// Do not look for ladders longer than this many steps
    pub max_steps: Option<usize>,
}

/// A sequence of words from a begin word to an end word.
///
/// Consecutive words are one edit apart and no word repeats. A ladder
/// always holds at least two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    /// Check `words` against `dict` and wrap them as a ladder.
    pub fn from_words(words: Vec<String>, dict: &Dictionary) -> Result<Self> {
        verify_ladder(&words, dict)?;
        Ok(Ladder { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of words, both ends included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of edits, one less than the word count
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn begin(&self) -> &str {
        self.words.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.words.last().map(String::as_str).unwrap_or_default()
    }
}

/// Find the shortest ladder from `begin` to `end` with default options.
pub fn generate_word_ladder(begin: &str, end: &str, dict: &Dictionary) -> Result<Ladder> {
    generate_word_ladder_with(begin, end, dict, &LadderOptions::default())
}

/// Find the shortest ladder from `begin` to `end`.
///
/// Breadth-first search over dictionary words, starting from `begin`
/// (which does not have to be in the dictionary). Words are marked
/// visited as they are queued and neighbors are taken in lexicographic
/// order, so the ladder returned is the first shortest one in that order.
#[tracing::instrument(skip(dict, opts), fields(begin = %begin, end = %end, strategy = %opts.strategy, max_steps = ?opts.max_steps, dictionary = dict.len()))]
pub fn generate_word_ladder_with(
    begin: &str,
    end: &str,
    dict: &Dictionary,
    opts: &LadderOptions,
) -> Result<Ladder> {
    if begin == end {
        return Err(LadderError::degenerate(begin));
    }
    if !dict.contains(end) {
        return Err(LadderError::invalid_target(begin, end));
    }
    if begin.chars().count().abs_diff(end.chars().count()) > 1 {
        return Err(LadderError::incompatible_length(begin, end));
    }

    let start = Instant::now();
    let mut visited: HashSet<String> = HashSet::new();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();

    visited.insert(begin.to_string());
    queue.push_back((begin.to_string(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if opts.max_steps.is_some_and(|max| depth >= max) {
            continue;
        }

        tracing::trace!(word = %current, depth, "expand");

        for neighbor in neighbors(&current, dict, opts.strategy) {
            if !visited.insert(neighbor.clone()) {
                continue;
            }
            predecessors.insert(neighbor.clone(), current.clone());

            if neighbor == end {
                let words = path::reconstruct_ladder(begin, end, &predecessors);
                trace_time!(start, "ladder_search", visited = visited.len());
                tracing::debug!(
                    steps = words.len() - 1,
                    visited = visited.len(),
                    "ladder found"
                );
                return Ok(Ladder { words });
            }

            queue.push_back((neighbor, depth + 1));
        }
    }

    trace_time!(start, "ladder_search", visited = visited.len());
    tracing::debug!(visited = visited.len(), "frontier exhausted");
    Err(LadderError::no_path(begin, end))
}

/// Check that `words` form a valid ladder over `dict`.
///
/// At least two words, no repeats, every word after the first is in the
/// dictionary, and consecutive words are adjacent.
pub fn verify_ladder<S: AsRef<str>>(words: &[S], dict: &Dictionary) -> Result<()> {
    if words.len() < 2 {
        return Err(LadderError::invalid_ladder(
            words.len(),
            "a ladder needs at least two words",
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref();

        if !seen.insert(word) {
            return Err(LadderError::invalid_ladder(
                index,
                format!("{} appears more than once", word),
            ));
        }

        if index > 0 {
            if !dict.contains(word) {
                return Err(LadderError::invalid_ladder(
                    index,
                    format!("{} is not in the dictionary", word),
                ));
            }

            let prev = words[index - 1].as_ref();
            if !is_adjacent(prev, word) {
                return Err(LadderError::invalid_ladder(
                    index,
                    format!("{} is not one edit away from {}", word, prev),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
