use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::adjacency::is_adjacent_chars;
use super::Dictionary;
use crate::error::LadderError;

/// How the neighbors of a word are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborStrategy {
    /// Test every dictionary word for adjacency
    Scan,
    /// Build every one-edit variant and look each up
    #[default]
    Generate,
}

impl std::str::FromStr for NeighborStrategy {
    type Err = LadderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan" => Ok(NeighborStrategy::Scan),
            "generate" => Ok(NeighborStrategy::Generate),
            other => Err(LadderError::invalid_value(
                "neighbor strategy",
                format!("{} (expected: scan, generate)", other),
            )),
        }
    }
}

impl fmt::Display for NeighborStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborStrategy::Scan => write!(f, "scan"),
            NeighborStrategy::Generate => write!(f, "generate"),
        }
    }
}

/// Every dictionary word one edit away from `word`, in lexicographic order.
///
/// `word` itself is never included. Both strategies return the same set:
/// variants are generated over the dictionary's own alphabet, so no
/// member can be missed.
pub fn neighbors(word: &str, dict: &Dictionary, strategy: NeighborStrategy) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    match strategy {
        NeighborStrategy::Scan => scan_neighbors(&chars, dict),
        NeighborStrategy::Generate => generate_neighbors(&chars, dict),
    }
}

fn scan_neighbors(word: &[char], dict: &Dictionary) -> BTreeSet<String> {
    dict.iter()
        .filter(|candidate| {
            let candidate: Vec<char> = candidate.chars().collect();
            is_adjacent_chars(word, &candidate)
        })
        .map(str::to_string)
        .collect()
}

fn generate_neighbors(word: &[char], dict: &Dictionary) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut keep = |variant: String| {
        if dict.contains(&variant) {
            found.insert(variant);
        }
    };

    // Substitutions
    for (i, &original) in word.iter().enumerate() {
        for &c in dict.alphabet() {
            if c != original {
                let mut variant = word.to_vec();
                variant[i] = c;
                keep(variant.into_iter().collect());
            }
        }
    }

    // Insertions, one per gap including both ends
    for i in 0..=word.len() {
        for &c in dict.alphabet() {
            let mut variant = word.to_vec();
            variant.insert(i, c);
            keep(variant.into_iter().collect());
        }
    }

    // Deletions
    for i in 0..word.len() {
        let mut variant = word.to_vec();
        variant.remove(i);
        keep(variant.into_iter().collect());
    }

    found
}
