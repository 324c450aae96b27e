//! Word ladder search
//!
//! Provides the pieces of the word ladder engine:
//! - One-edit adjacency between words
//! - The dictionary the ladder is built from
//! - Neighbor enumeration (dictionary scan or variant generation)
//! - Breadth-first shortest ladder search and ladder verification

pub mod adjacency;
pub mod dictionary;
pub mod ladder;
pub mod neighbors;

pub use adjacency::{edit_distance_within, is_adjacent};
pub use dictionary::Dictionary;
pub use ladder::{
    generate_word_ladder, generate_word_ladder_with, verify_ladder, Ladder, LadderOptions,
};
pub use neighbors::{neighbors, NeighborStrategy};
