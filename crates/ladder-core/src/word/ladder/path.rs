//! Ladder reconstruction from breadth-first predecessor links

use std::collections::HashMap;

/// Walk predecessor links from `end` back to `begin`, then reverse.
///
/// Every word reached by the search except `begin` has a predecessor, so
/// the walk always terminates at `begin`.
pub fn reconstruct_ladder(
    begin: &str,
    end: &str,
    predecessors: &HashMap<String, String>,
) -> Vec<String> {
    let mut words = vec![end.to_string()];
    let mut current = end;

    while current != begin {
        match predecessors.get(current) {
            Some(pred) => {
                words.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    words.reverse();
    words
}
