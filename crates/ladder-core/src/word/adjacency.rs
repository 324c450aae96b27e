//! One-edit adjacency between words
//!
//! Two words are adjacent when exactly one substitution, insertion or
//! deletion turns one into the other. A word is never adjacent to itself.

/// Whether `a` and `b` are one edit apart.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    if a == b {
        return false;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    is_adjacent_chars(&a, &b)
}

/// Same as [`is_adjacent`] for words already split into characters.
pub(crate) fn is_adjacent_chars(a: &[char], b: &[char]) -> bool {
    match a.len().abs_diff(b.len()) {
        0 => differs_at_one_position(a, b),
        1 => {
            let (shorter, longer) = if a.len() < b.len() { (a, b) } else { (b, a) };
            is_single_insertion(shorter, longer)
        }
        _ => false,
    }
}

/// Equal-length words with a Hamming distance of exactly one.
fn differs_at_one_position(a: &[char], b: &[char]) -> bool {
    let mut differences = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

/// Two-pointer scan: `longer` is `shorter` with one extra character.
///
/// A mismatch advances only the `longer` cursor and uses up the single
/// allowed skip. Running off the end of `longer` before `shorter` is
/// consumed means a second edit would be needed. When no mismatch was
/// seen the extra character is the trailing one.
fn is_single_insertion(shorter: &[char], longer: &[char]) -> bool {
    debug_assert_eq!(shorter.len() + 1, longer.len());

    let (mut i, mut j) = (0, 0);
    let mut skipped = false;

    while i < shorter.len() && j < longer.len() {
        if shorter[i] == longer[j] {
            i += 1;
            j += 1;
        } else {
            if skipped {
                return false;
            }
            skipped = true;
            j += 1;
        }
    }

    i == shorter.len()
}

/// Whether the Levenshtein distance between `a` and `b` is at most `d`.
///
/// Row-by-row dynamic programming that stops as soon as every cell of a
/// row exceeds `d`.
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > d {
        return false;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
            row_min = row_min.min(curr[j + 1]);
        }

        if row_min > d {
            return false;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()] <= d
}
