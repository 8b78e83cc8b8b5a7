//! Approximate substring matching.
//!
//! A query is compared against every window of a field value at once using
//! the Sellers variant of the edit-distance DP: the first row is all zeros,
//! so an alignment may begin anywhere in the field, and the answer is the
//! minimum over the last row, so it may end anywhere too. Adjacent
//! transpositions cost one edit (optimal string alignment), which keeps
//! swapped-letter typos like "mpas" for "maps" cheap.

/// Fewest edits turning `pattern` into some substring of `text`.
///
/// Edits are insertions, deletions, substitutions and transpositions of two
/// adjacent characters. An exact occurrence anywhere in `text` yields `0`;
/// the result never exceeds `pattern.len()` (matching the empty window).
pub fn substring_edit_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    if m == 0 {
        return 0;
    }

    // Columns walk the text; row `i` holds the cost of aligning pattern[..i].
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut before_prev = prev.clone();
    let mut best = m;

    for j in 1..=text.len() {
        let mut curr = vec![0usize; m + 1];
        for i in 1..=m {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            let mut cell = (prev[i - 1] + cost)
                .min(prev[i] + 1)
                .min(curr[i - 1] + 1);

            if i > 1 && j > 1 && pattern[i - 1] == text[j - 2] && pattern[i - 2] == text[j - 1] {
                cell = cell.min(before_prev[i - 2] + 1);
            }
            curr[i] = cell;
        }

        best = best.min(curr[m]);
        if best == 0 {
            return 0;
        }
        before_prev = std::mem::replace(&mut prev, curr);
    }

    best
}

/// Normalized distance between a query and one field, both pre-normalized.
///
/// Returns `None` for an empty field or query: such a pair carries no match
/// signal and must not take part in aggregation. Otherwise the edit count is
/// divided by the query length, giving `0.0` for a literal occurrence and
/// `1.0` when nothing lines up.
pub fn field_distance(query: &[char], field: &[char]) -> Option<f64> {
    if query.is_empty() || field.is_empty() {
        return None;
    }

    let edits = substring_edit_distance(query, field);
    Some((edits as f64 / query.len() as f64).min(1.0))
}
