// SPDX-License-Identifier: MIT
// Levenshtein distance over UTF-16 code units.

mod band;
mod buffer;
mod trim;

use buffer::with_workspace;
use trim::trim_common_affixes;

/// Levenshtein edit distance between two sequences of UTF-16 code units: the
/// minimum number of single-unit insertions, deletions, and substitutions
/// transforming one into the other.
///
/// Shared affixes are stripped before the quadratic sweep, so near-identical
/// inputs cost little more than a comparison. Accepts any lengths, including
/// empty; never fails.
pub fn levenshtein_units(a: &[u16], b: &[u16]) -> usize {
    if a == b {
        return 0;
    }
    // The row buffer is sized to the shorter sequence.
    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let (offset, la, lb) = trim_common_affixes(a, b);

    // Nothing left of `a`: every retained unit of `b` is an insertion.
    //
    // Below three retained units of `b` the distance is also exactly `lb`:
    // trimming guarantees the first and last retained units disagree, which
    // rules out every cheaper alignment for the (1,1), (1,2) and (2,2)
    // length combinations (`la <= lb` here).
    if la == 0 || lb < 3 {
        return lb;
    }

    with_workspace(|ws| {
        let cells = ws.seed(&a[offset..offset + la]);
        band::solve(cells, &b[offset..offset + lb])
    })
}

/// Levenshtein edit distance between two strings, measured in UTF-16 code
/// units.
///
/// Each argument is encoded with [`str::encode_utf16`] and handed to
/// [`levenshtein_units`]; a character outside the basic multilingual plane
/// counts as two units. Equal strings short-circuit before any encoding.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();
    levenshtein_units(&a, &b)
}
