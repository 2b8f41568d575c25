// SPDX-License-Identifier: MIT
// Band solver: the column sweep over the cached DP row, four columns per
// outer iteration with a single-column tail.

use crate::distance::buffer::DpCell;

/// One DP cell via a branch-reduced three-way minimum.
///
/// `d1` is the diagonal predecessor (a matching pair of code units makes that
/// move free), `d0` and `d2` the two adjacent predecessors. Equivalent to
/// `min(d0 + 1, d2 + 1, d1 + (bx != ay))` for the neighbour values the sweep
/// produces; the equality test is skipped whenever an adjacent predecessor
/// already undercuts the diagonal. The tie-break direction is load-bearing
/// and must not be reordered.
#[inline(always)]
fn dp_min(d0: usize, d1: usize, d2: usize, bx: u16, ay: u16) -> usize {
    if d0 < d1 || d2 < d1 {
        if d0 > d2 {
            d2 + 1
        } else {
            d0 + 1
        }
    } else if bx == ay {
        d1
    } else {
        d1 + 1
    }
}

/// Sweep every column of `b` across the seeded row and return the final
/// distance.
///
/// While at least four unconsumed columns remain, one outer iteration
/// consumes four of them, threading the rotating accumulators `d0..d3, dd`
/// through the row so each row position updates four cells. The rightmost
/// lane (`dd`, the most advanced column) is what lands back in the row. The
/// remaining zero to three columns go through the single-column loop.
///
/// Callers must pass a non-empty row and a non-empty `b`, so both `dd`
/// assignments below are always reached before the return.
pub(crate) fn solve(cells: &mut [DpCell], b: &[u16]) -> usize {
    let lb = b.len();
    let mut x = 0;
    let mut dd = 0;

    while x + 4 <= lb {
        let bx0 = b[x];
        let bx1 = b[x + 1];
        let bx2 = b[x + 2];
        let bx3 = b[x + 3];
        let mut d0 = x;
        let mut d1 = x + 1;
        let mut d2 = x + 2;
        let mut d3 = x + 3;
        x += 4;
        dd = x;
        for cell in cells.iter_mut() {
            let dy = cell.dist;
            let ay = cell.unit;
            d0 = dp_min(dy, d0, d1, bx0, ay);
            d1 = dp_min(d0, d1, d2, bx1, ay);
            d2 = dp_min(d1, d2, d3, bx2, ay);
            dd = dp_min(d2, d3, dd, bx3, ay);
            cell.dist = dd;
            // Rotate the frontier down one row; the value read from the row
            // becomes the diagonal for the leftmost lane of the next row.
            d3 = d2;
            d2 = d1;
            d1 = d0;
            d0 = dy;
        }
    }

    while x < lb {
        let bx0 = b[x];
        let mut d0 = x;
        x += 1;
        dd = x;
        for cell in cells.iter_mut() {
            let dy = cell.dist;
            dd = dp_min(dy, d0, dd, bx0, cell.unit);
            cell.dist = dd;
            d0 = dy;
        }
    }

    dd
}
