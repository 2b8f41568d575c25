// SPDX-License-Identifier: MIT
// Reusable per-thread row buffer for the distance kernel.

use std::cell::RefCell;

/// One position of the DP row: the distance computed so far for this row
/// position, next to the code unit of `a` it corresponds to. Keeping the
/// pair adjacent means the inner loop reads one cell per position instead of
/// touching two arrays.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DpCell {
    pub dist: usize,
    pub unit: u16,
}

/// Row capacity pre-allocated per thread; longer inputs grow the buffer once
/// and keep the larger allocation for later calls.
const INITIAL_ROW_CAPACITY: usize = 256;

pub(crate) struct DistanceWorkspace {
    cells: Vec<DpCell>,
}

impl DistanceWorkspace {
    pub(crate) fn new() -> Self {
        DistanceWorkspace {
            cells: Vec::with_capacity(INITIAL_ROW_CAPACITY),
        }
    }

    /// Reset the row and seed one cell per retained unit of `a`: position `i`
    /// starts at distance `i + 1`, the cost of deleting `a[0..=i]` against an
    /// empty prefix of the other sequence. The code unit is cached here once
    /// and never written again.
    pub(crate) fn seed(&mut self, a: &[u16]) -> &mut [DpCell] {
        self.cells.clear();
        self.cells.extend(
            a.iter()
                .enumerate()
                .map(|(i, &unit)| DpCell { dist: i + 1, unit }),
        );
        &mut self.cells
    }
}

impl Default for DistanceWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static WORKSPACE: RefCell<DistanceWorkspace> = RefCell::new(DistanceWorkspace::new());
}

/// Run `f` with this thread's workspace. The kernel has no suspension points,
/// so the borrow is exclusive for the whole call and the row is never shared
/// between two in-flight computations.
pub(crate) fn with_workspace<F, R>(f: F) -> R
where
    F: FnOnce(&mut DistanceWorkspace) -> R,
{
    WORKSPACE.with(|ws| f(&mut ws.borrow_mut()))
}
