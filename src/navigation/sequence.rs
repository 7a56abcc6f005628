//! Index bookkeeping shared by every navigable widget.
//!
//! A [`SequenceCursor`] owns the active position inside a fixed-length item
//! list. All mutations go through the mode-specific transition so the index
//! can never leave `0..count`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Boundary policy applied when an index delta is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Moving past either end cycles to the opposite end
    #[default]
    Wrap,
    /// Moving past either end is rejected and the index holds
    Clamp,
}

// One-step direction of a committed change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Advance,
    Retreat,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Advance => 1,
            Direction::Retreat => -1,
        }
    }
}

/// What triggered an index change, carried along for logging and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Drag(Direction),
    Button(Direction),
    Tick,
    DirectSelect,
}

/// A committed index change handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
    pub cause: ChangeCause,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence must contain at least one item")]
    EmptySequence,

    #[error("Initial index {index} is outside of a sequence with {count} items")]
    InitialIndexOutOfRange { index: usize, count: usize },
}

/// Active item of a fixed-length sequence.
///
/// Invariant: `index < count` at every observation point. `count` is fixed at
/// construction and never changes for the lifetime of the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCursor {
    index: usize,
    count: usize,
    mode: NavigationMode,
}

impl SequenceCursor {
    pub fn new(count: usize, mode: NavigationMode) -> Result<Self, SequenceError> {
        Self::with_initial(count, mode, 0)
    }

    pub fn with_initial(
        count: usize,
        mode: NavigationMode,
        initial: usize,
    ) -> Result<Self, SequenceError> {
        if count == 0 {
            return Err(SequenceError::EmptySequence);
        }
        if initial >= count {
            return Err(SequenceError::InitialIndexOutOfRange {
                index: initial,
                count,
            });
        }

        debug!(
            "Created {:?} cursor over {} items starting at {}",
            mode, count, initial
        );
        Ok(Self {
            index: initial,
            count,
            mode,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Applies `delta` under the cursor's mode.
    ///
    /// Returns `None` when nothing changed: a Clamp delta that would leave
    /// `0..count` is dropped as a whole, and a Wrap delta that lands on the
    /// current index (for example any step on a single-item sequence) is not
    /// reported as a change.
    pub fn step(&mut self, delta: isize, cause: ChangeCause) -> Option<IndexChange> {
        let count = self.count as isize;
        let target = self.index as isize + delta;

        let next = match self.mode {
            NavigationMode::Wrap => target.rem_euclid(count),
            NavigationMode::Clamp => {
                if !(0..count).contains(&target) {
                    debug!(
                        "Dropping {:?} at boundary: index {} + {} outside 0..{}",
                        cause, self.index, delta, self.count
                    );
                    return None;
                }
                target
            }
        } as usize;

        self.commit(next, cause)
    }

    pub fn advance(&mut self, cause: ChangeCause) -> Option<IndexChange> {
        self.step(Direction::Advance.delta(), cause)
    }

    pub fn retreat(&mut self, cause: ChangeCause) -> Option<IndexChange> {
        self.step(Direction::Retreat.delta(), cause)
    }

    /// Jumps straight to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.count {
            warn!(
                "Ignoring selection of index {} in a sequence of {} items",
                index, self.count
            );
            return None;
        }
        self.commit(index, ChangeCause::DirectSelect)
    }

    fn commit(&mut self, next: usize, cause: ChangeCause) -> Option<IndexChange> {
        if next == self.index {
            return None;
        }

        let change = IndexChange {
            previous: self.index,
            current: next,
            cause,
        };
        self.index = next;
        debug!("Index {} -> {} ({:?})", change.previous, change.current, cause);
        Some(change)
    }
}
