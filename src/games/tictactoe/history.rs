//! Move history: board snapshots supporting time travel.
//!
//! A [`History`] is an ordered list of [`Snapshot`]s. Entry 0 is always
//! the empty board. Entries are never edited; playing a move from an
//! earlier point replaces the whole history with a truncated copy plus
//! the new snapshot.

use super::invariants::{HistoryRootInvariant, Invariant, InvariantViolation};
use super::{Board, GameState, Location, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable board state after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    location: Option<Location>,
}

impl Snapshot {
    /// The empty board that starts every game.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Snapshot produced by `player` marking `pos` on `previous`.
    pub fn after_move(previous: &Board, pos: Position, player: Player) -> Self {
        Self {
            board: previous.with_mark(pos, player),
            location: Some(pos.location()),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, location: Option<Location>) -> Self {
        Self { board, location }
    }

    /// The board at this point of the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the move that produced this snapshot was played.
    ///
    /// `None` only for the initial snapshot.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// The position of the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.location.and_then(Location::position)
    }
}

/// Ordered sequence of snapshots. Never empty.
///
/// Deserialization rejects a history without the initial snapshot at
/// entry 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRepr")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

#[derive(Deserialize)]
struct HistoryRepr {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<HistoryRepr> for History {
    type Error = InvariantViolation;

    fn try_from(repr: HistoryRepr) -> Result<Self, Self::Error> {
        match repr.snapshots.first() {
            Some(root) if *root == Snapshot::initial() => Ok(Self {
                snapshots: repr.snapshots,
            }),
            _ => Err(InvariantViolation::new(
                <HistoryRootInvariant as Invariant<GameState>>::description(),
            )),
        }
    }
}

impl History {
    /// History holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True only for a malformed history; a game always holds its
    /// initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `view_index`.
    ///
    /// # Panics
    ///
    /// Panics if `view_index` is out of range. Callers keep the view index
    /// within `0..len()`.
    pub fn current(&self, view_index: usize) -> &Snapshot {
        &self.snapshots[view_index]
    }

    /// Snapshot at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates snapshots oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Returns a new history holding `self[0..=after_index]` followed by
    /// `snapshot`.
    ///
    /// Anything after `after_index` is dropped from the new history.
    #[instrument(skip(self, snapshot), fields(len = self.len()))]
    pub fn append(&self, snapshot: Snapshot, after_index: usize) -> History {
        let keep = (after_index + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(snapshot);
        debug!(
            discarded = self.snapshots.len() - keep,
            new_len = snapshots.len(),
            "History appended"
        );
        History { snapshots }
    }

    /// Same branch-truncation rule as [`History::append`], consuming `self`
    /// and reusing its storage.
    #[instrument(skip(self, snapshot), fields(len = self.len()))]
    pub fn truncate_and_append(mut self, snapshot: Snapshot, after_index: usize) -> History {
        let keep = (after_index + 1).min(self.snapshots.len());
        let discarded = self.snapshots.len() - keep;
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        debug!(discarded, new_len = self.snapshots.len(), "History truncated and appended");
        self
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
