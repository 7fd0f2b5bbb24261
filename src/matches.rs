use crate::{
    Board, Kind, Tile, TileId, MATCH_CAPACITY, MIN_MATCH_LEN, POINTS_PER_TILE, PRISM_MATCH_LEN,
};
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::debug;

/// The ids of the [tiles](Tile) in a [match](Match), in scan order.
///
/// # See Also
///
/// * [MATCH_CAPACITY]
pub type TileIds = SmallVec<[TileId; MATCH_CAPACITY]>;

/// The direction of the line a [match](Match) was found along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// A run inside one row, ordered left to right.
    Row,
    /// A run inside one column, ordered top to bottom.
    Column,
}

/// A run of [MIN_MATCH_LEN] or more contiguous [tiles](Tile) of the same [kind](Kind) along one
/// row or one column.
///
/// Matches are found fresh on every turn and are never stored on the board. Row and column
/// runs are found independently, so a tile in an L, T or plus shape belongs to two matches.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Match {
    /// The ids of the matched tiles in scan order.
    tile_ids: TileIds,
    /// The kind shared by every matched tile.
    kind: Kind,
    /// The line the match lies along.
    axis: Axis,
}

impl Match {
    /// The ids of the matched tiles, left to right for rows and top to bottom for columns.
    #[inline]
    pub fn tile_ids(&self) -> &[TileId] {
        &self.tile_ids
    }

    /// The kind shared by every matched tile.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The line the match lies along.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The number of matched tiles. Always at least [MIN_MATCH_LEN].
    #[inline]
    pub fn len(&self) -> usize {
        self.tile_ids.len()
    }

    /// Always `false` for matches returned by [find_matches].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tile_ids.is_empty()
    }

    /// [POINTS_PER_TILE] for every matched tile.
    #[inline]
    pub fn points(&self) -> usize {
        self.len() * POINTS_PER_TILE
    }

    /// The tile promoted to a [prism](Kind::Prism) when the match resolves.
    ///
    /// # Returns
    ///
    /// [None] for matches shorter than [PRISM_MATCH_LEN]. Otherwise, the tile at the middle index
    /// of [Match::tile_ids], taking the lower middle index for even lengths.
    pub fn anchor(&self) -> Option<TileId> {
        if self.len() < PRISM_MATCH_LEN {
            return None;
        }

        Some(self.tile_ids[self.len() / 2])
    }
}

/// Scans every row left to right and then every column top to bottom for maximal runs of the
/// same [kind](Kind).
///
/// # Returns
///
/// Every run of at least [MIN_MATCH_LEN] tiles. Row matches come first, ordered by row and
/// then column, followed by column matches ordered by column and then row. Resolution depends
/// on this order.
pub fn find_matches(board: &Board) -> Vec<Match> {
    let mut matches = Vec::new();

    for row in board.rows() {
        push_runs(row.iter().copied(), Axis::Row, &mut matches);
    }
    for col in 0..board.size() {
        push_runs(board.column(col).copied(), Axis::Column, &mut matches);
    }

    debug!(matches = matches.len(), "found matches");
    matches
}

/// Pushes every run of at least [MIN_MATCH_LEN] tiles from one `line` into `matches`.
fn push_runs(line: impl Iterator<Item = Tile>, axis: Axis, matches: &mut Vec<Match>) {
    for (kind, run) in &line.group_by(Tile::kind) {
        let tile_ids: TileIds = run.map(|tile| tile.id()).collect();
        if tile_ids.len() >= MIN_MATCH_LEN {
            matches.push(Match {
                tile_ids,
                kind,
                axis,
            });
        }
    }
}
