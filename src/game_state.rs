use crate::{
    apply_swap, can_swap, find_matches, score_matches, Board, Coordinate, KindSource, Match,
    NewError, RandomKinds, TileId,
};
use rand::rngs::ThreadRng;
use std::collections::HashSet;
use tracing::debug;

/// Owns the current board, the pending selection, and the accumulated score of one game, and
/// turns pairs of selected tiles into turns.
///
/// Each turn moves through the following steps:
///
/// * `Idle`: Nothing is selected.
/// * `Selecting`: One tile is selected.
/// * `Swapped`: A second, adjacent tile was selected and the swap was applied to a copy of
/// the board.
/// * `Resolved` or `Reverted`: The copy had matches and replaced the board, or it had none and
/// was discarded. Either way the selection is cleared and the game is `Idle` again.
#[derive(Debug)]
pub struct GameState<K> {
    /// The current board.
    board: Board,
    /// The first tile of a pending swap.
    selected: Option<TileId>,
    /// Points earned by every resolved turn.
    score: usize,
    /// The source of every new kind.
    kinds: K,
}

/// Describes what happened when a tile was [selected](GameState::select).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Selection {
    /// Nothing was selected, and now the tile is.
    Selected(TileId),
    /// The selected tile was selected again, and now nothing is.
    Deselected(TileId),
    /// The tile is not adjacent to the selected tile, so the selection moved to it.
    Reselected {
        /// The tile that was selected before.
        previous: TileId,
        /// The tile that is selected now.
        selected: TileId,
    },
    /// The swap produced no matches. The board is unchanged and nothing is selected.
    Reverted {
        /// The tile that was selected before.
        first: TileId,
        /// The tile that completed the swap.
        second: TileId,
    },
    /// The swap produced matches, which were resolved. The board was replaced, the points were
    /// added to the score, and nothing is selected.
    Resolved {
        /// The points earned by the turn.
        points: usize,
        /// The matches that were resolved, in resolution order.
        matches: Vec<Match>,
    },
}

/// Describes the reason why a tile could not be [selected](GameState::select).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum SelectError {
    /// Attempting to select a [coordinate](Coordinate) outside the board.
    OutOfBounds {
        /// The selected coordinate.
        coordinate: Coordinate,
        /// The side length of the board.
        size: usize,
    },
}

impl GameState<RandomKinds<ThreadRng>> {
    /// Starts a game on a new random board of side length `size` where every new kind is drawn
    /// with [rand::thread_rng].
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyBoard] Attempting to create a board with a side length of `0`.
    /// * [NewError::Overflow] Attempting to create a board with more than [usize::MAX]
    /// tiles.
    ///
    /// # See Also
    ///
    /// * [BOARD_SIZE](crate::BOARD_SIZE)
    pub fn new_random(size: usize) -> Result<Self, HashSet<NewError>> {
        let mut kinds = RandomKinds::thread();
        let board = Board::new(size, &mut kinds)?;
        Ok(GameState::new(board, kinds))
    }
}

impl<K: KindSource> GameState<K> {
    /// Starts a game on `board` with nothing selected and a score of `0`.
    pub fn new(board: Board, kinds: K) -> Self {
        GameState {
            board,
            selected: None,
            score: 0,
            kinds,
        }
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The points earned by every resolved turn so far.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// The first tile of a pending swap, if any.
    #[inline]
    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    /// Selects the tile at `coordinate`.
    ///
    /// When another tile is already selected and the two tiles [can be swapped](can_swap), the
    /// swap is applied to a copy of the board and [matches are found](find_matches) once. With
    /// no matches, the copy is discarded. With matches, they are
    /// [resolved](score_matches), the resolved board replaces the current board, and the
    /// points are added to the score. Matches created by resolution are not resolved until a
    /// later turn creates them again.
    ///
    /// # Errors
    ///
    /// * [SelectError::OutOfBounds] Attempting to select a [coordinate](Coordinate) outside
    /// the board. The selection is unchanged.
    pub fn select(&mut self, (row, col): Coordinate) -> Result<Selection, SelectError> {
        let Some(&second) = self.board.tile_at(row, col) else {
            return Err(SelectError::OutOfBounds {
                coordinate: (row, col),
                size: self.board.size(),
            });
        };

        let Some(first_id) = self.selected else {
            self.selected = Some(second.id());
            return Ok(Selection::Selected(second.id()));
        };

        if first_id == second.id() {
            self.selected = None;
            return Ok(Selection::Deselected(first_id));
        }

        let Some(&first) = self.board.tile_at(first_id.row(), first_id.col()) else {
            unreachable!(
                "selected tile ({}) should be on the board since the board size never changes.",
                first_id
            );
        };

        if !can_swap(&first, &second) {
            debug!(previous = %first_id, selected = %second.id(), "moved selection");
            self.selected = Some(second.id());
            return Ok(Selection::Reselected {
                previous: first_id,
                selected: second.id(),
            });
        }

        self.selected = None;
        let swapped = apply_swap(&self.board, &first, &second);
        let matches = find_matches(&swapped);
        if matches.is_empty() {
            debug!(first = %first_id, second = %second.id(), "swap made no matches, reverting");
            return Ok(Selection::Reverted {
                first: first_id,
                second: second.id(),
            });
        }

        let result = score_matches(&swapped, &matches, &mut self.kinds);
        let points = result.points();
        let board = result.into_board();
        self.board = board;
        self.score += points;
        debug!(points, score = self.score, "resolved turn");

        Ok(Selection::Resolved { points, matches })
    }
}
