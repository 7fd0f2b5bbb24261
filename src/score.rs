use crate::random::next_normal_kind;
use crate::{adjacent_coordinates, Board, Kind, KindSource, Match};
use std::borrow::Cow;
use tracing::{debug, trace};

/// The points earned by one turn paired with the board after resolution.
///
/// The board is borrowed when there was nothing to resolve and owned otherwise.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoreResult<'a> {
    /// The points earned by the turn.
    points: usize,
    /// The board after resolution.
    board: Cow<'a, Board>,
}

impl ScoreResult<'_> {
    /// The points earned by the turn.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// The board after resolution.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board after resolution, cloned if it was borrowed.
    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }
}

/// Resolves `matches` found on `board`.
///
/// If `matches` is empty, `board` is passed through untouched and no points are earned.
/// Otherwise, a single copy of `board` is resolved. For each match in the order given:
///
/// 1. [The points of the match](Match::points) are added, so a tile shared by two matches
/// is counted once for each.
/// 2. [The anchor](Match::anchor) of a long match becomes a [prism](Kind::Prism).
/// 3. Every matched tile, the anchor included, gets a new kind from `kinds`. A prism drawn
/// from `kinds` is replaced with a random normal kind, so clearing never creates a prism.
///
/// Writes happen in order, so the last write to a tile shared by several matches wins. After
/// every match is resolved, the board is swept once in row-major order and every tile that is
/// still a prism when it is reached bursts: each of its orthogonal neighbors gets a new kind
/// from `kinds`. A prism replaced by an earlier burst in the same sweep does not burst.
///
/// Resolution happens once. New runs created by clearing or bursting are left for the next
/// turn.
///
/// # Arguments
///
/// * `board`: The board the matches were found on.
/// * `matches`: Matches in the order returned by [find_matches](crate::find_matches).
/// * `kinds`: The source of every replacement kind.
pub fn score_matches<'a>(
    board: &'a Board,
    matches: &[Match],
    mut kinds: impl KindSource,
) -> ScoreResult<'a> {
    if matches.is_empty() {
        trace!("no matches to resolve");
        return ScoreResult {
            points: 0,
            board: Cow::Borrowed(board),
        };
    }

    let mut next = board.clone();
    let mut points = 0;

    for m in matches {
        points += m.points();

        if let Some(anchor) = m.anchor() {
            trace!(%anchor, len = m.len(), "promoting anchor to prism");
            next.set_kind(anchor.coordinate(), Kind::Prism);
        }

        for id in m.tile_ids() {
            next.set_kind(id.coordinate(), next_normal_kind(&mut kinds));
        }
    }

    burst_prisms(&mut next, &mut kinds);
    debug!(points, matches = matches.len(), "resolved matches");

    ScoreResult {
        points,
        board: Cow::Owned(next),
    }
}

/// Replaces the orthogonal neighbors of every prism on `board`, visiting tiles in row-major
/// order.
fn burst_prisms(board: &mut Board, kinds: &mut impl KindSource) {
    let size = board.size();
    for index in 0..board.tiles().len() {
        let tile = board.tiles()[index];
        if !tile.kind().is_prism() {
            continue;
        }

        trace!(prism = %tile.id(), "bursting prism");
        for coordinate in adjacent_coordinates(tile.coordinate(), size) {
            board.set_kind(coordinate, next_normal_kind(kinds));
        }
    }
}
