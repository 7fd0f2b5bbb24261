use crate::{manhattan_distance, Board, Tile};
use tap::Tap;
use tracing::error;

/// Whether `first` and `second` may be swapped: they must be exactly one orthogonal step apart.
/// No other state of the board affects whether a swap is legal.
#[inline]
pub fn can_swap(first: &Tile, second: &Tile) -> bool {
    manhattan_distance(first.coordinate(), second.coordinate()) == 1
}

/// Exchanges the kinds at the positions of `first` and `second` on a copy of `board`. Tiles keep
/// their positions and ids; only their kinds move. The kinds held by `first` and `second`
/// themselves are ignored in favor of the kinds on `board`.
///
/// Legality is not checked here, see [can_swap].
///
/// # Returns
///
/// A new board with the kinds exchanged. If either tile lies outside `board`, which means the
/// caller holds tiles from a different board, the error is logged and an unchanged copy of
/// `board` is returned.
pub fn apply_swap(board: &Board, first: &Tile, second: &Tile) -> Board {
    let (Some(first_kind), Some(second_kind)) = (
        board.tile_at(first.row(), first.col()).map(Tile::kind),
        board.tile_at(second.row(), second.col()).map(Tile::kind),
    ) else {
        error!(
            first = %first.id(),
            second = %second.id(),
            size = board.size(),
            "swap coordinates are not on the board, leaving it unchanged"
        );
        return board.clone();
    };

    board.clone().tap_mut(|next| {
        next.set_kind(first.coordinate(), second_kind);
        next.set_kind(second.coordinate(), first_kind);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_setup::{board_from_rows, rows_from_board};
    use crate::Kind;
    use rand::Rng;

    #[test]
    fn can_swap_adjacent() {
        test_can_swap((2, 2), (1, 2), true);
        test_can_swap((2, 2), (3, 2), true);
        test_can_swap((2, 2), (2, 1), true);
        test_can_swap((2, 2), (2, 3), true);
    }

    #[test]
    fn can_swap_same_tile() {
        test_can_swap((2, 2), (2, 2), false);
    }

    #[test]
    fn can_swap_diagonal() {
        test_can_swap((2, 2), (1, 1), false);
        test_can_swap((2, 2), (3, 3), false);
    }

    #[test]
    fn can_swap_far() {
        test_can_swap((2, 2), (2, 4), false);
        test_can_swap((0, 0), (5, 0), false);
    }

    #[test]
    fn can_swap_random_pairs() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let first = (rng.gen_range(0..8), rng.gen_range(0..8));
            let second = (rng.gen_range(0..8), rng.gen_range(0..8));
            test_can_swap(first, second, manhattan_distance(first, second) == 1);
        }
    }

    #[test]
    fn apply_swap_exchanges_kinds() {
        let board = board_from_rows(&["AVM", "JRA", "MVJ"]);

        let next = apply_swap(&board, &tile(&board, 0, 0), &tile(&board, 0, 1));

        assert_eq!(vec!["VAM", "JRA", "MVJ"], rows_from_board(&next));
        assert_eq!(vec!["AVM", "JRA", "MVJ"], rows_from_board(&board));
    }

    #[test]
    fn apply_swap_keeps_positions() {
        let board = board_from_rows(&["AVM", "JRA", "MVJ"]);

        let next = apply_swap(&board, &tile(&board, 1, 1), &tile(&board, 2, 1));

        for (index, tile) in next.tiles().iter().enumerate() {
            assert_eq!((index / 3, index % 3), tile.coordinate());
        }
        assert_eq!(Some(Kind::Violet), next.tile_at(1, 1).map(Tile::kind));
        assert_eq!(Some(Kind::Rose), next.tile_at(2, 1).map(Tile::kind));
    }

    #[test]
    fn apply_swap_uses_board_kinds() {
        let board = board_from_rows(&["AV", "MJ"]);
        let first = Tile::new(0, 0, Kind::Rose);
        let second = Tile::new(1, 0, Kind::Rose);

        let next = apply_swap(&board, &first, &second);

        assert_eq!(vec!["MV", "AJ"], rows_from_board(&next));
    }

    #[test]
    fn apply_swap_twice_restores() {
        let board = Board::new_random(6).expect("Board::new_random should return Ok");
        let first = tile(&board, 3, 2);
        let second = tile(&board, 3, 3);

        let next = apply_swap(&apply_swap(&board, &first, &second), &first, &second);

        assert_eq!(board, next);
    }

    #[test]
    fn apply_swap_stale_coordinate() {
        let board = board_from_rows(&["AV", "MJ"]);
        let outside = Tile::new(2, 1, Kind::Aqua);

        let next = apply_swap(&board, &tile(&board, 1, 1), &outside);

        assert_eq!(board, next);
    }

    fn tile(board: &Board, row: usize, col: usize) -> Tile {
        *board.tile_at(row, col).expect("tile_at should return Some")
    }

    fn test_can_swap(
        first: (usize, usize),
        second: (usize, usize),
        expected_can_swap: bool,
    ) {
        let mut rng = rand::thread_rng();
        let first = Tile::new(first.0, first.1, rng.gen());
        let second = Tile::new(second.0, second.1, rng.gen());

        assert_eq!(expected_can_swap, can_swap(&first, &second));
        assert_eq!(expected_can_swap, can_swap(&second, &first));
    }
}
