/// A tuple of the row and column of a [tile](crate::Tile) on the board, counted from the
/// top-left corner.
///
/// # See Also
///
/// * [Board::tile_at](crate::Board::tile_at)
/// * [GameState::select](crate::GameState::select)
pub type Coordinate = (usize, usize);

/// The number of orthogonal steps between two [coordinates](Coordinate).
///
/// # See Also
///
/// * [can_swap](crate::can_swap)
#[inline]
pub fn manhattan_distance(
    (first_row, first_col): Coordinate,
    (second_row, second_col): Coordinate,
) -> usize {
    first_row.abs_diff(second_row) + first_col.abs_diff(second_col)
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal, and both components are less than `size`.
///
/// # Arguments
///
/// * `row`: The row component
/// * `col`: The column component
/// * `size`: The side length of the board
///
/// # See Also
///
/// * [score_matches](crate::score_matches)
///
/// # Returns
///
/// Up to 4 [coordinates](Coordinate) in north, south, west, east order.
pub fn adjacent_coordinates(
    (row, col): Coordinate,
    size: usize,
) -> impl Iterator<Item = Coordinate> {
    [
        row.checked_sub(1).map(|north| (north, col)),
        row.checked_add(1).map(|south| (south, col)),
        col.checked_sub(1).map(|west| (row, west)),
        col.checked_add(1).map(|east| (row, east)),
    ]
    .into_iter()
    .flatten()
    .filter(move |&(row, col)| row < size && col < size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::Rng;

    #[test]
    fn manhattan_distance_same_coordinate() {
        let coordinate = rand::thread_rng().gen_range(0..100);

        assert_eq!(
            0,
            manhattan_distance((coordinate, coordinate), (coordinate, coordinate))
        );
    }

    #[test]
    fn manhattan_distance_mix_components() {
        assert_eq!(7, manhattan_distance((1, 6), (4, 2)));
        assert_eq!(7, manhattan_distance((4, 2), (1, 6)));
    }

    #[test]
    fn adjacent_coordinates_inside() {
        test_adjacent_coordinates((1, 1), 3, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn adjacent_coordinates_top_left_corner() {
        test_adjacent_coordinates((0, 0), 3, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn adjacent_coordinates_bottom_right_corner() {
        test_adjacent_coordinates((2, 2), 3, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn adjacent_coordinates_single_tile() {
        test_adjacent_coordinates((0, 0), 1, vec![]);
    }

    fn test_adjacent_coordinates(
        coordinate: Coordinate,
        size: usize,
        expected_adjacent_coordinates: Vec<Coordinate>,
    ) {
        let actual_adjacent_coordinates = adjacent_coordinates(coordinate, size).collect_vec();

        assert_eq!(expected_adjacent_coordinates, actual_adjacent_coordinates);
    }
}
