use crate::{Board, Kind};

/// Builds a [Board] from one string of [kind symbols](Kind::symbol) per row.
///
/// # Panics
///
/// * When a character is not a kind symbol
/// * When the rows do not form a non-empty square
pub(crate) fn board_from_rows(rows: &[&str]) -> Board {
    let kinds: Vec<Kind> = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|symbol| {
            Kind::from_symbol(symbol)
                .unwrap_or_else(|| panic!("{:?} should be a kind symbol", symbol))
        })
        .collect();
    Board::from_kinds(rows.len(), kinds).expect("rows should form a square board")
}

/// The kinds of `board` as one string of [kind symbols](Kind::symbol) per row.
pub(crate) fn rows_from_board(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| row.iter().map(|tile| tile.kind().symbol()).collect())
        .collect()
}
