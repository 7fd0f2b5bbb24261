use konst::primitive::parse_usize;
use konst::{option, result};

/// The side length of a board created for a new game. If the environment variable named
/// `BOARD_SIZE` is present at compile time and is able to be parsed into a `usize`, set to the
/// value of the environment variable. Otherwise, it is set to `8`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [GameState::new_random](crate::GameState::new_random)
/// * [MATCH_CAPACITY]
pub const BOARD_SIZE: usize = option::unwrap_or!(
    option::and_then!(option_env!("BOARD_SIZE"), |str| result::ok!(parse_usize(
        str
    ))),
    8
);
const _: () = assert!(BOARD_SIZE > 0);
/// The points earned by each [tile](crate::Tile) in a [match](crate::Match). If the environment
/// variable named `POINTS_PER_TILE` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `10`.
///
/// # See Also
///
/// * [Match::points](crate::Match::points)
/// * [score_matches](crate::score_matches)
pub const POINTS_PER_TILE: usize = option::unwrap_or!(
    option::and_then!(option_env!("POINTS_PER_TILE"), |str| result::ok!(
        parse_usize(str)
    )),
    10
);
/// The minimum number of contiguous [tiles](crate::Tile) of the same [kind](crate::Kind) in
/// a row or column that counts as a [match](crate::Match). `3` tiles.
pub const MIN_MATCH_LEN: usize = 3;
/// The minimum length of a [match](crate::Match) that promotes its anchor tile to a
/// [prism](crate::Kind::Prism). If the environment variable named `PRISM_MATCH_LEN` is present
/// at compile time and is able to be parsed into a `usize`, set to the value of the environment
/// variable. Otherwise, it is set to `4`.
///
/// # Panics
///
/// * When the given value is less than [MIN_MATCH_LEN]
///
/// # See Also
///
/// * [Match::anchor](crate::Match::anchor)
pub const PRISM_MATCH_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("PRISM_MATCH_LEN"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PRISM_MATCH_LEN >= MIN_MATCH_LEN);
/// The ids of a [match](crate::Match) are stored on the stack until the match becomes longer
/// than `MATCH_CAPACITY`. A match never spans more than one line, so it is set to
/// [BOARD_SIZE].
///
/// # See Also
///
/// * [TileIds](crate::TileIds)
pub const MATCH_CAPACITY: usize = BOARD_SIZE;
