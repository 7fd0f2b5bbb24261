//! Rules for a tile-matching puzzle game where long matches create prism tiles that burst
//! their neighbors.
//!
//! ## Summary
//!
//! A [board](Board) is a square grid with one [tile](Tile) at every [coordinate](Coordinate).
//! Each tile holds a [kind](Kind): one of five normal colors or the special
//! [prism](Kind::Prism). A player swaps two adjacent tiles. If the swap lines up
//! [MIN_MATCH_LEN] or more tiles of the same kind in a row or column, those
//! [matches](Match) are cleared and score points. Otherwise, the swap is undone.
//!
//! Every function returns a new board instead of changing the one it was given. Randomness is
//! injected through a [KindSource], so every turn can be replayed with a [KindSequence].
//!
//! ## How is the game created?
//!
//! [Board::new] fills a board from a [KindSource], [Board::new_random] draws uniformly random
//! normal kinds, and [Board::from_kinds] restores a given layout. [GameState::new] and
//! [GameState::new_random] wrap a board with a selection and a score.
//!
//! ## How is a turn played?
//!
//! 1. [can_swap] checks that the two tiles are exactly one orthogonal step apart.
//! 2. [apply_swap] exchanges their kinds on a copy of the board.
//! 3. [find_matches] scans rows and then columns for runs.
//! 4. With no matches, the copy is discarded. With matches, [score_matches] resolves them
//! on another copy and returns the points and the new board.
//!
//! [GameState::select] runs these steps each time a second tile is selected.
//!
//! ## How are points calculated?
//!
//! Each match earns [POINTS_PER_TILE] for each of its tiles. Row and column matches are found
//! independently, so a tile at the corner of an L shape is counted once for each match.
//!
//! ## How are matches resolved?
//!
//! Matches are resolved in the order [find_matches] returns them. A match of
//! [PRISM_MATCH_LEN] or more turns [its anchor](Match::anchor) into a prism, and then every
//! matched tile gets a new random kind. Afterwards, every prism on the board bursts in
//! row-major order, giving each of its orthogonal neighbors a new random kind. Runs created
//! by clearing or bursting are left for the next turn.
//!
//! ## How are states tested when properties are private?
//!
//! The `test` build configuration adds a helper module which builds boards from rows of
//! [kind symbols](Kind::symbol), and [KindSequence] makes every random choice predictable.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game_state::*;
pub use kind::*;
pub use matches::*;
pub use random::*;
pub use score::*;
pub use swap::*;
pub use tile::*;

mod board;
mod consts;
mod coordinate;
mod game_state;
mod kind;
mod matches;
mod random;
mod score;
mod swap;
#[cfg(test)]
mod test_setup;
mod tile;
