use crate::random::next_normal_kind;
use crate::{Coordinate, Kind, KindSource, RandomKinds, Tile};
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// A square grid of [tiles](Tile) with exactly one tile at every [coordinate](Coordinate)
/// from `(0, 0)` to `(size - 1, size - 1)`.
///
/// Tiles are stored in row-major order so a [coordinate](Coordinate) resolves to its tile
/// in constant time. Cloning a board deeply copies every tile, and the engine only ever
/// returns new boards, so a board handed to any function in this crate is never changed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    /// The side length of the board.
    size: usize,
    /// `size * size` tiles in row-major order.
    tiles: Vec<Tile>,
}

/// Describes the reason why a [Board] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewError {
    /// Attempting to create a board with a side length of `0`.
    EmptyBoard,
    /// Attempting to create a board whose number of tiles, `size * size`, does not fit in
    /// a `usize`.
    Overflow {
        /// The requested side length.
        size: usize,
    },
    /// Attempting to [create a board from kinds](Board::from_kinds) with a number of kinds
    /// different from `size * size`.
    KindsLen {
        /// The number of kinds required, `size * size`.
        expected: usize,
        /// The number of kinds given.
        actual: usize,
    },
}

impl Board {
    /// Checks that `size` is non-zero, then fills every [coordinate](Coordinate) with a kind drawn from `kinds` in row-major
    /// order.
    ///
    /// # Arguments
    ///
    /// * `size`: The side length of the board.
    /// * `kinds`: The source of the kind for each tile.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyBoard] Attempting to create a board with a side length of `0`.
    /// * [NewError::Overflow] Attempting to create a board with more than [usize::MAX]
    /// tiles.
    ///
    /// # See Also
    ///
    /// * [Board::new_random]
    pub fn new(size: usize, mut kinds: impl KindSource) -> Result<Board, HashSet<NewError>> {
        let len = Board::check(size)?;

        let mut tiles = Vec::with_capacity(len);
        tiles.extend(
            (0..size)
                .cartesian_product(0..size)
                .map(|(row, col)| Tile::new(row, col, next_normal_kind(&mut kinds))),
        );
        debug!(size, "created board");

        Ok(Board { size, tiles })
    }

    /// Creates a board where every kind is drawn uniformly at random from the normal kinds
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
    /// * [Board::new]
    pub fn new_random(size: usize) -> Result<Board, HashSet<NewError>> {
        Board::new(size, RandomKinds::thread())
    }

    /// Creates a board holding a given layout of kinds in row-major order. Unlike
    /// [Board::new], [Kind::Prism] is allowed.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyBoard] Attempting to create a board with a side length of `0`.
    /// * [NewError::Overflow] Attempting to create a board with more than [usize::MAX]
    /// tiles.
    /// * [NewError::KindsLen] Attempting to create a board with a number of kinds different
    /// from `size * size`.
    pub fn from_kinds(
        size: usize,
        kinds: impl IntoIterator<Item = Kind>,
    ) -> Result<Board, HashSet<NewError>> {
        let kinds: Vec<Kind> = kinds.into_iter().collect();
        let mut errors = Board::check(size).err().unwrap_or_default();

        if let Some(expected) = size.checked_mul(size) {
            if kinds.len() != expected {
                errors.insert(NewError::KindsLen {
                    expected,
                    actual: kinds.len(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let tiles = (0..size)
            .cartesian_product(0..size)
            .zip(kinds)
            .map(|((row, col), kind)| Tile::new(row, col, kind))
            .collect();

        Ok(Board { size, tiles })
    }

    /// Checks that `size` is non-zero and that `size * size` tiles can be counted.
    ///
    /// # Returns
    ///
    /// The number of tiles on a board with side length `size`.
    fn check(size: usize) -> Result<usize, HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(1);
        if size == 0 {
            errors.insert(NewError::EmptyBoard);
        }
        let len = size.checked_mul(size);
        if len.is_none() {
            errors.insert(NewError::Overflow { size });
        }

        match len {
            Some(len) if errors.is_empty() => Ok(len),
            _ => Err(errors),
        }
    }

    /// The side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The kinds of all tiles in row-major order.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.tiles.iter().map(Tile::kind)
    }

    /// Each row of tiles from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size)
    }

    /// The tiles of column `col` from top to bottom. Empty when `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Tile> {
        let start = if col < self.size { col } else { self.tiles.len() };
        self.tiles[start..].iter().step_by(self.size)
    }

    /// # Returns
    ///
    /// The tile at `row` and `col`, or [None] when either component is not less than
    /// [the side length](Board::size).
    #[inline]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.index(row, col).map(|index| &self.tiles[index])
    }

    /// Replaces the kind of the tile at `coordinate`. Does nothing when `coordinate` is out of
    /// bounds.
    pub(crate) fn set_kind(&mut self, (row, col): Coordinate, kind: Kind) {
        if let Some(index) = self.index(row, col) {
            self.tiles[index].set_kind(kind);
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl fmt::Display for Board {
    /// One line of [kind symbols](Kind::symbol) per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.kind())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
