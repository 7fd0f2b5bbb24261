use crate::{Coordinate, Kind};
use std::fmt;

/// Identifies a [tile](Tile) by the [coordinate](Coordinate) it was created at.
///
/// The id never changes when the kind of its tile is replaced, so it names a position on the
/// board rather than a particular piece of content.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TileId {
    row: usize,
    col: usize,
}

impl TileId {
    /// The id of the [tile](Tile) at `row` and `col`.
    #[inline]
    pub fn new(row: usize, col: usize) -> TileId {
        TileId { row, col }
    }

    /// The row of the identified [tile](Tile).
    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    /// The column of the identified [tile](Tile).
    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    /// The [coordinate](Coordinate) of the identified [tile](Tile).
    #[inline]
    pub fn coordinate(self) -> Coordinate {
        (self.row, self.col)
    }
}

impl From<Coordinate> for TileId {
    #[inline]
    fn from((row, col): Coordinate) -> TileId {
        TileId::new(row, col)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Describes one cell of a [board](crate::Board): its position and its [kind](Kind).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    /// The row of the tile, counted from the top.
    row: usize,
    /// The column of the tile, counted from the left.
    col: usize,
    /// The color of the tile, or a prism.
    kind: Kind,
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile`] at `row` and `col` holding `kind`.
    #[inline]
    pub fn new(row: usize, col: usize, kind: Kind) -> Tile {
        Tile { row, col, kind }
    }

    /// The [id](TileId) derived from the position of the tile.
    #[inline]
    pub fn id(&self) -> TileId {
        TileId::new(self.row, self.col)
    }

    /// The row of the tile.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of the tile.
    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// The [coordinate](Coordinate) of the tile.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        (self.row, self.col)
    }

    /// The [kind](Kind) of the tile.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn tile_id_from_position() {
        let mut rng = rand::thread_rng();
        let (row, col) = (rng.gen_range(0..100), rng.gen_range(0..100));

        let tile = Tile::new(row, col, rng.gen());

        assert_eq!(TileId::new(row, col), tile.id());
        assert_eq!(TileId::from((row, col)), tile.id());
        assert_eq!((row, col), tile.id().coordinate());
    }

    #[test]
    fn tile_id_survives_kind_change() {
        let mut tile = Tile::new(2, 5, Kind::Aqua);
        let id = tile.id();

        tile.set_kind(Kind::Prism);

        assert_eq!(id, tile.id());
        assert_eq!(Kind::Prism, tile.kind());
    }

    #[test]
    fn tile_id_display() {
        assert_eq!("3-7", TileId::new(3, 7).to_string());
    }

    #[test]
    fn tile_id_row_major_order() {
        assert!(TileId::new(0, 5) < TileId::new(1, 0));
        assert!(TileId::new(1, 0) < TileId::new(1, 1));
    }
}
