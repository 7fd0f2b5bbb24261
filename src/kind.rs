use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// Describes the color of a [tile](crate::Tile) or the special [prism](Kind::Prism).
///
/// Only the normal kinds are ever drawn at random. A prism exists on the board only when it is
/// placed there, and it clears its neighbors during [resolution](crate::score_matches).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Kind {
    /// `0`.
    Aqua = 0,
    /// `1`.
    Violet = 1,
    /// `2`.
    Amber = 2,
    /// `3`.
    Jade = 3,
    /// `4`.
    Rose = 4,
    /// `5`. The special kind, never drawn at random.
    Prism = 5,
}

impl Kind {
    /// The number of normal [`Kind`] variants. 5 kinds.
    pub const NORMAL_KINDS_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all normal [`Kind`] variants in order. [Kind::Prism] is excluded.
    #[inline]
    pub fn normal_kinds() -> [Kind; Kind::NORMAL_KINDS_LEN] {
        [Kind::Aqua, Kind::Violet, Kind::Amber, Kind::Jade, Kind::Rose]
    }

    /// Whether this is the special [Kind::Prism].
    #[inline]
    pub fn is_prism(self) -> bool {
        self == Kind::Prism
    }

    /// # Returns
    ///
    /// A single character for the kind: `A`, `V`, `M`, `J`, `R` for the normal kinds
    /// and `*` for [Kind::Prism].
    pub fn symbol(self) -> char {
        match self {
            Kind::Aqua => 'A',
            Kind::Violet => 'V',
            Kind::Amber => 'M',
            Kind::Jade => 'J',
            Kind::Rose => 'R',
            Kind::Prism => '*',
        }
    }

    /// The inverse of [Kind::symbol]. Returns [None] for any other character.
    pub fn from_symbol(symbol: char) -> Option<Kind> {
        match symbol {
            'A' => Some(Kind::Aqua),
            'V' => Some(Kind::Violet),
            'M' => Some(Kind::Amber),
            'J' => Some(Kind::Jade),
            'R' => Some(Kind::Rose),
            '*' => Some(Kind::Prism),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Distribution<Kind> for Standard {
    /// Samples a normal [`Kind`] uniformly. Never returns [Kind::Prism].
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Kind {
        let index = rng.gen_range(0..Kind::NORMAL_KINDS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Kind::NORMAL_KINDS_LEN);
            unreachable!(
                "index ({:?}) should be matched since normal kinds cover all indexes \
                in range 0..Kind::NORMAL_KINDS_LEN (0..{:?}).",
                index,
                Kind::NORMAL_KINDS_LEN
            );
        })
    }
}
