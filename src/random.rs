use crate::Kind;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, error};

/// Supplies the next normal [kind](Kind) whenever a [tile](crate::Tile) is created or cleared.
///
/// Every random choice in the crate goes through a `KindSource`, so a deterministic source
/// such as [KindSequence] reproduces a turn exactly.
pub trait KindSource {
    /// The next normal [kind](Kind).
    ///
    /// A [Kind::Prism] returned here never reaches the board: it is logged and replaced with
    /// a uniformly random normal kind drawn with [rand::thread_rng].
    fn next_kind(&mut self) -> Kind;
}

/// Draws the next kind from `kinds`, replacing a [Kind::Prism] with a random normal kind.
///
/// Every kind written to a board by [Board::new](crate::Board::new) or
/// [score_matches](crate::score_matches) is drawn here.
pub(crate) fn next_normal_kind(kinds: &mut impl KindSource) -> Kind {
    let kind = kinds.next_kind();
    if !kind.is_prism() {
        return kind;
    }

    let substitute: Kind = rand::thread_rng().gen();
    error!(%substitute, "kind source returned a prism, substituting a normal kind");
    substitute
}

impl<K: KindSource + ?Sized> KindSource for &mut K {
    #[inline]
    fn next_kind(&mut self) -> Kind {
        (**self).next_kind()
    }
}

/// Draws uniformly random normal [kinds](Kind) from any [Rng].
#[derive(Debug, Clone)]
pub struct RandomKinds<R> {
    rng: R,
}

impl<R: Rng> RandomKinds<R> {
    /// A [KindSource] backed by `rng`.
    pub fn new(rng: R) -> RandomKinds<R> {
        RandomKinds { rng }
    }
}

impl RandomKinds<ThreadRng> {
    /// A [KindSource] backed by [rand::thread_rng].
    pub fn thread() -> RandomKinds<ThreadRng> {
        RandomKinds::new(rand::thread_rng())
    }
}

impl<R: Rng> KindSource for RandomKinds<R> {
    #[inline]
    fn next_kind(&mut self) -> Kind {
        self.rng.gen()
    }
}

/// Repeats a fixed, non-empty list of normal [kinds](Kind) in order, looping back to the first
/// kind after the last.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KindSequence {
    kinds: Vec<Kind>,
    next: usize,
}

impl KindSequence {
    /// Drops any [Kind::Prism] from `kinds`.
    ///
    /// # Returns
    ///
    /// [None] if no normal kinds remain. Otherwise, a sequence starting at the first kind.
    pub fn new(kinds: impl IntoIterator<Item = Kind>) -> Option<KindSequence> {
        let kinds: Vec<Kind> = kinds
            .into_iter()
            .filter(|kind| {
                if kind.is_prism() {
                    debug!("skipping prism in kind sequence");
                }
                !kind.is_prism()
            })
            .collect();
        if kinds.is_empty() {
            return None;
        }

        Some(KindSequence { kinds, next: 0 })
    }
}

impl KindSource for KindSequence {
    fn next_kind(&mut self) -> Kind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Breaks the [KindSource] contract by returning only prisms.
    #[derive(Debug)]
    struct PrismKinds;

    impl KindSource for PrismKinds {
        fn next_kind(&mut self) -> Kind {
            Kind::Prism
        }
    }

    #[test]
    fn next_normal_kind_passes_normal_kinds() {
        let mut kinds = KindSequence::new(Kind::normal_kinds())
            .expect("KindSequence::new should return Some");

        for expected_kind in Kind::normal_kinds() {
            assert_eq!(expected_kind, next_normal_kind(&mut kinds));
        }
    }

    #[test]
    fn next_normal_kind_replaces_prism() {
        for _ in 0..100 {
            assert!(!next_normal_kind(&mut PrismKinds).is_prism());
        }
    }

    #[test]
    fn random_kinds_never_prism() {
        let mut kinds = RandomKinds::thread();
        for _ in 0..1_000 {
            assert!(!kinds.next_kind().is_prism());
        }
    }

    #[test]
    fn kind_sequence_empty() {
        assert!(KindSequence::new([]).is_none());
    }

    #[test]
    fn kind_sequence_only_prisms() {
        assert!(KindSequence::new([Kind::Prism, Kind::Prism]).is_none());
    }

    #[test]
    fn kind_sequence_loops() {
        let mut kinds = KindSequence::new([Kind::Jade, Kind::Prism, Kind::Rose])
            .expect("KindSequence::new should return Some");

        let actual_kinds: Vec<Kind> = (0..5).map(|_| kinds.next_kind()).collect();

        assert_eq!(
            vec![Kind::Jade, Kind::Rose, Kind::Jade, Kind::Rose, Kind::Jade],
            actual_kinds
        );
    }

    #[test]
    fn mut_reference_advances_source() {
        fn draw(mut kinds: impl KindSource) -> Kind {
            kinds.next_kind()
        }
        let mut kinds = KindSequence::new([Kind::Aqua, Kind::Violet])
            .expect("KindSequence::new should return Some");

        assert_eq!(Kind::Aqua, draw(&mut kinds));
        assert_eq!(Kind::Violet, kinds.next_kind());
    }
}
