use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// A set of values marked as explored.
pub trait Visited<V> {
    /// Marks `value`; returns true when it was not marked before.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

impl Visited<usize> for BitVec {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        let len = self.len();
        if value >= len {
            self.grow(value + 1 - len, false);
        }

        if self[value] {
            false
        } else {
            self.set(value, true);
            true
        }
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.get(*value).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn set_visit_returns_true_only_first_time() {
        let mut visited = FxHashSet::<usize>::default();

        assert!(!visited.is_visited(&10));
        assert!(visited.visit(10));
        assert!(visited.is_visited(&10));
        assert!(!visited.visit(10));
    }

    #[test]
    fn bitvec_visited_within_capacity() {
        let mut visited = BitVec::from_elem(8, false);
        for i in 0..8 {
            assert!(!visited.is_visited(&i));
        }

        assert!(visited.visit(3));
        assert!(visited.is_visited(&3));
        assert!(!visited.visit(3));
        assert_eq!(visited.len(), 8);
    }

    #[test]
    fn bitvec_visited_grows_past_capacity() {
        let mut visited = BitVec::new();
        assert!(!visited.is_visited(&20));

        assert!(visited.visit(20));
        assert_eq!(visited.len(), 21);
        assert!(visited.is_visited(&20));
        assert!(!visited.is_visited(&19));
    }

    #[test]
    fn random_stress_bitvec_matches_hashset() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5649_5349_5445_4421);
        let mut bits = BitVec::new();
        let mut reference = HashSet::new();

        for _ in 0..2_000 {
            let value: usize = rng.random_range(0..256);
            assert_eq!(bits.visit(value), reference.insert(value));
        }

        for value in 0..300 {
            assert_eq!(bits.is_visited(&value), reference.contains(&value));
        }
    }

    proptest! {
        #[test]
        fn prop_bitvec_and_set_agree(values in prop::collection::vec(0usize..128, 0..64)) {
            let mut bits = BitVec::new();
            let mut set = FxHashSet::default();

            for v in values {
                prop_assert_eq!(bits.visit(v), set.visit(v));
            }

            for v in 0..128 {
                prop_assert_eq!(bits.is_visited(&v), set.is_visited(&v));
            }
        }
    }
}
