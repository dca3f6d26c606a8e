//! Random valid grids for property and stress tests.

use proptest::prelude::*;
use rand::Rng;

use crate::grid::{CellKind, Grid};

fn wall_or_open() -> impl Strategy<Value = CellKind> {
    prop_oneof![
        3 => Just(CellKind::Open),
        2 => Just(CellKind::Wall),
    ]
}

prop_compose! {
    /// Grids up to 8x8 with one start, one or two goals, and the rest walls
    /// or open cells.
    pub(crate) fn arb_grid()
        (dims in (1usize..=8, 1usize..=8).prop_filter("need room for start and goal", |(w, h)| w * h >= 2))
        (
            dims in Just(dims),
            mut kinds in prop::collection::vec(wall_or_open(), dims.0 * dims.1),
            start in 0..dims.0 * dims.1,
            goal_offsets in prop::collection::vec(1..dims.0 * dims.1, 1..=2),
        )
        -> Grid
    {
        let (width, height) = dims;
        let len = width * height;
        kinds[start] = CellKind::Start;
        for offset in goal_offsets {
            kinds[(start + offset) % len] = CellKind::Goal;
        }
        Grid::from_kinds(width, height, kinds).unwrap()
    }
}

/// Seeded counterpart of [`arb_grid`] for `rand`-driven stress loops.
pub(crate) fn random_grid<R: Rng>(rng: &mut R, max_width: usize, max_height: usize) -> Grid {
    let (width, height) = loop {
        let w = rng.random_range(1..=max_width);
        let h = rng.random_range(1..=max_height);
        if w * h >= 2 {
            break (w, h);
        }
    };
    let len = width * height;
    let wall_ratio = rng.random_range(0.1..0.5);

    let mut kinds: Vec<CellKind> = (0..len)
        .map(|_| {
            if rng.random_bool(wall_ratio) {
                CellKind::Wall
            } else {
                CellKind::Open
            }
        })
        .collect();

    let start = rng.random_range(0..len);
    kinds[start] = CellKind::Start;
    let goals = rng.random_range(1..=3);
    for _ in 0..goals {
        let offset = rng.random_range(1..len);
        kinds[(start + offset) % len] = CellKind::Goal;
    }

    Grid::from_kinds(width, height, kinds).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn starts(grid: &Grid) -> usize {
        grid.cells().filter(|cell| cell.kind == CellKind::Start).count()
    }

    #[test]
    fn random_grids_respect_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let g = random_grid(&mut rng, 5, 3);
            assert!((1..=5).contains(&g.width()));
            assert!((1..=3).contains(&g.height()));
            assert_eq!(starts(&g), 1);
            assert!(g.goals().count() >= 1);
        }
    }

    proptest! {
        #[test]
        fn prop_arb_grid_is_valid(g in arb_grid()) {
            prop_assert!((1..=8).contains(&g.width()));
            prop_assert!((1..=8).contains(&g.height()));
            prop_assert!(g.len() >= 2);
            prop_assert_eq!(starts(&g), 1);
            prop_assert!((1..=2).contains(&g.goals().count()));
            prop_assert_eq!(g.visited_count(), 0);
        }
    }
}
