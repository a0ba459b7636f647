use alloc::vec::Vec;

use super::*;

/// Uniformly random placement from a seed: a partial Fisher–Yates shuffle over flat tile
/// indices, keeping the first `mines` of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeded from the thread-local RNG, call [`Self::seed`] to replay the same board.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let (width, height) = config.size;
        let total_tiles = config.total_tiles();

        // optimize for full boards
        if config.mines >= total_tiles {
            if config.mines > total_tiles {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_tiles
                );
            }
            return MineLayout::from_mine_mask(
                config.size,
                Array2::from_elem(nd_shape(config.size), true),
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut indices: Vec<CellCount> = (0..total_tiles).collect();
        let (chosen, _) = indices.partial_shuffle(&mut rng, config.mines as usize);

        let mut mine_mask: Array2<bool> = Array2::default(nd_shape(config.size));
        let row = CellCount::from(width);
        for &index in chosen.iter() {
            let coords = ((index % row) as Coord, (index / row) as Coord);
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = MineLayout::from_mine_mask(config.size, mine_mask);

        // double check mine count
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        log::debug!(
            "Generated {}x{} minefield with {} mines from seed {}",
            width,
            height,
            layout.mine_count(),
            self.seed
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        for (size, mines) in [((1, 1), 1), ((3, 3), 1), ((9, 9), 10), ((30, 24), 200)] {
            let config = GameConfig::new(size, mines).unwrap();
            for seed in 0..8 {
                let layout = RandomMineGenerator::new(seed).generate(config);
                assert_eq!(layout.mine_count(), mines, "size {size:?} seed {seed}");
                assert_eq!(layout.size(), size);
            }
        }
    }

    #[test]
    fn full_board_is_all_mines() {
        let config = GameConfig::new((4, 3), 12).unwrap();
        let layout = RandomMineGenerator::new(7).generate(config);
        assert_eq!(layout.mine_count(), 12);
        assert!((0..4).all(|x| (0..3).all(|y| layout[(x, y)])));
    }

    #[test]
    fn all_but_one_leaves_single_safe_tile() {
        let config = GameConfig::new((5, 5), 24).unwrap();
        let layout = RandomMineGenerator::new(3).generate(config);
        let safe = (0..5)
            .flat_map(|x| (0..5).map(move |y| (x, y)))
            .filter(|&coords| !layout[coords])
            .count();
        assert_eq!(safe, 1);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new((16, 16), 40).unwrap();
        let a = RandomMineGenerator::new(42).generate(config);
        let b = RandomMineGenerator::new(42).generate(config);
        assert_eq!(a, b);
    }

    #[test]
    fn mines_spread_over_the_whole_board() {
        let config = GameConfig::new((4, 4), 1).unwrap();
        let mut hit = [[false; 4]; 4];
        for seed in 0..400 {
            let layout = RandomMineGenerator::new(seed).generate(config);
            for x in 0..4u16 {
                for y in 0..4u16 {
                    if layout[(x, y)] {
                        hit[y as usize][x as usize] = true;
                    }
                }
            }
        }
        assert!(hit.iter().flatten().all(|&h| h));
    }
}
