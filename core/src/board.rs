use alloc::vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid plus the counters the renderer and session read from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    tiles: Array2<Tile>,
    mine_count: CellCount,
    flags_remaining: isize,
    revealed_safe: CellCount,
    detonated: bool,
}

impl Board {
    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        let mut board = Self {
            size,
            tiles: Array2::default(nd_shape(size)),
            mine_count: layout.mine_count(),
            flags_remaining: layout.mine_count() as isize,
            revealed_safe: 0,
            detonated: false,
        };

        for coords in board.iter_coords() {
            board.tiles[coords.to_nd_index()].mine = layout[coords];
        }

        // the 3x3 scan counts the tile itself, subtract it back out
        for coords in board.iter_coords() {
            let in_block: u8 = BLOCK
                .iter()
                .map(|&delta| u8::from(board.tile_offset(coords, delta).mine))
                .sum();
            let tile = &mut board.tiles[coords.to_nd_index()];
            tile.adjacent_mines = in_block - u8::from(tile.mine);
        }

        board
    }

    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Flags still available: starts at the mine count, goes down by one per flag
    /// placed and can go negative when the player over-flags.
    pub fn flags_remaining(&self) -> isize {
        self.flags_remaining
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    /// Every tile that is not a mine has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.revealed_safe == self.game_config().safe_tiles()
    }

    /// Some mine has been revealed.
    pub fn detonated(&self) -> bool {
        self.detonated
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }

    /// Tile at `coords`, or [`Tile::SENTINEL`] when out of bounds.
    pub fn tile(&self, coords: Coord2) -> Tile {
        self.tiles
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(Tile::SENTINEL)
    }

    /// Tile at `coords + delta`, or [`Tile::SENTINEL`] when that leaves the board.
    pub fn tile_offset(&self, coords: Coord2, delta: Delta) -> Tile {
        apply_delta(coords, delta, self.size).map_or(Tile::SENTINEL, |pos| self.tile(pos))
    }

    pub fn view(&self, coords: Coord2, show_mines: bool) -> TileView {
        TileView::of(self.tile(coords), show_mines)
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size;
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// Reveals the tile at `coords`, opening the surrounding region when it has no
    /// adjacent mines. Returns `false` iff a mine was uncovered.
    ///
    /// Revealing a flagged tile retracts the flag first. The fan-out uses an explicit
    /// worklist, so region size does not affect stack depth.
    pub fn reveal(&mut self, coords: Coord2) -> bool {
        if !self.in_bounds(coords) {
            return true;
        }
        if self.tile(coords).is_detonated() {
            return false;
        }

        let mut safe = true;
        let mut opened: CellCount = 0;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let tile = &mut self.tiles[visit_coords.to_nd_index()];

            if tile.flagged {
                tile.flagged = false;
                self.flags_remaining += 1;
            }
            if tile.revealed {
                continue;
            }

            tile.revealed = true;
            if tile.mine {
                log::debug!("Mine revealed at {:?}", visit_coords);
                self.detonated = true;
                safe = false;
                continue;
            }

            self.revealed_safe += 1;
            opened += 1;

            if tile.adjacent_mines == 0 {
                let tiles = &self.tiles;
                to_visit.extend(
                    NeighborIter::new(visit_coords, self.size)
                        .filter(|pos| tiles[pos.to_nd_index()].is_hidden()),
                );
            }
        }

        log::trace!("Reveal at {:?} opened {} tiles", coords, opened);
        safe
    }

    /// Places or removes a flag on a hidden tile. Revealed and out-of-bounds tiles
    /// are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(tile) = self.tiles.get_mut(coords.to_nd_index()) else {
            return MarkOutcome::NoChange;
        };
        if tile.revealed {
            return MarkOutcome::NoChange;
        }

        tile.flagged = !tile.flagged;
        if tile.flagged {
            self.flags_remaining -= 1;
        } else {
            self.flags_remaining += 1;
        }
        log::trace!(
            "Flag at {:?} set to {}, {} remaining",
            coords,
            tile.flagged,
            self.flags_remaining
        );
        MarkOutcome::Changed
    }
}
