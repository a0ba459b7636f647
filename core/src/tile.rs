use serde::{Deserialize, Serialize};

/// One cell of the board as stored by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub adjacent_mines: u8,
    pub mine: bool,
    pub revealed: bool,
    pub flagged: bool,
}

impl Tile {
    /// What every out-of-bounds lookup yields: already revealed, safe, unflagged, zero.
    pub const SENTINEL: Tile = Tile {
        adjacent_mines: 0,
        mine: false,
        revealed: true,
        flagged: false,
    };

    pub const fn is_hidden(self) -> bool {
        !self.revealed
    }

    pub const fn is_detonated(self) -> bool {
        self.revealed && self.mine
    }
}

/// Player-visible state of a tile, what the renderer draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl TileView {
    /// `show_mines` uncovers every mine, used once the game is lost.
    pub const fn of(tile: Tile, show_mines: bool) -> Self {
        if tile.mine && (tile.revealed || show_mines) {
            Self::Mine
        } else if tile.flagged {
            Self::Flagged
        } else if tile.revealed {
            Self::Revealed(tile.adjacent_mines)
        } else {
            Self::Hidden
        }
    }
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}
