use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// A layout is its own generator, which lets fixed boards go through the same
/// construction path as random ones.
impl MineGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> MineLayout {
        if self.game_config() != config {
            log::warn!(
                "Fixed layout {:?} does not match requested config {:?}, using layout",
                self.game_config(),
                config
            );
        }
        self
    }
}
