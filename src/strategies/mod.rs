pub mod sidestep;

use color_eyre::Result;
pub use sidestep::Sidestep;

use crate::api::models::{GameState, Movement};

pub trait Strategy {
    /// # Errors
    ///
    /// Can fail for a wide range of reasons usually due to invalid game states.
    fn get_movement(&self, game_state: GameState) -> Result<Movement>;
}
