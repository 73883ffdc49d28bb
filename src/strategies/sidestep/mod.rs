mod chooser;
pub mod safety;
mod taunts;

#[cfg(test)]
mod fixtures;

use color_eyre::{eyre::ensure, Result};
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;

use super::Strategy;
use crate::api::models::{GameState, Movement};

/// A one-ply reactive snake: filter out the moves that lose this turn, then
/// grab adjacent food or wander. No search, no simulation.
pub struct Sidestep;

impl Strategy for Sidestep {
    fn get_movement(&self, game_state: GameState) -> Result<Movement> {
        decide(&game_state, &mut rand::thread_rng())
    }
}

/// Runs the filter-then-choose pipeline for one turn. The random source is
/// injected so tests can pin tie-breaks with a seeded generator.
///
/// # Errors
///
/// Fails fast on snapshots the host should never send: an empty body or a
/// degenerate board.
pub fn decide(state: &GameState, rng: &mut impl Rng) -> Result<Movement> {
    ensure!(
        !state.you.body.is_empty(),
        "snake {} arrived with an empty body",
        state.you.id
    );
    ensure!(
        state.board.width > 0 && state.board.height > 0,
        "degenerate board of {}x{}",
        state.board.width,
        state.board.height
    );

    let safety = safety::evaluate(state);
    debug!(
        "turn {}: safe moves [{}]",
        state.turn,
        safety.safe_directions().join(", ")
    );

    let movement = chooser::choose(state, &safety, rng);
    info!("turn {}: moving {movement}", state.turn);

    Ok(Movement {
        movement,
        shout: taunts::pick(state.turn, rng),
    })
}
