use log::warn;
use rand::{seq::SliceRandom, Rng};

use super::safety::SafetyMap;
use crate::api::{models::GameState, types::Direction};

/// Fallback when every direction is forbidden. The turn is already lost
/// under the game rules; the host still expects a well-formed answer.
const LAST_RESORT: Direction = Direction::Down;

/// Reduces the safety map to exactly one direction: prefer a safe move that
/// lands on food, otherwise any safe move, uniformly at random.
pub fn choose(
    state: &GameState,
    safety: &SafetyMap,
    rng: &mut impl Rng,
) -> Direction {
    let safe: Vec<Direction> = safety.safe_directions().collect();

    if safe.is_empty() {
        warn!(
            "turn {}: no safe moves left, moving {LAST_RESORT}",
            state.turn
        );
        return LAST_RESORT;
    }

    let feeding = toward_food(state, &safe);
    let candidates = if feeding.is_empty() { &safe } else { &feeding };

    candidates.choose(rng).copied().unwrap_or(LAST_RESORT)
}

// Immediate adjacency only; no path distance is computed.
fn toward_food(state: &GameState, safe: &[Direction]) -> Vec<Direction> {
    safe.iter()
        .copied()
        .filter(|d| state.board.food.contains(&state.you.head.step(*d)))
        .collect()
}
