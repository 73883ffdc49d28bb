use crate::api::{
    models::{Board, GameState, Snake},
    types::{Coord, Direction},
};

/// Per-direction safety flags for one turn, indexed by `Direction`.
///
/// Every flag starts true and `forbid` only ever clears, so the hazard
/// checks commute and re-running them changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyMap([bool; 4]);

impl SafetyMap {
    #[must_use]
    pub const fn all_safe() -> Self {
        Self([true; 4])
    }

    #[must_use]
    pub const fn is_safe(&self, direction: Direction) -> bool {
        self.0[direction as usize]
    }

    pub fn forbid(&mut self, direction: Direction) {
        self.0[direction as usize] = false;
    }

    /// The surviving directions, in canonical order.
    pub fn safe_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().copied().filter(|d| self.is_safe(*d))
    }
}

impl Default for SafetyMap {
    fn default() -> Self {
        Self::all_safe()
    }
}

/// Flags every direction that loses outright this turn: leaving the board,
/// stepping onto a body, or contesting a head-on cell against an
/// equal-or-healthier opponent.
///
/// Expects a well-formed snapshot; `decide` validates before calling in.
#[must_use]
pub fn evaluate(state: &GameState) -> SafetyMap {
    let mut safety = SafetyMap::all_safe();
    check_own_body(&mut safety, &state.you);
    check_bounds(&mut safety, state.you.head, &state.board);
    check_opponent_bodies(&mut safety, &state.you, &state.board);
    check_head_to_head(&mut safety, &state.you, &state.board);
    safety
}

fn forbid_collisions(safety: &mut SafetyMap, head: Coord, cells: &[Coord]) {
    for cell in cells {
        for direction in Direction::iter().copied() {
            if safety.is_safe(direction) && head.step(direction) == *cell {
                safety.forbid(direction);
            }
        }
    }
}

// The tail cell usually vacates by the time moves resolve, but stacks after a
// meal; it is treated as occupied either way.
fn check_own_body(safety: &mut SafetyMap, you: &Snake) {
    forbid_collisions(safety, you.head, you.body.get(1..).unwrap_or(&[]));
}

fn check_bounds(safety: &mut SafetyMap, head: Coord, board: &Board) {
    if head.y == board.height - 1 {
        safety.forbid(Direction::Up);
    }
    if head.y == 0 {
        safety.forbid(Direction::Down);
    }
    if head.x == 0 {
        safety.forbid(Direction::Left);
    }
    if head.x == board.width - 1 {
        safety.forbid(Direction::Right);
    }
}

fn check_opponent_bodies(safety: &mut SafetyMap, you: &Snake, board: &Board) {
    for other in board.snakes.iter().filter(|s| s.id != you.id) {
        forbid_collisions(safety, you.head, &other.body);
    }
}

// A shared landing cell against a healthier opponent is a loss, against an
// equal one a mutual knockout. Weaker opponents do not disqualify a cell,
// per-opponent, never aggregated.
fn check_head_to_head(safety: &mut SafetyMap, you: &Snake, board: &Board) {
    for other in board.snakes.iter().filter(|s| s.id != you.id) {
        if other.health < you.health {
            continue;
        }
        for direction in Direction::iter().copied() {
            if !safety.is_safe(direction) {
                continue;
            }
            let landing = you.head.step(direction);
            if Direction::iter().any(|d| other.head.step(*d) == landing) {
                safety.forbid(direction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, SafetyMap};
    use crate::{
        api::types::{Coord, Direction},
        strategies::sidestep::fixtures,
    };

    fn safe_set(safety: &SafetyMap) -> Vec<Direction> {
        safety.safe_directions().collect()
    }

    #[test]
    fn own_trailing_body_blocks_a_direction() {
        let you = fixtures::snake("you", 100, &[(5, 5), (5, 4), (5, 3)]);
        let state = fixtures::state(11, 11, vec![you], &[]);

        let safety = evaluate(&state);
        assert!(!safety.is_safe(Direction::Down));
        assert_eq!(
            safe_set(&safety),
            vec![Direction::Up, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn board_edges_block_departing_moves() {
        let you = fixtures::snake("you", 100, &[(0, 5)]);
        let state = fixtures::state(11, 11, vec![you], &[]);

        let safety = evaluate(&state);
        assert!(!safety.is_safe(Direction::Left));
        assert_eq!(
            safe_set(&safety),
            vec![Direction::Up, Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn corners_block_two_moves() {
        let you = fixtures::snake("you", 100, &[(0, 0)]);
        let state = fixtures::state(11, 11, vec![you], &[]);

        let safety = evaluate(&state);
        assert_eq!(safe_set(&safety), vec![Direction::Up, Direction::Right]);
    }

    #[test]
    fn opponent_heads_are_body_cells_regardless_of_health() {
        // the opponent's current head cell is occupied like any other body
        // segment, even though it is weaker.
        let you = fixtures::snake("you", 50, &[(5, 5), (4, 5)]);
        let other = fixtures::snake("other", 10, &[(6, 5), (7, 5)]);
        let state = fixtures::state(11, 11, vec![you, other], &[]);

        let safety = evaluate(&state);
        assert!(!safety.is_safe(Direction::Right));
    }

    #[test]
    fn contested_cells_only_count_for_healthier_opponents() {
        // both opponents can reach a cell adjacent to us next turn; only the
        // equal-or-healthier one forbids it.
        let you = fixtures::snake("you", 50, &[(5, 5), (4, 5)]);
        let healthier = fixtures::snake("healthier", 80, &[(5, 7), (5, 8)]);
        let weaker = fixtures::snake("weaker", 30, &[(7, 5), (8, 5)]);
        let state = fixtures::state(11, 11, vec![you, healthier, weaker], &[]);

        let safety = evaluate(&state);
        // up lands on (5, 6), reachable by the healthier snake's down move.
        assert!(!safety.is_safe(Direction::Up));
        // right lands on (6, 5), reachable only by the weaker snake.
        assert!(safety.is_safe(Direction::Right));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let you = fixtures::snake("you", 50, &[(1, 1), (1, 2), (2, 2)]);
        let other = fixtures::snake("other", 90, &[(3, 1), (3, 0)]);
        let state = fixtures::state(11, 11, vec![you, other], &[(0, 0)]);

        assert_eq!(evaluate(&state), evaluate(&state));
    }

    #[test]
    fn safe_directions_never_lose_outright() {
        // sweep a single-cell snake over every board position against a fixed
        // equal-health opponent and cross-check each surviving direction.
        let other = fixtures::snake("other", 100, &[(2, 2), (2, 1), (1, 1)]);

        for x in 0..5 {
            for y in 0..5 {
                let you = fixtures::snake("you", 100, &[(x, y)]);
                let state =
                    fixtures::state(5, 5, vec![you, other.clone()], &[]);
                let safety = evaluate(&state);

                for direction in safety.safe_directions() {
                    let landing = Coord { x, y }.step(direction);

                    assert!(landing.x >= 0 && landing.x < 5);
                    assert!(landing.y >= 0 && landing.y < 5);
                    assert!(!other.body.contains(&landing));
                    assert!(Direction::iter()
                        .all(|d| other.head.step(*d) != landing));
                }
            }
        }
    }
}
