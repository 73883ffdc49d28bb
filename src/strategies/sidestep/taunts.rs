use rand::{seq::SliceRandom, Rng};

/// Turns between shouts. Shouts are relayed to spectators and carry no
/// weight in the move logic.
const CADENCE: u64 = 25;

const TAUNTS: &[&str] = &[
    "you call that a flank?",
    "plenty of board for everyone but you",
    "still here, still hungry",
    "watch the tail",
    "four directions and all of them mine",
];

pub fn pick(turn: u64, rng: &mut impl Rng) -> Option<String> {
    if turn == 0 || turn % CADENCE != 0 {
        return None;
    }
    TAUNTS.choose(rng).map(|taunt| (*taunt).to_owned())
}
