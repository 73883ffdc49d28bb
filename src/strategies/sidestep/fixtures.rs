use crate::api::{
    models::{Board, Game, GameState, Ruleset, Snake},
    types::Coord,
};

pub fn snake(id: &str, health: i64, body: &[(i64, i64)]) -> Snake {
    let body: Vec<Coord> =
        body.iter().map(|&(x, y)| Coord { x, y }).collect();
    Snake {
        id: id.to_owned(),
        name: id.to_owned(),
        health,
        head: body.first().copied().unwrap_or(Coord { x: 0, y: 0 }),
        length: body.len() as u64,
        body,
        latency: 0,
        shout: String::new(),
        squad: String::new(),
        customizations: None,
    }
}

/// Builds a snapshot with the first snake as "you".
pub fn state(
    width: i64,
    height: i64,
    snakes: Vec<Snake>,
    food: &[(i64, i64)],
) -> GameState {
    GameState {
        game: Game {
            id: "fixture-game".to_owned(),
            ruleset: Ruleset {
                name: "standard".to_owned(),
                version: "v1.2.3".to_owned(),
                settings: None,
            },
            map: None,
            source: None,
            timeout: 500,
        },
        turn: 3,
        you: snakes[0].clone(),
        board: Board {
            width,
            height,
            food: food.iter().map(|&(x, y)| Coord { x, y }).collect(),
            hazards: Vec::new(),
            snakes,
        },
    }
}
