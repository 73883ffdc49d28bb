use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub enum APIVersion {
    #[serde(rename = "1")]
    One,
}

/// The four cardinal moves, with up = +y (the host puts 0,0 bottom left).
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Iterates the directions in canonical order. Tie-breaks are randomized
    /// downstream, so the order only pins down test reproducibility.
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    /// The cell one step away in the given direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Coord {
        let (dx, dy) = match direction {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Serialize, Debug)]
pub enum Head {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "caffeine")]
    Caffeine,
    #[serde(rename = "gamer")]
    Gamer,
    #[serde(rename = "safe")]
    Safe,
    #[serde(rename = "shades")]
    Shades,
    #[serde(rename = "sneaky")]
    Sneaky,
    #[serde(rename = "viper")]
    Viper,
}

#[derive(Serialize, Debug)]
pub enum Tail {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "bolt")]
    Bolt,
    #[serde(rename = "coffee")]
    Coffee,
    #[serde(rename = "curled")]
    Curled,
    #[serde(rename = "freckled")]
    Freckled,
    #[serde(rename = "sharp")]
    Sharp,
}
