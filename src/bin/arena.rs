use std::{fmt, process::Command};

use color_eyre::Result;

enum GameMode {
    Solo,
    Standard,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

struct PlayOptions {
    board_width:  u64,
    board_height: u64,
    mode:         GameMode,
}

struct Snake {
    name: String,
    url:  String,
}

fn make_play_command(play_options: &PlayOptions, snakes: &[Snake]) -> Command {
    let mut cmd = Command::new("battlesnake");
    cmd.arg("play");

    cmd.arg("--width");
    cmd.arg(play_options.board_width.to_string());
    cmd.arg("--height");
    cmd.arg(play_options.board_height.to_string());

    for snake in snakes {
        cmd.arg("--name");
        cmd.arg(&snake.name);

        cmd.arg("--url");
        cmd.arg(&snake.url);
    }

    cmd.arg("--gametype");
    cmd.arg(play_options.mode.to_string());

    cmd.arg("--browser");

    cmd
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut snakes = vec![Snake {
        name: "sidestep".to_owned(),
        url:  "http://localhost:8000".to_owned(),
    }];

    // point SIDESTEP_OPPONENT_URL at another server for a duel.
    let mode = match std::env::var("SIDESTEP_OPPONENT_URL") {
        Ok(url) => {
            snakes.push(Snake {
                name: "opponent".to_owned(),
                url,
            });
            GameMode::Standard
        }
        Err(_) => GameMode::Solo,
    };

    let mut play = make_play_command(
        &PlayOptions {
            board_width: 11,
            board_height: 11,
            mode,
        },
        &snakes,
    );

    play.status()?;

    Ok(())
}
