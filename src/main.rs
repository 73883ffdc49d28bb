use battlesnake_sidestep::{
    api::{
        models::{GameState, Status},
        types::{APIVersion, Head, Tail},
    },
    strategies::{Sidestep, Strategy},
};
use color_eyre::Result;
use log::{error, info};
use warp::{http::Method, Filter};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug)]
struct InternalError;
impl warp::reject::Reject for InternalError {}

fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let describe = warp::get().and(warp::path::end().map(|| {
        warp::reply::json(&Status {
            apiversion: APIVersion::One,
            author:     AUTHOR.to_owned(),
            color:      "#2F6B4F".to_owned(),
            head:       Head::Viper,
            tail:       Tail::Curled,
            version:    VERSION.to_owned(),
        })
    }));

    let start = warp::post()
        .and(warp::path("start"))
        .and(warp::body::json())
        .map(|state: GameState| {
            info!("game {} started", state.game.id);
            String::new()
        });

    let do_move = warp::post()
        .and(warp::path("move"))
        .and(warp::body::json())
        .and_then(|state: GameState| async move {
            Sidestep
                .get_movement(state)
                .map(|movement| warp::reply::json(&movement))
                .map_err(|e| {
                    error!("failed to get move: {e}");
                    warp::reject::custom(InternalError)
                })
        });

    let end = warp::post()
        .and(warp::path("end"))
        .and(warp::body::json())
        .map(|state: GameState| {
            info!("game {} over after {} turns", state.game.id, state.turn);
            String::new()
        });

    let api = describe
        .or(start)
        .or(do_move)
        .or(end)
        .with(cors)
        .with(logging);

    warp::serve(api).run(([0, 0, 0, 0], port())).await;

    Ok(())
}
