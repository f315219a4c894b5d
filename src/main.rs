mod config;
mod error;
mod game;
mod grid;
mod sim;
mod snake;
mod term;

use std::{fs::File, process::exit};

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::{SimConfig, LOG_FILE};
use crate::error::SnakeError;

pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);

fn main() {
    if let Err(e) = run() {
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run() -> Result<(), SnakeError> {
    // The terminal belongs to the renderer, so diagnostics go to a file
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)?;
    info!("Starting snake");

    let mut game = game::SnakeGame::new(SimConfig::default())?;
    game.initialize();

    // The game loop takes care of exiting cleanly on CTRL+C
    game.play()
}
