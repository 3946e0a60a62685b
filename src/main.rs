//! Stacko entry point
//!
//! Opens the window, then hands control to the frame driver until the run ends.

use std::process::ExitCode;

use stacko::platform::{SystemClock, native};
use stacko::sim::{GamePhase, GameState};
use stacko::{FrameDriver, Settings, StartupError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Settings::load()) {
        Ok(phase) => {
            match phase {
                GamePhase::Won => log::info!("You win!"),
                GamePhase::Lost => log::info!("You lose!"),
                GamePhase::Quit | GamePhase::Playing => log::info!("Bye"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<GamePhase, StartupError> {
    let (events, renderer) = native::open(settings)?;

    let mut state = GameState::new();
    log::info!("Get to the top of the screen to win!");

    let mut driver = FrameDriver::new(events, renderer, SystemClock::new());
    Ok(driver.run(&mut state))
}
