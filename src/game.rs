use std::{process::exit, thread::sleep, time::Duration};

use crate::config::{SimConfig, TICK_INTERVAL_MS, TICKS_UNTIL_UPDATE};
use crate::error::SnakeError;
use crate::sim::{Simulation, StepOutcome};
use crate::snake::Direction::{self, *};
use crate::term::TermManager;

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use log::{debug, error, info};

pub struct SnakeGame {
    sim: Simulation,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: SimConfig) -> Result<Self, SnakeError> {
        let sim = Simulation::new(config)?;
        Ok(SnakeGame { sim, term: TermManager::new() })
    }

    pub fn initialize(&mut self) {
        self.term.setup();
    }

    pub fn play(&mut self) -> Result<(), SnakeError> {
        let mut ticks_until_step = 1;

        loop {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            // Direction only changes between steps, never during one
            for key_ev in self.term.read_key_events_queue() {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => self.sim.set_direction(Up),
                        KeyCode::Char('a') | KeyCode::Left => self.sim.set_direction(Left),
                        KeyCode::Char('s') | KeyCode::Down => self.sim.set_direction(Down),
                        KeyCode::Char('d') | KeyCode::Right => self.sim.set_direction(Right),
                        _ => {}
                    }
                }
            }

            ticks_until_step -= 1;
            if ticks_until_step == 0 {
                ticks_until_step = TICKS_UNTIL_UPDATE;

                let outcome = match self.sim.step() {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!("Step {} failed: {}", self.sim.frame(), e);
                        self.term.restore();
                        return Err(e);
                    }
                };

                if let StepOutcome::Moved { old_head, new_head, vacated } = outcome {
                    debug!("Head {:?} -> {:?}, vacated {:?}", old_head, new_head, vacated);
                }

                self.draw(outcome);
            }
        } // Game loop
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) {
        info!("Quitting after {} frames", self.sim.frame());
        self.term.restore();
        exit(0);
    }

    fn draw(&mut self, outcome: StepOutcome) {
        let status = status_line(self.sim.frame(), self.sim.score(), self.sim.direction(), outcome);
        self.term.draw_frame(&self.sim.grid().serialize(), &status);
    }
}

fn status_line(frame: u64, score: usize, direction: Direction, outcome: StepOutcome) -> String {
    let mut status = format!("Frame: {}  Score: {}  Direction: {:?}", frame, score, direction);

    if outcome == StepOutcome::Blocked {
        status.push_str("  Blocked");
    }

    status
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
