//! Fixed-step tick driver
//!
//! Owns the game state, turns wall-clock time into 16 ms simulation steps,
//! stops stepping when a run ends and resumes after a restart.

use crate::consts::*;
use crate::highscores::{HighScoreEntry, HighScores};
use crate::platform::{InputQueue, InputSender};
use crate::settings::GameConfig;
use crate::sim::{GamePhase, GameState, InputEvent, TickInput, tick};
use crate::view::FrameView;

pub struct Session {
    state: GameState,
    input: InputQueue,
    /// Drained events that found no tick yet, oldest first
    carry: Vec<InputEvent>,
    accumulator: f32,
    /// Driver is armed (false once the run is over)
    running: bool,
    /// Let the autopilot drive
    pub autopilot: bool,
    best: HighScores,
    last_phase: GamePhase,
}

impl Session {
    /// The state is fully built here, so rendering before the first tick is fine
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config);
        log::info!(
            "Session started (mode {}, seed {}, {} enemies)",
            state.config.mode.as_str(),
            state.config.seed,
            state.enemies.len()
        );
        Self {
            last_phase: state.phase,
            state,
            input: InputQueue::new(),
            carry: Vec::new(),
            accumulator: 0.0,
            running: true,
            autopilot: false,
            best: HighScores::new(),
        }
    }

    /// Producer handle for a front end's input callbacks
    pub fn input_sender(&self) -> InputSender {
        self.input.sender()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.best
    }

    pub fn snapshot(&self) -> FrameView {
        FrameView::capture(&self.state)
    }

    /// Run as many fixed steps as `elapsed` seconds allow. Returns the number
    /// of ticks simulated.
    pub fn update(&mut self, elapsed: f32) -> u32 {
        let mut events = std::mem::take(&mut self.carry);
        events.extend(self.input.drain());

        if !self.running {
            // Only a restart re-arms the driver. Events after it go to the
            // fresh run on the restart tick.
            if let Some(i) = events.iter().position(|&e| e == InputEvent::Restart) {
                self.step(TickInput::with_events(events.split_off(i)));
                self.running = true;
                self.accumulator = 0.0;
            }
            return 0;
        }

        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut pending = TickInput {
            events,
            autopilot: self.autopilot,
        };
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // Events apply on the first substep only
            let input = std::mem::replace(
                &mut pending,
                TickInput {
                    events: Vec::new(),
                    autopilot: self.autopilot,
                },
            );
            self.step(input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            if !self.running {
                break;
            }
        }

        // Held back for the next frame, ahead of anything queued since
        self.carry = pending.events;

        substeps
    }

    /// Abandon the current run (finished or not) and start a fresh one
    pub fn restart(&mut self) {
        self.restart_with(self.state.config.clone());
    }

    /// Start a fresh run with different settings
    pub fn restart_with(&mut self, config: GameConfig) {
        log::info!("New run (mode {}, seed {})", config.mode.as_str(), config.seed);
        self.state = GameState::new(config);
        self.last_phase = self.state.phase;
        self.carry.clear();
        self.running = true;
        self.accumulator = 0.0;
    }

    /// Advance exactly one tick, ignoring wall-clock time
    pub fn step(&mut self, input: TickInput) {
        tick(&mut self.state, &input);

        let phase = self.state.phase;
        if phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, phase);
            if let GamePhase::GameOver { cause } = phase {
                self.running = false;
                self.accumulator = 0.0;
                let rank = self.best.add(HighScoreEntry {
                    score: self.state.score,
                    level: self.state.level,
                    ticks: self.state.time_ticks,
                    cause,
                });
                if let Some(rank) = rank {
                    log::info!("Run placed #{rank} this session (score {})", self.state.score);
                }
            }
            self.last_phase = phase;
        }
    }
}
