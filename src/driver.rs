//! Per-frame loop
//!
//! One iteration is strictly ordered:
//! 1. drain pending input and apply each event's command, stopping at the
//!    first event that ends the run
//! 2. bail out if the run is over, before any simulation or drawing
//! 3. measure elapsed time and integrate once
//! 4. draw the stack plus moving block, then present

use crate::platform::{Command, EventSource, FrameClock, InputEvent, command_for};
use crate::renderer::{Rect, Renderer, scene_rects};
use crate::sim::{GamePhase, GameState, attempt_placement, integrate, request_quit};

/// Result of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// The run ended in this phase; no further frames should run
    Finished(GamePhase),
}

/// Owns the platform collaborators and drives the simulation with them
pub struct FrameDriver<E, R, C> {
    events: E,
    renderer: R,
    clock: C,
    /// Reused per-frame buffers
    pending: Vec<InputEvent>,
    rects: Vec<Rect>,
}

impl<E, R, C> FrameDriver<E, R, C>
where
    E: EventSource,
    R: Renderer,
    C: FrameClock,
{
    pub fn new(events: E, renderer: R, clock: C) -> Self {
        Self {
            events,
            renderer,
            clock,
            pending: Vec::new(),
            rects: Vec::new(),
        }
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Headless callers feed input between frames through this
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one frame
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if state.phase.is_terminal() {
            return StepOutcome::Finished(state.phase);
        }

        self.pending.clear();
        self.events.poll_events(&mut self.pending);

        for event in self.pending.drain(..) {
            if let InputEvent::Resized { width, height } = event {
                self.renderer.resize(width, height);
                continue;
            }

            match command_for(&event) {
                Some(Command::Place) => {
                    attempt_placement(state);
                }
                Some(Command::Quit) => {
                    log::info!("Quit requested");
                    request_quit(state);
                }
                None => {}
            }

            // Events after the deciding one are dropped with the drain
            if state.phase.is_terminal() {
                break;
            }
        }

        if state.phase.is_terminal() {
            return StepOutcome::Finished(state.phase);
        }

        let elapsed = self.clock.lap();
        integrate(state, elapsed);

        scene_rects(state, &mut self.rects);
        self.renderer.draw(&self.rects);
        self.renderer.present();

        StepOutcome::Continue
    }

    /// Run frames until the run ends, returning the final phase
    pub fn run(&mut self, state: &mut GameState) -> GamePhase {
        loop {
            if let StepOutcome::Finished(phase) = self.step(state) {
                return phase;
            }
        }
    }
}
