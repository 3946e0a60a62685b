//! Simulation step and placement transitions
//!
//! `integrate` advances the moving block by wall-clock time, `attempt_placement`
//! drops it onto the stack, `request_quit` ends the run from any phase.

use glam::Vec2;

use super::overlap::Overlap;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Outcome of a single placement attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Run already over; nothing changed
    Ignored,
    /// Block landed, play continues
    Placed { overlap: f32, stack_len: usize },
    /// Block landed and completed the tower
    Won { overlap: f32 },
    /// Block missed (overlap <= 0)
    Missed { overlap: f32 },
}

/// Advance the moving block by `elapsed` seconds.
///
/// Walls only force the sign of the velocity; the block is not pushed back
/// inside, so it may poke past a wall for the frame the reflection fires.
pub fn integrate(state: &mut GameState, elapsed: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let moving = &mut state.moving;
    moving.block.center += elapsed * moving.vel;

    if moving.block.left() < WALL_LEFT {
        moving.vel.x = moving.vel.x.abs();
    }
    if moving.block.right() > WALL_RIGHT {
        moving.vel.x = -moving.vel.x.abs();
    }
}

/// Drop the moving block onto the top of the stack.
pub fn attempt_placement(state: &mut GameState) -> Placement {
    if state.phase != GamePhase::Playing {
        return Placement::Ignored;
    }

    let overlap = Overlap::between(state.top(), &state.moving.block);
    if !overlap.is_positive() {
        state.phase = GamePhase::Lost;
        log::debug!("Missed by {:.3}", -overlap.len());
        return Placement::Missed {
            overlap: overlap.len(),
        };
    }

    // Trim to the overlap; the trimmed width carries into every later block
    state.moving.block.center.x = overlap.center();
    state.moving.block.half_width = overlap.half_width();
    let placed = state.moving.block;
    state.push(placed);

    let stack_len = state.stack().len();
    log::debug!(
        "Placed block {} (overlap {:.3}, x {:.3})",
        stack_len,
        overlap.len(),
        overlap.center()
    );

    if stack_len == TARGET_STACK_LEN {
        state.phase = GamePhase::Won;
        return Placement::Won {
            overlap: overlap.len(),
        };
    }

    // Same instance becomes the next block; velocity is kept as-is
    state.moving.block.center += Vec2::splat(BLOCK_HEIGHT);

    Placement::Placed {
        overlap: overlap.len(),
        stack_len,
    }
}

/// End the run regardless of the current phase
pub fn request_quit(state: &mut GameState) {
    state.phase = GamePhase::Quit;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::MovingBlock;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    fn state_with(x: f32, half_width: f32, speed: f32) -> GameState {
        GameState::with_moving(MovingBlock::new(
            Vec2::new(x, MOVING_START_Y),
            half_width,
            speed,
        ))
    }

    #[test]
    fn test_integrate_moves_horizontally() {
        let mut state = GameState::new();
        integrate(&mut state, 0.1);
        assert_close(state.moving.block.center.x, 0.2);
        assert_close(state.moving.block.center.y, MOVING_START_Y);
        assert_eq!(state.moving.vel.y, 0.0);
    }

    #[test]
    fn test_integrate_reflects_at_right_wall() {
        let mut state = state_with(0.75, 0.2, 2.0);
        integrate(&mut state, 0.05);
        // Crossed the wall: velocity flipped, position not corrected
        assert_close(state.moving.block.center.x, 0.85);
        assert!(state.moving.block.right() > WALL_RIGHT);
        assert_eq!(state.moving.vel.x, -2.0);
    }

    #[test]
    fn test_integrate_reflects_at_left_wall() {
        let mut state = state_with(-0.75, 0.2, -2.0);
        integrate(&mut state, 0.05);
        assert_eq!(state.moving.vel.x, 2.0);
    }

    #[test]
    fn test_reflection_forces_sign_not_flip() {
        // Already heading away from the left wall while still past it
        let mut state = state_with(-0.9, 0.2, 2.0);
        integrate(&mut state, 0.01);
        assert_eq!(state.moving.vel.x, 2.0);
        integrate(&mut state, 0.01);
        assert_eq!(state.moving.vel.x, 2.0);
    }

    #[test]
    fn test_integrate_frozen_after_run_ends() {
        let mut state = GameState::new();
        state.phase = GamePhase::Lost;
        let before = state.moving;
        integrate(&mut state, 1.0);
        assert_eq!(state.moving, before);
    }

    #[test]
    fn test_placement_shrinks_and_lifts() {
        let mut state = state_with(0.3, 0.2, 2.0);
        let placement = attempt_placement(&mut state);

        match placement {
            Placement::Placed { overlap, stack_len } => {
                assert_close(overlap, 0.1);
                assert_eq!(stack_len, 2);
            }
            other => panic!("unexpected {other:?}"),
        }

        let top = state.top();
        assert_close(top.center.x, 0.15);
        assert_close(top.center.y, -0.7);
        assert_close(top.half_width, 0.05);

        assert_close(state.moving.block.center.x, 0.35);
        assert_close(state.moving.block.center.y, -0.5);
        assert_close(state.moving.block.half_width, 0.05);
        assert_eq!(state.moving.vel, Vec2::new(2.0, 0.0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_placement_keeps_reflected_velocity() {
        let mut state = state_with(0.1, 0.2, -2.0);
        attempt_placement(&mut state);
        assert_eq!(state.moving.vel.x, -2.0);
    }

    #[test]
    fn test_miss_loses() {
        let mut state = state_with(0.5, 0.2, 2.0);
        let before = state.moving;
        let placement = attempt_placement(&mut state);

        assert!(matches!(placement, Placement::Missed { overlap } if (overlap + 0.1).abs() < 1e-5));
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.moving, before);
    }

    #[test]
    fn test_zero_overlap_loses() {
        let mut state = state_with(0.4, 0.2, 2.0);
        let placement = attempt_placement(&mut state);
        assert!(matches!(placement, Placement::Missed { .. }));
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_tenth_block_wins() {
        let mut state = GameState::new();
        for expected_len in 2..TARGET_STACK_LEN {
            // Line the moving block up with the top so every drop lands fully
            state.moving.block.center.x = state.top().center.x;
            let placement = attempt_placement(&mut state);
            assert!(
                matches!(placement, Placement::Placed { stack_len, .. } if stack_len == expected_len)
            );
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.stack().len(), 9);

        state.moving.block.center.x = state.top().center.x;
        assert!(matches!(attempt_placement(&mut state), Placement::Won { .. }));
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.stack().len(), 10);

        // Nothing more is accepted
        assert_eq!(attempt_placement(&mut state), Placement::Ignored);
        assert_eq!(state.stack().len(), 10);
    }

    #[test]
    fn test_quit_overrides_any_phase() {
        for phase in [
            GamePhase::Playing,
            GamePhase::Won,
            GamePhase::Lost,
            GamePhase::Quit,
        ] {
            let mut state = GameState::new();
            state.phase = phase;
            request_quit(&mut state);
            assert_eq!(state.phase, GamePhase::Quit);
        }
    }

    #[test]
    fn test_placement_ignored_after_quit() {
        let mut state = GameState::new();
        request_quit(&mut state);
        assert_eq!(attempt_placement(&mut state), Placement::Ignored);
        assert_eq!(state.stack().len(), 1);
    }
}
