//! Fixed-rate simulation tick
//!
//! Order within a tick: input → physics → collision/scoring. Rendering reads
//! the resulting state afterwards.

use super::collision::{assess_touchdown, lander_terrain_collision};
use super::lander::Turn;
use super::scoring::score_landing;
use super::state::{GamePhase, GameState, Outcome};

/// Input commands for a single tick (sampled once per frame)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Rotate counter-clockwise (held)
    pub rotate_left: bool,
    /// Rotate clockwise (held)
    pub rotate_right: bool,
    /// Fire the engine (held)
    pub thrust: bool,
    /// Start over (edge-triggered, honoured only after the session ended)
    pub reset: bool,
}

/// Advance the session by one tick. `now` is the caller's clock in seconds.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    if state.is_game_over() {
        if input.reset {
            state.reset(now);
        }
        return;
    }

    state.time_ticks += 1;
    let elapsed = state.elapsed(now);

    let config = &state.config;
    let lander = &mut state.lander;

    if input.rotate_left {
        lander.rotate(Turn::Left, config.rotation_speed);
    }
    if input.rotate_right {
        lander.rotate(Turn::Right, config.rotation_speed);
    }
    if input.thrust {
        lander.apply_thrust(config.thrust_power);
    } else {
        lander.thrusting = false;
    }

    lander.update(config);

    let contact = lander_terrain_collision(lander, &state.terrain, config.pad_height_tolerance);
    if !contact.hit {
        return;
    }

    let outcome = match assess_touchdown(lander, &contact, config) {
        Ok(()) => {
            let breakdown = score_landing(lander, &state.terrain.pad, elapsed, config);
            state.score = breakdown.total();
            state.score_breakdown = Some(breakdown);
            Outcome::Landed
        }
        Err(cause) => Outcome::Crashed(cause),
    };
    state.phase = GamePhase::Ended(outcome);

    log::info!(
        "Touchdown after {} ticks: {:?} at ({:.1}, {:.1}) vel=({:.2}, {:.2}) angle={:.1} score={}",
        state.time_ticks,
        outcome,
        contact.point.x,
        contact.point.y,
        state.lander.vel.x,
        state.lander.vel.y,
        state.lander.display_angle(),
        state.score
    );
}
