//! Session state
//!
//! One lander, one terrain, and the phase machine around them. The session
//! owns its RNG stream so every playthrough is reproducible from the seed.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CrashCause;
use super::lander::Lander;
use super::scoring::ScoreBreakdown;
use super::terrain::Terrain;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Landed,
    Crashed(CrashCause),
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics running
    Active,
    /// Frozen after touchdown; only reset leaves this phase
    Ended(Outcome),
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Advanced on every reset
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub rng_state: RngState,
    pub lander: Lander,
    pub terrain: Terrain,
    pub phase: GamePhase,
    /// Total score, non-zero only after a safe landing
    pub score: u32,
    pub score_breakdown: Option<ScoreBreakdown>,
    /// Clock reading (seconds) when this playthrough began
    pub started_at: f64,
    /// Simulation ticks this playthrough
    pub time_ticks: u64,
}

impl GameState {
    /// Start a session with the default configuration
    pub fn new(seed: u64, now: f64) -> Self {
        Self::build(GameConfig::default(), RngState::new(seed), now)
    }

    /// Start a session with a custom configuration
    pub fn with_config(config: GameConfig, seed: u64, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, RngState::new(seed), now))
    }

    fn build(config: GameConfig, rng_state: RngState, now: f64) -> Self {
        let terrain = Terrain::generate(&config, &mut rng_state.to_rng());
        let lander = Lander::spawn(&config);
        log::info!(
            "Session started (seed {}, stream {}), pad at x={}",
            rng_state.seed,
            rng_state.stream,
            terrain.pad.left
        );
        Self {
            config,
            rng_state,
            lander,
            terrain,
            phase: GamePhase::Active,
            score: 0,
            score_breakdown: None,
            started_at: now,
            time_ticks: 0,
        }
    }

    /// Discard lander and terrain and start a fresh playthrough
    pub fn reset(&mut self, now: f64) {
        let rng_state = RngState {
            seed: self.rng_state.seed,
            stream: self.rng_state.stream.wrapping_add(1),
        };
        *self = Self::build(self.config.clone(), rng_state, now);
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Ended(_))
    }

    pub fn has_landed(&self) -> bool {
        self.phase == GamePhase::Ended(Outcome::Landed)
    }

    /// Seconds since this playthrough began
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(12345, 0.0);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(!state.is_game_over());
        assert!(!state.has_landed());
        assert_eq!(state.score, 0);
        assert_eq!(state.lander.fuel, state.config.initial_fuel);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_with_config_validates() {
        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(GameState::with_config(config, 1, 0.0).is_err());
        assert!(GameState::with_config(GameConfig::default(), 1, 0.0).is_ok());
    }

    #[test]
    fn test_reset_regenerates_terrain() {
        let mut state = GameState::new(99, 0.0);
        let first = state.terrain.points.clone();
        state.phase = GamePhase::Ended(Outcome::Crashed(CrashCause::OffPad));
        state.reset(12.0);
        assert_eq!(state.rng_state.stream, 1);
        assert_ne!(state.terrain.points, first);
        assert_eq!(state.started_at, 12.0);
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn test_elapsed() {
        let state = GameState::new(1, 5.0);
        assert_eq!(state.elapsed(7.5), 2.5);
        assert_eq!(state.elapsed(4.0), 0.0);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(3, 0.0);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.terrain.points, state.terrain.points);
        assert_eq!(back.phase, state.phase);
    }
}
