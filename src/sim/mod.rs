//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, explicit Euler
//! - Seeded RNG only
//! - Caller-supplied clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod lander;
pub mod scoring;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{CollisionResult, CrashCause, assess_touchdown, is_upright, lander_terrain_collision};
pub use lander::{Lander, Turn};
pub use scoring::{ScoreBreakdown, score_landing};
pub use state::{GamePhase, GameState, Outcome, RngState};
pub use terrain::{LandingPad, SurfaceSample, Terrain};
pub use tick::{TickInput, tick};
