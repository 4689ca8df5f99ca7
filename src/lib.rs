//! Lunar Lander - A minimal 2D arcade lander
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, terrain, collisions, scoring, session state)
//! - `config`: Immutable game configuration built from `consts`
//! - `renderer`: WebGPU rendering pipeline and vertex generation
//! - `ui`: HUD text model
//! - `highscores`: Best-landing table

pub mod config;
pub mod error;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use config::GameConfig;
pub use error::ConfigError;
pub use highscores::HighScores;
pub use settings::Settings;

use glam::Vec2;

/// Build-time game constants (defaults for [`GameConfig`])
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation rate (one tick per frame)
    pub const FPS: u32 = 60;
    /// Maximum ticks per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Downward acceleration per tick²
    pub const GRAVITY: f32 = 0.05;
    /// Velocity gained per tick of thrust
    pub const THRUST_POWER: f32 = 0.1;
    /// Degrees per tick while a rotate key is held
    pub const ROTATION_SPEED: f32 = 3.0;
    pub const INITIAL_FUEL: u32 = 1000;

    /// Lander outline (isosceles triangle, apex up)
    pub const LANDER_WIDTH: f32 = 20.0;
    pub const LANDER_HEIGHT: f32 = 30.0;
    /// Spawn distance below the top edge
    pub const SPAWN_HEIGHT: f32 = 50.0;

    /// Terrain
    pub const TERRAIN_SEGMENTS: usize = 20;
    /// Rugged terrain heights are drawn from
    /// [SCREEN_HEIGHT - TERRAIN_HIGH_OFFSET, SCREEN_HEIGHT - TERRAIN_LOW_OFFSET]
    pub const TERRAIN_HIGH_OFFSET: f32 = 200.0;
    pub const TERRAIN_LOW_OFFSET: f32 = 50.0;

    /// Landing pad
    pub const PAD_WIDTH: f32 = 50.0;
    /// Minimum distance between the pad and either screen edge
    pub const PAD_MARGIN: f32 = 100.0;
    /// Pad surface sits this far above the bottom edge
    pub const PAD_HEIGHT_OFFSET: f32 = 100.0;
    pub const PAD_HEIGHT_TOLERANCE: f32 = 5.0;

    /// Touchdown limits
    pub const SAFE_VERTICAL_SPEED: f32 = 1.0;
    pub const SAFE_HORIZONTAL_SPEED: f32 = 1.0;
    pub const UPRIGHT_TOLERANCE_DEG: f32 = 15.0;

    /// Scoring weights
    pub const POSITION_BONUS_MAX: f32 = 100.0;
    pub const TIME_BONUS_BASE: f32 = 500.0;
    pub const TIME_PENALTY_PER_SEC: f32 = 5.0;
}

/// Reduce an unbounded angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Rotate a point about the origin by `degrees` (clockwise on a y-down screen)
#[inline]
pub fn rotate_degrees(point: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(point)
}

/// Unit heading for an orientation in degrees (0 = screen-up)
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    rotate_degrees(Vec2::NEG_Y, degrees)
}
