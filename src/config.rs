//! Immutable game configuration
//!
//! Every tunable lives here so the simulation never reaches for globals.
//! Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game configuration, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Ticks per second
    pub fps: u32,

    // === Physics ===
    pub gravity: f32,
    pub thrust_power: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
    pub initial_fuel: u32,

    // === Lander ===
    pub lander_width: f32,
    pub lander_height: f32,
    /// Spawn y (distance below the top edge)
    pub spawn_height: f32,

    // === Terrain ===
    pub terrain_segments: usize,
    pub terrain_high_offset: f32,
    pub terrain_low_offset: f32,

    // === Landing pad ===
    pub pad_width: f32,
    pub pad_margin: f32,
    pub pad_height_offset: f32,
    pub pad_height_tolerance: f32,

    // === Touchdown limits ===
    pub safe_vertical_speed: f32,
    pub safe_horizontal_speed: f32,
    pub upright_tolerance_deg: f32,

    // === Scoring ===
    pub position_bonus_max: f32,
    pub time_bonus_base: f32,
    pub time_penalty_per_sec: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            gravity: GRAVITY,
            thrust_power: THRUST_POWER,
            rotation_speed: ROTATION_SPEED,
            initial_fuel: INITIAL_FUEL,

            lander_width: LANDER_WIDTH,
            lander_height: LANDER_HEIGHT,
            spawn_height: SPAWN_HEIGHT,

            terrain_segments: TERRAIN_SEGMENTS,
            terrain_high_offset: TERRAIN_HIGH_OFFSET,
            terrain_low_offset: TERRAIN_LOW_OFFSET,

            pad_width: PAD_WIDTH,
            pad_margin: PAD_MARGIN,
            pad_height_offset: PAD_HEIGHT_OFFSET,
            pad_height_tolerance: PAD_HEIGHT_TOLERANCE,

            safe_vertical_speed: SAFE_VERTICAL_SPEED,
            safe_horizontal_speed: SAFE_HORIZONTAL_SPEED,
            upright_tolerance_deg: UPRIGHT_TOLERANCE_DEG,

            position_bonus_max: POSITION_BONUS_MAX,
            time_bonus_base: TIME_BONUS_BASE,
            time_penalty_per_sec: TIME_PENALTY_PER_SEC,
        }
    }
}

impl GameConfig {
    /// Fixed simulation timestep in seconds
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Pad surface y (screen space, y-down)
    pub fn pad_surface_y(&self) -> f32 {
        self.screen_height - self.pad_height_offset
    }

    /// Spawn position: horizontal centre, `spawn_height` below the top edge
    pub fn spawn_point(&self) -> (f32, f32) {
        (self.screen_width / 2.0, self.spawn_height)
    }

    /// Check that this configuration can produce a valid session
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("fps", self.fps as f32),
            ("gravity", self.gravity),
            ("thrust_power", self.thrust_power),
            ("lander_width", self.lander_width),
            ("lander_height", self.lander_height),
            ("pad_width", self.pad_width),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("rotation_speed", self.rotation_speed),
            ("spawn_height", self.spawn_height),
            ("pad_margin", self.pad_margin),
            ("pad_height_tolerance", self.pad_height_tolerance),
            ("safe_vertical_speed", self.safe_vertical_speed),
            ("safe_horizontal_speed", self.safe_horizontal_speed),
            ("upright_tolerance_deg", self.upright_tolerance_deg),
            ("position_bonus_max", self.position_bonus_max),
            ("time_bonus_base", self.time_bonus_base),
            ("time_penalty_per_sec", self.time_penalty_per_sec),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.terrain_segments == 0 {
            return Err(ConfigError::NoTerrainSegments);
        }

        if self.pad_width + 2.0 * self.pad_margin > self.screen_width {
            return Err(ConfigError::PadDoesNotFit {
                pad_width: self.pad_width,
                margin: self.pad_margin,
                screen_width: self.screen_width,
            });
        }

        if self.terrain_low_offset < 0.0
            || self.terrain_high_offset < self.terrain_low_offset
            || self.terrain_high_offset > self.screen_height
        {
            return Err(ConfigError::InvalidTerrainBand {
                high: self.terrain_high_offset,
                low: self.terrain_low_offset,
                screen_height: self.screen_height,
            });
        }

        if !(self.pad_height_offset > 0.0 && self.pad_height_offset < self.screen_height) {
            return Err(ConfigError::PadOffScreen {
                offset: self.pad_height_offset,
                screen_height: self.screen_height,
            });
        }

        Ok(())
    }
}
