//! The player-controlled lander
//!
//! Screen space is y-down: gravity increases `vel.y`, and an orientation of
//! 0° points the nose at the top of the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::{heading, normalize_degrees, rotate_degrees};

/// Rotation input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl Turn {
    fn sign(self) -> f32 {
        match self {
            Turn::Left => -1.0,
            Turn::Right => 1.0,
        }
    }
}

/// Vehicle state advanced once per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lander {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation in degrees, unbounded (reduce with `display_angle`)
    pub angle: f32,
    pub fuel: u32,
    /// True if the engine fired this tick
    pub thrusting: bool,
    pub width: f32,
    pub height: f32,
}

impl Lander {
    /// Spawn at rest, upright, full tank
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            fuel: config.initial_fuel,
            thrusting: false,
            width: config.lander_width,
            height: config.lander_height,
        }
    }

    /// Spawn at the configured spawn point
    pub fn spawn(config: &GameConfig) -> Self {
        let (x, y) = config.spawn_point();
        Self::new(Vec2::new(x, y), config)
    }

    /// Outline relative to the centre: apex, bottom-left, bottom-right
    pub fn outline(&self) -> [Vec2; 3] {
        [
            Vec2::new(0.0, -self.height / 2.0),
            Vec2::new(-self.width / 2.0, self.height / 2.0),
            Vec2::new(self.width / 2.0, self.height / 2.0),
        ]
    }

    pub fn rotate(&mut self, turn: Turn, rotation_speed: f32) {
        self.angle += turn.sign() * rotation_speed;
    }

    /// Fire the engine along the current heading if any fuel remains
    pub fn apply_thrust(&mut self, thrust_power: f32) {
        if self.fuel > 0 {
            self.vel += heading(self.angle) * thrust_power;
            self.fuel -= 1;
            self.thrusting = true;
        } else {
            self.thrusting = false;
        }
    }

    /// Gravity, Euler integration, horizontal wrap and top clamp
    pub fn update(&mut self, config: &GameConfig) {
        self.vel.y += config.gravity;
        self.pos += self.vel;

        if self.pos.x < 0.0 {
            self.pos.x = config.screen_width;
        } else if self.pos.x >= config.screen_width {
            self.pos.x = 0.0;
        }

        // Bottom edge is left to the terrain check
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = 0.0;
        }
    }

    /// Outline vertices after rotation and translation
    pub fn transformed_points(&self) -> [Vec2; 3] {
        self.outline()
            .map(|p| rotate_degrees(p, self.angle) + self.pos)
    }

    /// Lowest vertex on screen (largest y).
    ///
    /// On a tie the earlier vertex in outline order wins, so an upright lander
    /// reports its bottom-left foot.
    pub fn bottom_point(&self) -> Vec2 {
        let points = self.transformed_points();
        let mut lowest = points[0];
        for p in &points[1..] {
            if p.y > lowest.y {
                lowest = *p;
            }
        }
        lowest
    }

    /// Axis-aligned bounding box as (min, max)
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        let points = self.transformed_points();
        let min = points.iter().fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p));
        let max = points
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |acc, p| acc.max(*p));
        (min, max)
    }

    /// Base of the nozzle (local bottom centre) in screen space
    pub fn nozzle(&self) -> Vec2 {
        rotate_degrees(Vec2::new(0.0, self.height / 2.0), self.angle) + self.pos
    }

    /// Velocity magnitude
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Orientation reduced to [0, 360)
    pub fn display_angle(&self) -> f32 {
        normalize_degrees(self.angle)
    }
}
