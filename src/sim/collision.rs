//! Lander/terrain contact and touchdown assessment
//!
//! Contact is tested with a single representative point: the lander's lowest
//! vertex against the one terrain segment containing its x.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::lander::Lander;
use super::terrain::Terrain;
use crate::config::GameConfig;

/// Result of a contact check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the lowest vertex reached the surface
    pub hit: bool,
    /// Whether the contact counts as the landing pad
    pub on_pad: bool,
    /// Contact point (the lowest vertex)
    pub point: Vec2,
    /// Interpolated surface y at the contact x
    pub surface_height: f32,
    /// Terrain segment evaluated
    pub segment: usize,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            on_pad: false,
            point: Vec2::ZERO,
            surface_height: 0.0,
            segment: 0,
        }
    }
}

/// Check whether the lander's lowest vertex is at or below the terrain
pub fn lander_terrain_collision(
    lander: &Lander,
    terrain: &Terrain,
    pad_height_tolerance: f32,
) -> CollisionResult {
    // Broad phase: entirely above the highest sample
    let (_, bbox_max) = lander.bounding_box();
    if bbox_max.y < terrain.highest_surface() {
        return CollisionResult::miss();
    }

    let point = lander.bottom_point();
    // A foot hanging past either screen edge rests on the edge segment
    let Some(sample) = terrain.height_at(point.x.clamp(0.0, terrain.width)) else {
        return CollisionResult::miss();
    };

    if point.y < sample.height {
        return CollisionResult::miss();
    }

    let on_pad = terrain.pad.contains_x(point.x)
        && (sample.height - terrain.pad.height).abs() < pad_height_tolerance;

    CollisionResult {
        hit: true,
        on_pad,
        point,
        surface_height: sample.height,
        segment: sample.segment,
    }
}

/// Why a touchdown failed (first failing check, in evaluation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Hit terrain outside the pad
    OffPad,
    TooFastVertical,
    TooFastHorizontal,
    Tilted,
}

/// Orientation within `tolerance` degrees of upright (exclusive)
pub fn is_upright(angle: f32, tolerance: f32) -> bool {
    let a = crate::normalize_degrees(angle);
    a < tolerance || a > 360.0 - tolerance
}

/// Assess a contact against the pad, speed and orientation limits
pub fn assess_touchdown(
    lander: &Lander,
    contact: &CollisionResult,
    config: &GameConfig,
) -> Result<(), CrashCause> {
    if !contact.on_pad {
        return Err(CrashCause::OffPad);
    }
    if lander.vel.y.abs() >= config.safe_vertical_speed {
        return Err(CrashCause::TooFastVertical);
    }
    if lander.vel.x.abs() >= config.safe_horizontal_speed {
        return Err(CrashCause::TooFastHorizontal);
    }
    if !is_upright(lander.angle, config.upright_tolerance_deg) {
        return Err(CrashCause::Tilted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::terrain::LandingPad;

    /// Rugged left half, pad at 300..350 on a flat stretch 280..400
    fn terrain() -> Terrain {
        Terrain {
            width: 800.0,
            height: 600.0,
            points: vec![
                Vec2::new(0.0, 450.0),
                Vec2::new(200.0, 450.0),
                Vec2::new(280.0, 500.0),
                Vec2::new(400.0, 500.0),
                Vec2::new(800.0, 420.0),
            ],
            pad: LandingPad {
                left: 300.0,
                width: 50.0,
                height: 500.0,
            },
        }
    }

    /// Upright lander whose feet sit at `feet_y`, centred at `x`
    fn lander_at(x: f32, feet_y: f32) -> Lander {
        let mut lander = Lander::spawn(&GameConfig::default());
        lander.pos = Vec2::new(x, feet_y - lander.height / 2.0);
        lander
    }

    #[test]
    fn test_no_contact_above_surface() {
        let result = lander_terrain_collision(&lander_at(325.0, 499.0), &terrain(), 5.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_broad_phase_skips_high_lander() {
        let result = lander_terrain_collision(&lander_at(325.0, 100.0), &terrain(), 5.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_contact_on_pad() {
        let result = lander_terrain_collision(&lander_at(325.0, 500.0), &terrain(), 5.0);
        assert!(result.hit);
        assert!(result.on_pad);
        assert_eq!(result.segment, 2);
        assert_eq!(result.surface_height, 500.0);
        // Bottom-left foot is the representative point
        assert!((result.point.x - 315.0).abs() < 1e-4);
    }

    #[test]
    fn test_contact_off_pad() {
        let result = lander_terrain_collision(&lander_at(100.0, 460.0), &terrain(), 5.0);
        assert!(result.hit);
        assert!(!result.on_pad);
        assert_eq!(result.segment, 0);
    }

    #[test]
    fn test_flat_stretch_beside_pad_is_not_pad() {
        // Same height as the pad but outside its span
        let result = lander_terrain_collision(&lander_at(385.0, 501.0), &terrain(), 5.0);
        assert!(result.hit);
        assert!(!result.on_pad);
    }

    #[test]
    fn test_slope_interpolation() {
        // Segment 1 runs 200..280 from 450 to 500; at x=240 the surface is 475
        let mut lander = lander_at(250.0, 474.0);
        assert!(!lander_terrain_collision(&lander, &terrain(), 5.0).hit);
        lander.pos.y += 1.0;
        let result = lander_terrain_collision(&lander, &terrain(), 5.0);
        assert!(result.hit);
        assert_eq!(result.segment, 1);
        assert!((result.surface_height - 475.0).abs() < 1e-3);
    }

    #[test]
    fn test_boundary_uses_first_segment() {
        // Foot exactly on the shared sample at x=200
        let result = lander_terrain_collision(&lander_at(210.0, 450.0), &terrain(), 5.0);
        assert!(result.hit);
        assert_eq!(result.segment, 0);
        assert_eq!(result.surface_height, 450.0);
    }

    #[test]
    fn test_foot_past_left_edge_uses_first_segment() {
        // Centre at x=5 puts the bottom-left foot at x=-5
        let result = lander_terrain_collision(&lander_at(5.0, 450.0), &terrain(), 5.0);
        assert!(result.hit);
        assert!(!result.on_pad);
        assert_eq!(result.segment, 0);
        assert!(result.point.x < 0.0);
    }

    #[test]
    fn test_pad_span_off_pad_height_is_not_pad() {
        // Sink the flat stretch under the pad 6 px below the recorded pad height
        let mut sunk = terrain();
        sunk.points[2].y = 506.0;
        sunk.points[3].y = 506.0;
        let lander = lander_at(325.0, 506.0);
        let result = lander_terrain_collision(&lander, &sunk, 5.0);
        assert!(result.hit);
        assert!(sunk.pad.contains_x(result.point.x));
        assert!(!result.on_pad);

        let mut slow = lander;
        slow.vel = Vec2::new(0.0, 0.5);
        assert_eq!(
            assess_touchdown(&slow, &result, &GameConfig::default()),
            Err(CrashCause::OffPad)
        );
    }

    #[test]
    fn test_upright_window() {
        assert!(is_upright(0.0, 15.0));
        assert!(is_upright(14.9, 15.0));
        assert!(is_upright(-14.9, 15.0));
        assert!(is_upright(360.0 + 10.0, 15.0));
        assert!(!is_upright(15.0, 15.0));
        assert!(!is_upright(16.0, 15.0));
        assert!(!is_upright(-16.0, 15.0));
        assert!(!is_upright(180.0, 15.0));
    }

    fn pad_contact() -> CollisionResult {
        CollisionResult {
            hit: true,
            on_pad: true,
            point: Vec2::new(320.0, 500.0),
            surface_height: 500.0,
            segment: 2,
        }
    }

    #[test]
    fn test_safe_touchdown() {
        let config = GameConfig::default();
        let mut lander = lander_at(325.0, 500.0);
        lander.vel = Vec2::new(0.5, 0.9);
        lander.angle = 10.0;
        assert_eq!(assess_touchdown(&lander, &pad_contact(), &config), Ok(()));
    }

    #[test]
    fn test_each_limit_crashes() {
        let config = GameConfig::default();
        let safe = {
            let mut lander = lander_at(325.0, 500.0);
            lander.vel = Vec2::new(0.5, 0.9);
            lander
        };

        let mut off_pad = pad_contact();
        off_pad.on_pad = false;
        assert_eq!(
            assess_touchdown(&safe, &off_pad, &config),
            Err(CrashCause::OffPad)
        );

        let mut fast_down = safe.clone();
        fast_down.vel.y = 1.0;
        assert_eq!(
            assess_touchdown(&fast_down, &pad_contact(), &config),
            Err(CrashCause::TooFastVertical)
        );

        let mut fast_side = safe.clone();
        fast_side.vel.x = -1.2;
        assert_eq!(
            assess_touchdown(&fast_side, &pad_contact(), &config),
            Err(CrashCause::TooFastHorizontal)
        );

        let mut tilted = safe.clone();
        tilted.angle = config.upright_tolerance_deg + 1.0;
        assert_eq!(
            assess_touchdown(&tilted, &pad_contact(), &config),
            Err(CrashCause::Tilted)
        );
    }
}
