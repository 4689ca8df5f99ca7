//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels (y-down).

use glam::Vec2;
use rand::Rng;

use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{GameState, Lander, LandingPad, Terrain};

/// Line width for the pad highlight and the flame
pub const THICK_LINE: f32 = 3.0;
/// Flame length range in pixels (inclusive)
pub const FLAME_LENGTH: (u32, u32) = (10, 20);

/// Single triangle
pub fn triangle(points: [Vec2; 3], color: [f32; 4]) -> Vec<Vertex> {
    points
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Axis-aligned rectangle from its top-left corner
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Thick line segment as a quad
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Random single-pixel stars
pub fn starfield<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f32, height: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(count * 6);
    for _ in 0..count {
        let pos = Vec2::new(
            rng.random_range(0..=width as u32) as f32,
            rng.random_range(0..=height as u32) as f32,
        );
        vertices.extend(rect(pos, Vec2::ONE, colors::STAR));
    }
    vertices
}

/// Filled terrain: one quad per surface segment down to the polygon floor
pub fn terrain_fill(terrain: &Terrain) -> Vec<Vertex> {
    let outline = terrain.outline();
    let (surface, corners) = outline.split_at(outline.len() - 2);
    let floor = corners[0].y;

    let mut vertices = Vec::with_capacity(surface.len() * 6);
    for w in surface.windows(2) {
        let (a, b) = (w[0], w[1]);
        vertices.push(Vertex::new(a.x, a.y, colors::TERRAIN));
        vertices.push(Vertex::new(b.x, b.y, colors::TERRAIN));
        vertices.push(Vertex::new(a.x, floor, colors::TERRAIN));

        vertices.push(Vertex::new(a.x, floor, colors::TERRAIN));
        vertices.push(Vertex::new(b.x, b.y, colors::TERRAIN));
        vertices.push(Vertex::new(b.x, floor, colors::TERRAIN));
    }
    vertices
}

/// Highlight line across the pad surface
pub fn pad_marker(pad: &LandingPad) -> Vec<Vertex> {
    line(
        Vec2::new(pad.left, pad.height),
        Vec2::new(pad.right(), pad.height),
        THICK_LINE,
        colors::PAD,
    )
}

pub fn lander_body(lander: &Lander) -> Vec<Vertex> {
    triangle(lander.transformed_points(), colors::LANDER)
}

/// Flame from the nozzle, pointing away from the heading
pub fn thrust_flame(lander: &Lander, length: f32) -> Vec<Vertex> {
    let start = lander.nozzle();
    let end = start - crate::heading(lander.angle) * length;
    line(start, end, THICK_LINE, colors::FLAME)
}

/// Build the whole frame: stars, terrain, pad, lander, flame
pub fn scene<R: Rng + ?Sized>(state: &GameState, settings: &Settings, rng: &mut R) -> Vec<Vertex> {
    let config = &state.config;
    let mut vertices = starfield(
        rng,
        settings.effective_star_count(),
        config.screen_width,
        config.screen_height,
    );

    vertices.extend(terrain_fill(&state.terrain));
    vertices.extend(pad_marker(&state.terrain.pad));
    vertices.extend(lander_body(&state.lander));

    let lander = &state.lander;
    if lander.thrusting && lander.fuel > 0 {
        let (min, max) = FLAME_LENGTH;
        let length = if settings.flame_flicker {
            rng.random_range(min..=max)
        } else {
            (min + max) / 2
        };
        vertices.extend(thrust_flame(lander, length as f32));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_line_quad() {
        let vertices = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, colors::PAD);
        assert_eq!(vertices.len(), 6);
        for v in &vertices {
            assert!((v.position[1].abs() - 1.0).abs() < 1e-6);
        }
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, colors::PAD).is_empty());
    }

    #[test]
    fn test_terrain_fill_reaches_floor() {
        let state = GameState::new(5, 0.0);
        let vertices = terrain_fill(&state.terrain);
        assert_eq!(vertices.len(), state.config.terrain_segments * 6);
        let lowest = vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(lowest, state.config.screen_height);
    }

    #[test]
    fn test_flame_points_down_when_upright() {
        let state = GameState::new(5, 0.0);
        let vertices = thrust_flame(&state.lander, 15.0);
        let nozzle_y = state.lander.nozzle().y;
        let max_y = vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((max_y - (nozzle_y + 15.0)).abs() < 1e-4);
    }

    #[test]
    fn test_scene_flame_only_while_thrusting() {
        let settings = Settings {
            starfield: false,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(5, 0.0);

        let idle = scene(&state, &settings, &mut rng).len();
        state.lander.thrusting = true;
        let burning = scene(&state, &settings, &mut rng).len();
        assert_eq!(burning, idle + 6);

        state.lander.fuel = 0;
        assert_eq!(scene(&state, &settings, &mut rng).len(), idle);
    }

    #[test]
    fn test_starfield_within_screen() {
        let mut rng = Pcg32::seed_from_u64(9);
        let vertices = starfield(&mut rng, 100, 800.0, 600.0);
        assert_eq!(vertices.len(), 600);
        for v in &vertices {
            assert!(v.position[0] >= 0.0 && v.position[0] <= 801.0);
            assert!(v.position[1] >= 0.0 && v.position[1] <= 601.0);
        }
    }
}
