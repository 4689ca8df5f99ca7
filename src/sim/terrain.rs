//! Piecewise-linear terrain with a flat landing pad
//!
//! Sample points are evenly spaced across the screen. Every sample whose
//! segment overlaps the pad span is pinned to the pad height, so the pad is
//! flat from edge to edge regardless of how it lines up with the grid.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// The flat landing target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPad {
    /// Left edge x
    pub left: f32,
    pub width: f32,
    /// Surface y (screen space)
    pub height: f32,
}

impl LandingPad {
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.height)
    }

    /// Inclusive horizontal containment
    pub fn contains_x(&self, x: f32) -> bool {
        self.left <= x && x <= self.right()
    }
}

/// Interpolated terrain height at some x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Index of the segment evaluated (segment i joins points i and i+1)
    pub segment: usize,
    /// Surface y at the queried x
    pub height: f32,
}

/// Terrain surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    pub width: f32,
    pub height: f32,
    /// Surface samples, strictly increasing in x, spanning [0, width]
    pub points: Vec<Vec2>,
    pub pad: LandingPad,
}

impl Terrain {
    /// Generate a random profile and pad placement
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let pad_min = config.pad_margin.round() as i32;
        let pad_max = (config.screen_width - config.pad_margin - config.pad_width).floor() as i32;
        let pad_left = rng.random_range(pad_min..=pad_max.max(pad_min)) as f32;
        let pad = LandingPad {
            left: pad_left,
            width: config.pad_width,
            height: config.pad_surface_y(),
        };

        let segments = config.terrain_segments;
        let spacing = config.screen_width / segments as f32;

        // Samples bracketing the pad span
        let first_pad_point = (pad.left / spacing).floor() as usize;
        let last_pad_point = ((pad.right() / spacing).ceil() as usize).min(segments);

        let rugged_min = (config.screen_height - config.terrain_high_offset).round() as i32;
        let rugged_max = (config.screen_height - config.terrain_low_offset).round() as i32;

        let points = (0..=segments)
            .map(|i| {
                let x = i as f32 * spacing;
                let y = if (first_pad_point..=last_pad_point).contains(&i) {
                    pad.height
                } else {
                    rng.random_range(rugged_min..=rugged_max) as f32
                };
                Vec2::new(x, y)
            })
            .collect();

        log::debug!(
            "Terrain: {} segments, pad at x={}..{} y={} (samples {}..={})",
            segments,
            pad.left,
            pad.right(),
            pad.height,
            first_pad_point,
            last_pad_point
        );

        Self {
            width: config.screen_width,
            height: config.screen_height,
            points,
            pad,
        }
    }

    /// Iterate segments in order as (start, end)
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Surface height at `x`, or `None` outside the terrain span.
    ///
    /// An x exactly on a shared sample evaluates the first segment in order.
    pub fn height_at(&self, x: f32) -> Option<SurfaceSample> {
        self.segments()
            .enumerate()
            .find(|(_, (a, b))| a.x <= x && x <= b.x)
            .map(|(segment, (a, b))| {
                let dx = b.x - a.x;
                let height = if dx == 0.0 {
                    a.y.min(b.y)
                } else {
                    a.y + (b.y - a.y) * (x - a.x) / dx
                };
                SurfaceSample { segment, height }
            })
    }

    /// Smallest surface y (the highest point on screen)
    pub fn highest_surface(&self) -> f32 {
        self.points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min)
    }

    /// Closed polygon: surface samples plus the bottom-right and bottom-left corners
    pub fn outline(&self) -> Vec<Vec2> {
        let mut outline = self.points.clone();
        outline.push(Vec2::new(self.width, self.height));
        outline.push(Vec2::new(0.0, self.height));
        outline
    }
}
