//! Landing score
//!
//! Awarded once, on a safe landing: remaining fuel, closeness to the pad
//! centre, and speed of the descent.

use serde::{Deserialize, Serialize};

use super::lander::Lander;
use super::terrain::LandingPad;
use crate::config::GameConfig;

/// Score components (all non-negative)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub fuel: u32,
    pub position: u32,
    pub time: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.fuel
            .saturating_add(self.position)
            .saturating_add(self.time)
    }
}

/// Position bonus for a horizontal distance from the pad centre.
///
/// Full bonus at the centre, falling linearly to zero at half the pad width.
pub fn position_bonus(distance: f32, pad_width: f32, max_bonus: f32) -> u32 {
    let max_distance = pad_width / 2.0;
    let factor = (1.0 - distance.abs() / max_distance).max(0.0);
    (max_bonus * factor) as u32
}

/// Time bonus for a landing `elapsed_secs` after session start
pub fn time_bonus(elapsed_secs: f64, base: f32, penalty_per_sec: f32) -> u32 {
    let bonus = base as f64 - elapsed_secs.max(0.0) * penalty_per_sec as f64;
    bonus.max(0.0) as u32
}

/// Score a safe landing
pub fn score_landing(
    lander: &Lander,
    pad: &LandingPad,
    elapsed_secs: f64,
    config: &GameConfig,
) -> ScoreBreakdown {
    let distance = lander.pos.x - pad.center().x;
    ScoreBreakdown {
        fuel: lander.fuel,
        position: position_bonus(distance, pad.width, config.position_bonus_max),
        time: time_bonus(
            elapsed_secs,
            config.time_bonus_base,
            config.time_penalty_per_sec,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_total_saturates() {
        let breakdown = ScoreBreakdown {
            fuel: u32::MAX - 10,
            position: 100,
            time: 500,
        };
        assert_eq!(breakdown.total(), u32::MAX);
    }

    #[test]
    fn test_position_bonus() {
        assert_eq!(position_bonus(0.0, 50.0, 100.0), 100);
        assert_eq!(position_bonus(12.5, 50.0, 100.0), 50);
        assert_eq!(position_bonus(-12.5, 50.0, 100.0), 50);
        assert_eq!(position_bonus(25.0, 50.0, 100.0), 0);
        assert_eq!(position_bonus(40.0, 50.0, 100.0), 0);
    }

    #[test]
    fn test_time_bonus() {
        assert_eq!(time_bonus(0.0, 500.0, 5.0), 500);
        assert_eq!(time_bonus(10.0, 500.0, 5.0), 450);
        assert_eq!(time_bonus(10.5, 500.0, 5.0), 447);
        assert_eq!(time_bonus(100.0, 500.0, 5.0), 0);
        assert_eq!(time_bonus(1000.0, 500.0, 5.0), 0);
    }

    #[test]
    fn test_score_landing() {
        let config = GameConfig::default();
        let pad = LandingPad {
            left: 300.0,
            width: 50.0,
            height: 500.0,
        };
        let mut lander = Lander::spawn(&config);
        lander.pos = Vec2::new(325.0, 485.0);
        lander.fuel = 640;

        let score = score_landing(&lander, &pad, 20.0, &config);
        assert_eq!(
            score,
            ScoreBreakdown {
                fuel: 640,
                position: 100,
                time: 400,
            }
        );
        assert_eq!(score.total(), 1140);
    }

    proptest! {
        #[test]
        fn prop_closer_never_scores_less(a in 0.0f32..60.0, b in 0.0f32..60.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(position_bonus(near, 50.0, 100.0) >= position_bonus(far, 50.0, 100.0));
        }

        #[test]
        fn prop_earlier_never_scores_less(a in 0.0f64..200.0, b in 0.0f64..200.0) {
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(time_bonus(early, 500.0, 5.0) >= time_bonus(late, 500.0, 5.0));
        }
    }
}
