//! HUD text model
//!
//! Pure formatting of the readouts; the frontend decides where they go.

use crate::sim::{GamePhase, GameState, Outcome};

/// End-of-session banner style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: &'static str,
}

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub fuel: String,
    pub velocity: String,
    pub angle: String,
    /// Only after a safe landing
    pub score: Option<String>,
    pub banner: Option<Banner>,
}

impl HudReadout {
    pub fn from_state(state: &GameState) -> Self {
        let lander = &state.lander;
        let (score, banner) = match state.phase {
            GamePhase::Active => (None, None),
            GamePhase::Ended(Outcome::Landed) => (
                Some(format!("Score: {}", state.score)),
                Some(Banner {
                    kind: BannerKind::Success,
                    message: "Landing Successful! Press R to restart",
                }),
            ),
            GamePhase::Ended(Outcome::Crashed(_)) => (
                None,
                Some(Banner {
                    kind: BannerKind::Failure,
                    message: "Crash! Press R to restart",
                }),
            ),
        };

        Self {
            fuel: format!("Fuel: {}", lander.fuel),
            velocity: format!("Velocity: {:.2}", lander.speed()),
            angle: format!("Angle: {:.1}°", lander.display_angle()),
            score,
            banner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CrashCause;
    use glam::Vec2;

    #[test]
    fn test_active_readout() {
        let mut state = GameState::new(1, 0.0);
        state.lander.vel = Vec2::new(3.0, 4.0);
        state.lander.angle = -30.0;

        let hud = HudReadout::from_state(&state);
        assert_eq!(hud.fuel, "Fuel: 1000");
        assert_eq!(hud.velocity, "Velocity: 5.00");
        assert_eq!(hud.angle, "Angle: 330.0°");
        assert!(hud.score.is_none());
        assert!(hud.banner.is_none());
    }

    #[test]
    fn test_landed_readout() {
        let mut state = GameState::new(1, 0.0);
        state.phase = GamePhase::Ended(Outcome::Landed);
        state.score = 1140;

        let hud = HudReadout::from_state(&state);
        assert_eq!(hud.score.as_deref(), Some("Score: 1140"));
        let banner = hud.banner.unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.message, "Landing Successful! Press R to restart");
    }

    #[test]
    fn test_crashed_readout() {
        let mut state = GameState::new(1, 0.0);
        state.phase = GamePhase::Ended(Outcome::Crashed(CrashCause::Tilted));

        let hud = HudReadout::from_state(&state);
        assert!(hud.score.is_none());
        assert_eq!(hud.banner.unwrap().kind, BannerKind::Failure);
    }
}
