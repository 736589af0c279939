//! Состояние и кинематика агента на круговой трассе

use nalgebra::Vector2;

use crate::config::track::agent;
use crate::sim::track::Track;
use crate::utils::math::normalize_angle_positive;

/// Состояние агента в полярных координатах относительно центра трассы
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AgentState {
    /// Угол (радианы, [0, 2π))
    pub angle: f32,
    /// Текущий радиус траектории
    pub radius: f32,
    /// Линейная скорость (единиц/с)
    pub speed: f32,
}

impl AgentState {
    pub fn new(angle: f32, radius: f32, speed: f32) -> Self {
        Self {
            angle: normalize_angle_positive(angle),
            radius,
            speed,
        }
    }

    /// Старт на осевой линии трассы
    pub fn on_track(track: &Track) -> Self {
        Self::new(agent::START_ANGLE, track.radius(), agent::SPEED)
    }

    /// Декартово положение агента
    pub fn position(&self, track: &Track) -> Vector2<f32> {
        track.point_at(self.radius, self.angle)
    }

    /// Движение по окружности текущего радиуса за время `dt`
    pub fn advance(&mut self, dt: f32) {
        if self.radius > 0.0 {
            let angular_speed = self.speed / self.radius;
            self.angle = normalize_angle_positive(self.angle + angular_speed * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::TAU;

    #[test]
    fn test_starts_on_track_line() {
        let track = Track::standard();
        let state = AgentState::on_track(&track);
        assert_eq!(state.radius, 200.0);
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.speed, 30.0);
        let pos = state.position(&track);
        assert!((pos.x - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_angular_speed() {
        let mut state = AgentState::new(0.0, 200.0, 30.0);
        state.advance(1.0);
        assert!((state.angle - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_angle_wraps() {
        let mut state = AgentState::new(TAU - 0.01, 100.0, 10.0);
        state.advance(1.0);
        assert!(state.angle >= 0.0 && state.angle < TAU);
        assert!((state.angle - 0.09).abs() < 1e-4);
    }
}
