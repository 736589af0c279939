//! Замкнутый контур: наблюдение -> нечеткий вывод -> радиус -> движение

use crate::config::track::{agent, proximity};
use crate::control::fuzzy::AvoidanceController;
use crate::sim::{AgentState, Track};
use crate::utils::filters::FirstOrderLag;
use crate::utils::math::constrain;

/// Максимальный шаг времени одного тика (с)
const MAX_DT_S: f32 = 0.1;

/// Близость ближайшего препятствия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Proximity {
    /// Препятствие ближе порога
    Near,
    Clear,
}

impl Proximity {
    pub fn classify(distance: f32) -> Self {
        if distance < proximity::NEAR_THRESHOLD {
            Proximity::Near
        } else {
            Proximity::Clear
        }
    }
}

/// Отчет одного тика контура
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry {
    pub tick: u32,
    /// Положение агента после шага
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub radius: f32,
    /// Наблюдение, поданное на вход регулятора
    pub distance: f32,
    /// Примененный уровень уклонения
    pub avoidance: f32,
    pub proximity: Proximity,
    /// Вывод не удался, применено последнее удачное значение
    pub degraded: bool,
}

/// Контур управления агентом на трассе
///
/// Владеет неизменяемым регулятором и состоянием мира. Ошибка вывода не
/// прерывает тик: применяется последний удачный уровень уклонения.
#[derive(Debug, Clone)]
pub struct ControlLoop {
    controller: AvoidanceController,
    track: Track,
    agent: AgentState,
    /// Сглаживание радиуса к целевому
    radius_filter: FirstOrderLag,
    last_avoidance: f32,
    tick: u32,
    consecutive_failures: u32,
}

impl ControlLoop {
    /// Контур с агентом на осевой линии трассы
    pub fn new(controller: AvoidanceController, track: Track) -> Self {
        let agent = AgentState::on_track(&track);
        Self::with_agent(controller, track, agent)
    }

    pub fn with_agent(controller: AvoidanceController, track: Track, agent: AgentState) -> Self {
        Self {
            controller,
            track,
            radius_filter: FirstOrderLag::new(agent::RADIUS_GAIN, agent.radius),
            agent,
            last_avoidance: 0.0,
            tick: 0,
            consecutive_failures: 0,
        }
    }

    /// Текущее наблюдение: расстояние до ближайшего препятствия
    pub fn observe(&self) -> f32 {
        let position = self.agent.position(&self.track);
        self.track.nearest_obstacle_distance(&position)
    }

    /// Один тик контура длительностью `dt` секунд
    pub fn step(&mut self, dt: f32) -> Telemetry {
        let dt = if dt.is_finite() { constrain(dt, 0.0, MAX_DT_S) } else { 0.0 };

        let distance = self.observe();
        let (avoidance, degraded) = match self.controller.update(distance) {
            Ok(level) => {
                self.last_avoidance = level;
                self.consecutive_failures = 0;
                (level, false)
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Ошибка нечеткого вывода: {}, удерживаем {}", _e, self.last_avoidance);
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                (self.last_avoidance, true)
            }
        };

        // Целевой радиус смещается наружу пропорционально уклонению
        let target_radius = self.track.radius() + avoidance * agent::AVOIDANCE_TO_RADIUS;
        let radius = self.radius_filter.update(target_radius, dt).max(agent::MIN_RADIUS);
        self.radius_filter.set_output(radius);
        self.agent.radius = radius;

        self.agent.advance(dt);
        self.tick = self.tick.wrapping_add(1);

        let position = self.agent.position(&self.track);
        Telemetry {
            tick: self.tick,
            x: position.x,
            y: position.y,
            angle: self.agent.angle,
            radius: self.agent.radius,
            distance,
            avoidance,
            proximity: Proximity::classify(distance),
            degraded,
        }
    }

    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn controller(&self) -> &AvoidanceController {
        &self.controller
    }

    pub fn last_avoidance(&self) -> f32 {
        self.last_avoidance
    }

    /// Число подряд неудачных выводов
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
