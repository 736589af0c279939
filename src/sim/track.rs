//! Геометрия круговой трассы и поиск ближайшего препятствия

use heapless::Vec;
use nalgebra::Vector2;

use crate::config::track::{obstacles, track};
use crate::utils::math::polar_to_cartesian;

/// Максимальное число препятствий на трассе
pub const MAX_OBSTACLES: usize = 8;

/// Препятствие на осевой линии трассы
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Obstacle {
    /// Угловое положение (радианы)
    pub angle: f32,
    /// Размер (используется только для отображения)
    pub size: f32,
}

/// Круговая трасса с препятствиями
#[derive(Debug, Clone)]
pub struct Track {
    center: Vector2<f32>,
    radius: f32,
    /// Дальность сканирования препятствий
    scan_range: f32,
    obstacles: Vec<Obstacle, MAX_OBSTACLES>,
}

impl Track {
    /// Пустая трасса
    pub fn new(center_x: f32, center_y: f32, radius: f32, scan_range: f32) -> Self {
        Self {
            center: Vector2::new(center_x, center_y),
            radius,
            scan_range,
            obstacles: Vec::new(),
        }
    }

    /// Трасса из конфигурации: два препятствия напротив друг друга
    pub fn standard() -> Self {
        let mut track = Self::new(
            track::CENTER_X,
            track::CENTER_Y,
            track::RADIUS,
            obstacles::SCAN_RANGE,
        );
        for angle in obstacles::ANGLES {
            // Препятствий в конфигурации меньше MAX_OBSTACLES
            let _ = track.add_obstacle(Obstacle {
                angle,
                size: obstacles::SIZE,
            });
        }
        track
    }

    /// Добавление препятствия; при переполнении препятствие возвращается
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> Result<(), Obstacle> {
        self.obstacles.push(obstacle)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Точка на окружности радиуса `radius` под углом `angle`
    pub fn point_at(&self, radius: f32, angle: f32) -> Vector2<f32> {
        let (x, y) = polar_to_cartesian(self.center.x, self.center.y, radius, angle);
        Vector2::new(x, y)
    }

    /// Положение препятствия (на осевой линии)
    pub fn obstacle_position(&self, obstacle: &Obstacle) -> Vector2<f32> {
        self.point_at(self.radius, obstacle.angle)
    }

    /// Расстояние до ближайшего препятствия, не больше дальности сканирования
    pub fn nearest_obstacle_distance(&self, position: &Vector2<f32>) -> f32 {
        self.obstacles
            .iter()
            .map(|o| (self.obstacle_position(o) - position).norm())
            .fold(self.scan_range, f32::min)
    }
}
