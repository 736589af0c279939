//! Конфигурация трассы, агента и частот задач

use core::f32::consts::PI;

/// Геометрия круговой трассы
pub mod track {
    /// Центр трассы (координаты экрана исходной симуляции 800x600)
    pub const CENTER_X: f32 = 400.0;
    pub const CENTER_Y: f32 = 300.0;
    /// Радиус осевой линии трассы
    pub const RADIUS: f32 = 200.0;
}

/// Препятствия на осевой линии трассы
pub mod obstacles {
    use super::PI;

    /// Угловые положения препятствий (радианы)
    pub const ANGLES: [f32; 2] = [PI / 3.0, 4.0 * PI / 3.0];
    /// Размер препятствия (радиус отрисовки)
    pub const SIZE: f32 = 20.0;
    /// Дальность сканирования: дальше этого расстояние не различается
    pub const SCAN_RANGE: f32 = 150.0;
}

/// Кинематика агента
pub mod agent {
    /// Линейная скорость (единиц/с)
    pub const SPEED: f32 = 30.0;
    /// Начальный угол (радианы)
    pub const START_ANGLE: f32 = 0.0;
    /// Минимальный радиус траектории
    pub const MIN_RADIUS: f32 = 150.0;
    /// Смещение радиуса на единицу уклонения
    pub const AVOIDANCE_TO_RADIUS: f32 = 0.5;
    /// Скорость экспоненциального подхода к целевому радиусу (1/с)
    pub const RADIUS_GAIN: f32 = 3.0;
}

/// Классификация близости (в исходной симуляции - цвет агента)
pub mod proximity {
    /// Ближе этого расстояния препятствие считается близким
    pub const NEAR_THRESHOLD: f32 = 60.0;
}

/// Частоты задач прошивки
pub mod system {
    /// Частота цикла управления (Гц), соответствует 60 FPS исходной симуляции
    pub const CONTROL_RATE_HZ: u32 = 60;
    /// Каждый N-й тик уходит в телеметрию
    pub const TELEMETRY_DIVIDER: u32 = 30;
    /// Период ожидания готовности контура (мс)
    pub const MONITOR_PERIOD_MS: u64 = 500;
    /// Период основного цикла индикации (мс)
    pub const STATUS_PERIOD_MS: u64 = 100;
    /// Порог подряд идущих ошибок вывода для предупреждения
    pub const MAX_CONSECUTIVE_FAILURES: u32 = 60;
}

