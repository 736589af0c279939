//! Конфигурация нечеткого регулятора объезда препятствий

/// Входная переменная: расстояние до ближайшего препятствия
pub mod distance {
    pub const NAME: &str = "distance";
    /// Универсум (единицы трассы)
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 150.0;
    /// Шаг сетки дискретизации
    pub const RESOLUTION: f32 = 1.0;

    /// Терм "близко": треугольник (a, b, c)
    pub mod close {
        pub const NAME: &str = "close";
        pub const POINTS: (f32, f32, f32) = (0.0, 0.0, 60.0);
    }

    /// Терм "далеко"
    pub mod far {
        pub const NAME: &str = "far";
        pub const POINTS: (f32, f32, f32) = (40.0, 150.0, 150.0);
    }
}

/// Выходная переменная: уровень уклонения
pub mod avoidance {
    pub const NAME: &str = "avoidance";
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;
    pub const RESOLUTION: f32 = 1.0;

    /// Терм "слабое уклонение"
    pub mod low {
        pub const NAME: &str = "low";
        pub const POINTS: (f32, f32, f32) = (0.0, 0.0, 40.0);
    }

    /// Терм "сильное уклонение"
    pub mod high {
        pub const NAME: &str = "high";
        pub const POINTS: (f32, f32, f32) = (60.0, 100.0, 100.0);
    }
}

/// База правил: (терм расстояния, терм уклонения)
pub mod rules {
    use super::{avoidance, distance};

    pub const RULES: [(&str, &str); 2] = [
        // Близко -> сильно уклоняемся
        (distance::close::NAME, avoidance::high::NAME),
        // Далеко -> почти не уклоняемся
        (distance::far::NAME, avoidance::low::NAME),
    ];
}
