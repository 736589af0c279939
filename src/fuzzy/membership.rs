//! Функции принадлежности

use super::error::ConfigError;

/// Функция принадлежности нечеткого терма
///
/// Точки излома упорядочены: a <= b <= c (<= d). Внешние точки могут быть
/// бесконечными, тогда соответствующий склон вырождается в "плечо" со степенью 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MembershipFunction {
    /// Треугольная: (a, b, c), вершина в b
    Triangular { a: f32, b: f32, c: f32 },
    /// Трапециевидная: (a, b, c, d), плато на [b, c]
    Trapezoidal { a: f32, b: f32, c: f32, d: f32 },
}

impl MembershipFunction {
    /// Треугольная функция с проверкой порядка точек
    pub fn triangular(a: f32, b: f32, c: f32) -> Result<Self, ConfigError> {
        if !ordered(&[a, b, c]) {
            return Err(ConfigError::InvalidBreakpoints);
        }
        Ok(MembershipFunction::Triangular { a, b, c })
    }

    /// Трапециевидная функция с проверкой порядка точек
    pub fn trapezoidal(a: f32, b: f32, c: f32, d: f32) -> Result<Self, ConfigError> {
        if !ordered(&[a, b, c, d]) {
            return Err(ConfigError::InvalidBreakpoints);
        }
        Ok(MembershipFunction::Trapezoidal { a, b, c, d })
    }

    /// Степень принадлежности значения `x`, всегда в [0, 1]
    pub fn degree(&self, x: f32) -> f32 {
        if x.is_nan() {
            return 0.0;
        }

        let degree = match *self {
            // Вершина проверяется первой: при a == b или b == c склон
            // становится вертикальной ступенькой, деления на ноль нет
            MembershipFunction::Triangular { a, b, c } => {
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    rising(x, a, b)
                } else {
                    falling(x, b, c)
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                if x >= b && x <= c {
                    1.0
                } else if x <= a || x >= d {
                    0.0
                } else if x < b {
                    rising(x, a, b)
                } else {
                    falling(x, c, d)
                }
            }
        };

        degree.clamp(0.0, 1.0)
    }

    /// Носитель: интервал, где степень может быть > 0
    pub fn support(&self) -> (f32, f32) {
        match *self {
            MembershipFunction::Triangular { a, c, .. } => (a, c),
            MembershipFunction::Trapezoidal { a, d, .. } => (a, d),
        }
    }

    /// Ядро: интервал, где степень равна 1
    pub fn core(&self) -> (f32, f32) {
        match *self {
            MembershipFunction::Triangular { b, .. } => (b, b),
            MembershipFunction::Trapezoidal { b, c, .. } => (b, c),
        }
    }
}

/// Возрастающий склон на (a, b), a < b
#[inline]
fn rising(x: f32, a: f32, b: f32) -> f32 {
    if a.is_infinite() {
        1.0
    } else {
        (x - a) / (b - a)
    }
}

/// Убывающий склон на (c, d), c < d
#[inline]
fn falling(x: f32, c: f32, d: f32) -> f32 {
    if d.is_infinite() {
        1.0
    } else {
        (d - x) / (d - c)
    }
}

fn ordered(points: &[f32]) -> bool {
    points.iter().all(|p| !p.is_nan()) && points.windows(2).all(|w| w[0] <= w[1])
}
