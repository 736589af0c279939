//! Математические функции и утилиты

use core::f32::consts::{PI, TAU};

/// Ограничение значения в заданных пределах
#[inline(always)]
pub fn constrain(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Нормализация угла в диапазон [0, 2π)
#[inline]
pub fn normalize_angle_positive(angle: f32) -> f32 {
    let mut normalized = libm::fmodf(angle, TAU);
    if normalized < 0.0 {
        normalized += TAU;
    }
    // Из-за округления -ε + 2π может дать ровно 2π
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Точка на окружности с центром (cx, cy)
#[inline]
pub fn polar_to_cartesian(cx: f32, cy: f32, radius: f32, angle: f32) -> (f32, f32) {
    (cx + radius * libm::cosf(angle), cy + radius * libm::sinf(angle))
}

/// Преобразование радианов в градусы (для телеметрии)
#[inline]
pub const fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}
