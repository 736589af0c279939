//! Фильтры сглаживания управляющих сигналов

use crate::utils::math::constrain;

/// Звено первого порядка с переменным шагом времени
///
/// y += (x - y) * min(rate * dt, 1). При rate * dt >= 1 выход сразу
/// принимает целевое значение, перерегулирования нет.
#[derive(Debug, Clone)]
pub struct FirstOrderLag {
    /// Скорость подхода к цели (1/с)
    rate: f32,
    /// Текущее выходное значение
    output: f32,
}

impl FirstOrderLag {
    /// Создание звена с начальным выходом `initial`
    ///
    /// # Параметры
    /// * `rate_per_s` - скорость подхода в 1/с
    /// * `initial` - начальное значение выхода
    pub fn new(rate_per_s: f32, initial: f32) -> Self {
        Self {
            rate: rate_per_s,
            output: initial,
        }
    }

    /// Шаг фильтра к цели `target` за время `dt` (с)
    pub fn update(&mut self, target: f32, dt: f32) -> f32 {
        let alpha = constrain(self.rate * dt, 0.0, 1.0);
        self.output += (target - self.output) * alpha;
        self.output
    }

    /// Получение текущего выходного значения без обновления
    pub fn get_output(&self) -> f32 {
        self.output
    }

    /// Установка нового значения без фильтрации
    pub fn set_output(&mut self, value: f32) {
        self.output = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approaches_target() {
        let mut lag = FirstOrderLag::new(3.0, 200.0);
        let mut prev_gap = 50.0;
        for _ in 0..120 {
            let out = lag.update(250.0, 1.0 / 60.0);
            let gap = 250.0 - out;
            assert!(gap > 0.0 && gap < prev_gap);
            prev_gap = gap;
        }
        // За 2 с при rate = 3 остается e^-6 от начального рассогласования
        assert!(prev_gap < 0.2);
    }

    #[test]
    fn test_large_step_does_not_overshoot() {
        let mut lag = FirstOrderLag::new(3.0, 0.0);
        assert_eq!(lag.update(10.0, 1.0), 10.0);
        assert_eq!(lag.get_output(), 10.0);
    }

    #[test]
    fn test_zero_dt_holds_output() {
        let mut lag = FirstOrderLag::new(3.0, 5.0);
        assert_eq!(lag.update(100.0, 0.0), 5.0);
        lag.set_output(7.0);
        assert_eq!(lag.get_output(), 7.0);
    }
}
