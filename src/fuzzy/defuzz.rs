//! Дефаззификация агрегированного нечеткого вывода

use super::variable::Universe;

/// Порог "нулевой" массы агрегированного вывода
pub const MASS_EPSILON: f32 = 1e-6;

/// Метод дефаззификации
///
/// Все методы работают на равномерной сетке универсума выходной переменной.
/// Если суммарная масса меньше [`MASS_EPSILON`], результат не определен и
/// возвращается середина универсума (NaN наружу не уходит).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Defuzzifier {
    /// Центр тяжести: Σ y·μ(y) / Σ μ(y)
    #[default]
    Centroid,
    /// Точка, делящая массу пополам
    Bisector,
    /// Среднее точек максимума
    MeanOfMaximum,
    /// Наименьшая точка максимума
    SmallestOfMaximum,
    /// Наибольшая точка максимума
    LargestOfMaximum,
}

impl Defuzzifier {
    /// Четкое значение для функции `aggregated` на сетке `universe`
    pub fn defuzzify<F>(&self, universe: &Universe, aggregated: F) -> f32
    where
        F: Fn(f32) -> f32,
    {
        let mut mass = 0.0f32;
        let mut moment = 0.0f32;
        let mut peak = 0.0f32;
        for y in universe.samples() {
            let mu = aggregated(y);
            mass += mu;
            moment += y * mu;
            peak = peak.max(mu);
        }

        if mass < MASS_EPSILON {
            return universe.midpoint();
        }

        let at_peak = |mu: f32| mu >= peak - MASS_EPSILON;

        match self {
            Defuzzifier::Centroid => moment / mass,
            Defuzzifier::Bisector => {
                let half = mass / 2.0;
                let mut cumulative = 0.0f32;
                universe
                    .samples()
                    .find(|&y| {
                        cumulative += aggregated(y);
                        cumulative >= half
                    })
                    .unwrap_or(universe.max)
            }
            Defuzzifier::MeanOfMaximum => {
                let (sum, count) = universe
                    .samples()
                    .filter(|&y| at_peak(aggregated(y)))
                    .fold((0.0f32, 0u32), |(sum, count), y| (sum + y, count + 1));
                if count == 0 {
                    universe.midpoint()
                } else {
                    sum / count as f32
                }
            }
            Defuzzifier::SmallestOfMaximum => universe
                .samples()
                .find(|&y| at_peak(aggregated(y)))
                .unwrap_or(universe.min),
            Defuzzifier::LargestOfMaximum => universe
                .samples()
                .filter(|&y| at_peak(aggregated(y)))
                .last()
                .unwrap_or(universe.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::MembershipFunction;

    fn universe() -> Universe {
        Universe::new(0.0, 100.0, 1.0).unwrap()
    }

    #[test]
    fn test_centroid_of_symmetric_triangle() {
        let mf = MembershipFunction::triangular(20.0, 50.0, 80.0).unwrap();
        let out = Defuzzifier::Centroid.defuzzify(&universe(), |y| mf.degree(y));
        assert!((out - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_centroid_of_right_shoulder() {
        // Аналитически 60 + 2/3 * 40 = 86.67, на сетке с шагом 1 ровно 87
        let mf = MembershipFunction::triangular(60.0, 100.0, 100.0).unwrap();
        let out = Defuzzifier::Centroid.defuzzify(&universe(), |y| mf.degree(y));
        assert!((out - 87.0).abs() < 1e-3, "centroid = {}", out);
    }

    #[test]
    fn test_zero_mass_falls_back_to_midpoint() {
        for method in [
            Defuzzifier::Centroid,
            Defuzzifier::Bisector,
            Defuzzifier::MeanOfMaximum,
            Defuzzifier::SmallestOfMaximum,
            Defuzzifier::LargestOfMaximum,
        ] {
            let out = method.defuzzify(&universe(), |_| 0.0);
            assert_eq!(out, 50.0);
        }
    }

    #[test]
    fn test_maximum_methods_on_plateau() {
        let mf = MembershipFunction::trapezoidal(10.0, 30.0, 50.0, 90.0).unwrap();
        let u = universe();
        assert_eq!(Defuzzifier::SmallestOfMaximum.defuzzify(&u, |y| mf.degree(y)), 30.0);
        assert_eq!(Defuzzifier::LargestOfMaximum.defuzzify(&u, |y| mf.degree(y)), 50.0);
        assert_eq!(Defuzzifier::MeanOfMaximum.defuzzify(&u, |y| mf.degree(y)), 40.0);
    }

    #[test]
    fn test_bisector_of_symmetric_shape() {
        let mf = MembershipFunction::trapezoidal(20.0, 40.0, 60.0, 80.0).unwrap();
        let out = Defuzzifier::Bisector.defuzzify(&universe(), |y| mf.degree(y));
        assert!((out - 50.0).abs() <= 1.0, "bisector = {}", out);
    }
}
