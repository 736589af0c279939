//! Лингвистические переменные и их термы

use heapless::Vec;
use num_traits::Float;

use super::error::{ConfigError, EvaluationError};
use super::membership::MembershipFunction;

/// Максимальное число термов в одной переменной
pub const MAX_SETS: usize = 8;

/// Максимальное число шагов сетки универсума
pub const MAX_GRID_STEPS: f32 = 1_000_000.0;

/// Именованный нечеткий терм
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FuzzySet {
    pub name: &'static str,
    pub function: MembershipFunction,
}

/// Универсум переменной: границы и шаг сетки дискретизации
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Universe {
    pub min: f32,
    pub max: f32,
    /// Шаг равномерной сетки (дефаззификация и отладка)
    pub resolution: f32,
}

impl Universe {
    pub fn new(min: f32, max: f32, resolution: f32) -> Result<Self, ConfigError> {
        let bounds_ok = min.is_finite() && max.is_finite() && min < max;
        let step_ok = resolution.is_finite() && resolution > 0.0;
        if !bounds_ok || !step_ok {
            return Err(ConfigError::InvalidUniverse { min, max });
        }

        // Ширина может переполнить f32 даже при конечных границах
        let steps = (max - min) / resolution;
        if !steps.is_finite() || steps > MAX_GRID_STEPS {
            return Err(ConfigError::InvalidUniverse { min, max });
        }
        Ok(Self { min, max, resolution })
    }

    /// Число узлов сетки: min + i * resolution, i = 0..=floor((max - min) / resolution)
    pub fn sample_count(&self) -> usize {
        // Небольшой допуск, чтобы max попадал в сетку при кратном шаге
        let steps = Float::floor((self.max - self.min) / self.resolution + 1e-4);
        (steps as usize).saturating_add(1)
    }

    /// Значение i-го узла сетки
    #[inline]
    pub fn sample(&self, index: usize) -> f32 {
        (self.min + index as f32 * self.resolution).min(self.max)
    }

    /// Все узлы сетки по возрастанию
    pub fn samples(&self) -> impl Iterator<Item = f32> {
        let universe = *self;
        (0..universe.sample_count()).map(move |i| universe.sample(i))
    }

    /// Ограничение значения границами универсума
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) / 2.0
    }
}

/// Лингвистическая переменная: имя, универсум и набор термов
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: &'static str,
    universe: Universe,
    sets: Vec<FuzzySet, MAX_SETS>,
}

impl LinguisticVariable {
    /// Создание переменной без термов
    pub fn new(
        name: &'static str,
        min: f32,
        max: f32,
        resolution: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name,
            universe: Universe::new(min, max, resolution)?,
            sets: Vec::new(),
        })
    }

    /// Добавление терма (для построения цепочкой)
    pub fn with_set(
        mut self,
        name: &'static str,
        function: MembershipFunction,
    ) -> Result<Self, ConfigError> {
        self.add_set(name, function)?;
        Ok(self)
    }

    /// Добавление терма, имена внутри переменной уникальны
    pub fn add_set(
        &mut self,
        name: &'static str,
        function: MembershipFunction,
    ) -> Result<(), ConfigError> {
        if self.set(name).is_some() {
            return Err(ConfigError::DuplicateSet {
                variable: self.name,
                set: name,
            });
        }
        self.sets
            .push(FuzzySet { name, function })
            .map_err(|_| ConfigError::CapacityExceeded("fuzzy sets per variable"))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Границы универсума (min, max)
    pub fn universe(&self) -> (f32, f32) {
        (self.universe.min, self.universe.max)
    }

    pub fn grid(&self) -> &Universe {
        &self.universe
    }

    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    pub fn set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Степень принадлежности `x` терму `set_name`
    pub fn membership(&self, set_name: &'static str, x: f32) -> Result<f32, EvaluationError> {
        self.set(set_name)
            .map(|s| s.function.degree(x))
            .ok_or(EvaluationError::UnknownSet {
                variable: self.name,
                set: set_name,
            })
    }

    /// Фаззификация: степень принадлежности `x` каждому терму
    pub fn fuzzify(&self, x: f32) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.sets.iter().map(move |s| (s.name, s.function.degree(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance() -> LinguisticVariable {
        LinguisticVariable::new("distance", 0.0, 150.0, 1.0)
            .unwrap()
            .with_set("close", MembershipFunction::triangular(0.0, 0.0, 60.0).unwrap())
            .unwrap()
            .with_set("far", MembershipFunction::triangular(40.0, 150.0, 150.0).unwrap())
            .unwrap()
    }

    #[test]
    fn test_membership_lookup() {
        let var = distance();
        assert_eq!(var.membership("close", 0.0), Ok(1.0));
        assert_eq!(var.membership("far", 0.0), Ok(0.0));
        assert_eq!(var.universe(), (0.0, 150.0));
    }

    #[test]
    fn test_unknown_set() {
        let var = distance();
        assert_eq!(
            var.membership("medium", 10.0),
            Err(EvaluationError::UnknownSet {
                variable: "distance",
                set: "medium"
            })
        );
    }

    #[test]
    fn test_duplicate_set_rejected() {
        let result = distance().with_set("far", MembershipFunction::triangular(0.0, 1.0, 2.0).unwrap());
        assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateSet {
                variable: "distance",
                set: "far"
            }
        );
    }

    #[test]
    fn test_invalid_universe_rejected() {
        assert!(LinguisticVariable::new("x", 10.0, 10.0, 1.0).is_err());
        assert!(LinguisticVariable::new("x", 10.0, 0.0, 1.0).is_err());
        assert!(LinguisticVariable::new("x", 0.0, 10.0, 0.0).is_err());
        assert!(LinguisticVariable::new("x", 0.0, f32::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        // max - min = 6e38 переполняет f32
        assert_eq!(
            Universe::new(-3.0e38, 3.0e38, 1.0),
            Err(ConfigError::InvalidUniverse { min: -3.0e38, max: 3.0e38 })
        );
        assert!(Universe::new(0.0, 1.0e9, 1.0).is_err());
        assert!(Universe::new(0.0, 1.0, 1.0e-9).is_err());

        let widest = Universe::new(0.0, MAX_GRID_STEPS, 1.0).unwrap();
        assert_eq!(widest.sample_count(), MAX_GRID_STEPS as usize + 1);
    }

    #[test]
    fn test_capacity_exceeded() {
        const NAMES: [&str; MAX_SETS + 1] = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let mut var = LinguisticVariable::new("x", 0.0, 10.0, 1.0).unwrap();
        let mf = MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap();
        for name in &NAMES[..MAX_SETS] {
            var.add_set(*name, mf).unwrap();
        }
        assert_eq!(
            var.add_set(NAMES[MAX_SETS], mf),
            Err(ConfigError::CapacityExceeded("fuzzy sets per variable"))
        );
    }

    #[test]
    fn test_sampling_grid_includes_bounds() {
        let var = distance();
        let grid = var.grid();
        assert_eq!(grid.sample_count(), 151);
        let samples: std::vec::Vec<f32> = grid.samples().collect();
        assert_eq!(samples.first(), Some(&0.0));
        assert_eq!(samples.last(), Some(&150.0));

        let coarse = Universe::new(0.0, 10.0, 3.0).unwrap();
        let samples: std::vec::Vec<f32> = coarse.samples().collect();
        assert_eq!(samples, [0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_fuzzify_overlap() {
        let var = distance();
        let degrees: std::vec::Vec<(&str, f32)> = var.fuzzify(50.0).collect();
        assert_eq!(degrees.len(), 2);
        assert!(degrees.iter().all(|&(_, d)| d > 0.0 && d < 1.0));
    }
}
