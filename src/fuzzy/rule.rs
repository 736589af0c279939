//! Правила вида "ЕСЛИ x есть A [И y есть B ...] ТО z есть C"

use heapless::Vec;

use super::error::{ConfigError, EvaluationError};
use super::variable::LinguisticVariable;
use super::Inputs;

/// Максимальное число условий в одном правиле
pub const MAX_ANTECEDENTS: usize = 4;

/// Пара (переменная, терм), ссылка по имени
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clause {
    pub variable: &'static str,
    pub set: &'static str,
}

impl Clause {
    pub const fn new(variable: &'static str, set: &'static str) -> Self {
        Self { variable, set }
    }
}

/// Результат срабатывания правила
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Firing {
    /// Выходная переменная
    pub variable: &'static str,
    /// Терм выходной переменной
    pub set: &'static str,
    /// Сила срабатывания в [0, 1]
    pub strength: f32,
}

/// Правило нечеткого вывода
///
/// Условия объединяются конъюнкцией (И = минимум). Правило с одним
/// условием является частным случаем.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedents: Vec<Clause, MAX_ANTECEDENTS>,
    consequent: Clause,
}

impl Rule {
    /// Правило с одним условием
    pub fn new(antecedent: Clause, consequent: Clause) -> Self {
        let mut antecedents = Vec::new();
        // Емкость >= 1, одно условие всегда помещается
        let _ = antecedents.push(antecedent);
        Self {
            antecedents,
            consequent,
        }
    }

    /// Правило с конъюнкцией условий
    pub fn all(antecedents: &[Clause], consequent: Clause) -> Result<Self, ConfigError> {
        if antecedents.is_empty() {
            return Err(ConfigError::EmptyAntecedent);
        }
        let antecedents = Vec::from_slice(antecedents)
            .map_err(|_| ConfigError::CapacityExceeded("antecedents per rule"))?;
        Ok(Self {
            antecedents,
            consequent,
        })
    }

    pub fn antecedents(&self) -> &[Clause] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Clause {
        &self.consequent
    }

    /// Вычисление силы срабатывания по четким входам
    ///
    /// Нулевая сила не является ошибкой: решение пропустить правило
    /// остается за вызывающим кодом.
    pub fn fire(
        &self,
        inputs: &Inputs,
        variables: &[LinguisticVariable],
    ) -> Result<Firing, EvaluationError> {
        let mut strength = 1.0f32;

        for clause in self.antecedents.iter() {
            let variable = variables
                .iter()
                .find(|v| v.name() == clause.variable)
                .ok_or(EvaluationError::UnknownVariable(clause.variable))?;
            let value = *inputs
                .get(&clause.variable)
                .ok_or(EvaluationError::MissingInput(clause.variable))?;

            strength = strength.min(variable.membership(clause.set, value)?);
        }

        Ok(Firing {
            variable: self.consequent.variable,
            set: self.consequent.set,
            strength,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::{crisp, MembershipFunction};

    fn variables() -> [LinguisticVariable; 2] {
        let distance = LinguisticVariable::new("distance", 0.0, 150.0, 1.0)
            .unwrap()
            .with_set("close", MembershipFunction::triangular(0.0, 0.0, 60.0).unwrap())
            .unwrap()
            .with_set("far", MembershipFunction::triangular(40.0, 150.0, 150.0).unwrap())
            .unwrap();
        let speed = LinguisticVariable::new("speed", 0.0, 60.0, 1.0)
            .unwrap()
            .with_set("fast", MembershipFunction::trapezoidal(20.0, 40.0, 60.0, 60.0).unwrap())
            .unwrap();
        [distance, speed]
    }

    #[test]
    fn test_fire_single_antecedent() {
        let rule = Rule::new(Clause::new("distance", "close"), Clause::new("avoidance", "high"));
        let firing = rule
            .fire(&crisp(&[("distance", 30.0)]).unwrap(), &variables())
            .unwrap();
        assert_eq!(firing.variable, "avoidance");
        assert_eq!(firing.set, "high");
        assert!((firing.strength - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_strength_is_not_an_error() {
        let rule = Rule::new(Clause::new("distance", "far"), Clause::new("avoidance", "low"));
        let firing = rule
            .fire(&crisp(&[("distance", 10.0)]).unwrap(), &variables())
            .unwrap();
        assert_eq!(firing.strength, 0.0);
    }

    #[test]
    fn test_conjunction_takes_minimum() {
        let rule = Rule::all(
            &[Clause::new("distance", "close"), Clause::new("speed", "fast")],
            Clause::new("avoidance", "high"),
        )
        .unwrap();
        // close(15) = 0.75, fast(30) = 0.5
        let inputs = crisp(&[("distance", 15.0), ("speed", 30.0)]).unwrap();
        let firing = rule.fire(&inputs, &variables()).unwrap();
        assert!((firing.strength - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_missing_input() {
        let rule = Rule::all(
            &[Clause::new("distance", "close"), Clause::new("speed", "fast")],
            Clause::new("avoidance", "high"),
        )
        .unwrap();
        let inputs = crisp(&[("distance", 15.0)]).unwrap();
        assert_eq!(
            rule.fire(&inputs, &variables()),
            Err(EvaluationError::MissingInput("speed"))
        );
    }

    #[test]
    fn test_unknown_set() {
        let rule = Rule::new(Clause::new("distance", "medium"), Clause::new("avoidance", "low"));
        let inputs = crisp(&[("distance", 15.0)]).unwrap();
        assert_eq!(
            rule.fire(&inputs, &variables()),
            Err(EvaluationError::UnknownSet {
                variable: "distance",
                set: "medium"
            })
        );
    }

    #[test]
    fn test_empty_antecedent_rejected() {
        assert_eq!(
            Rule::all(&[], Clause::new("avoidance", "low")),
            Err(ConfigError::EmptyAntecedent)
        );
    }
}
