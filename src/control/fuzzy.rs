//! Нечеткий регулятор: расстояние до препятствия -> уровень уклонения

use crate::config::fuzzy::{avoidance, distance, rules};
use crate::fuzzy::{
    Clause, ConfigError, Defuzzifier, EvaluationError, InferenceEngine, Inputs,
    LinguisticVariable, MembershipFunction, Rule,
};

/// Построение движка по конфигурации `config::fuzzy`
pub fn avoidance_engine(defuzzifier: Defuzzifier) -> Result<InferenceEngine, ConfigError> {
    let triangle = |(a, b, c): (f32, f32, f32)| MembershipFunction::triangular(a, b, c);

    let input = LinguisticVariable::new(
        distance::NAME,
        distance::MIN,
        distance::MAX,
        distance::RESOLUTION,
    )?
    .with_set(distance::close::NAME, triangle(distance::close::POINTS)?)?
    .with_set(distance::far::NAME, triangle(distance::far::POINTS)?)?;

    let output = LinguisticVariable::new(
        avoidance::NAME,
        avoidance::MIN,
        avoidance::MAX,
        avoidance::RESOLUTION,
    )?
    .with_set(avoidance::low::NAME, triangle(avoidance::low::POINTS)?)?
    .with_set(avoidance::high::NAME, triangle(avoidance::high::POINTS)?)?;

    let mut builder = InferenceEngine::builder()
        .input(input)?
        .output(output)?
        .defuzzifier(defuzzifier);

    for (distance_set, avoidance_set) in rules::RULES {
        builder = builder.rule(Rule::new(
            Clause::new(distance::NAME, distance_set),
            Clause::new(avoidance::NAME, avoidance_set),
        ))?;
    }

    builder.build()
}

/// Регулятор уклонения поверх неизменяемого движка вывода
#[derive(Debug, Clone)]
pub struct AvoidanceController {
    engine: InferenceEngine,
}

impl AvoidanceController {
    /// Регулятор из конфигурации с дефаззификацией по центру тяжести
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_defuzzifier(Defuzzifier::Centroid)
    }

    pub fn with_defuzzifier(defuzzifier: Defuzzifier) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(avoidance_engine(defuzzifier)?))
    }

    /// Регулятор поверх произвольного движка с переменными
    /// `distance` -> `avoidance`
    pub fn from_engine(engine: InferenceEngine) -> Self {
        Self { engine }
    }

    /// Уровень уклонения для измеренного расстояния
    ///
    /// Расстояние ограничивается универсумом входной переменной.
    pub fn update(&self, distance_to_obstacle: f32) -> Result<f32, EvaluationError> {
        let clamped = self
            .engine
            .variable(distance::NAME)
            .map(|v| v.grid().clamp(distance_to_obstacle))
            .unwrap_or(distance_to_obstacle);

        let mut inputs = Inputs::new();
        // Одно значение всегда помещается
        let _ = inputs.insert(distance::NAME, clamped);

        self.engine.evaluate_output(&inputs, avoidance::NAME)
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }
}
