//! Движок нечеткого вывода Мамдани
//!
//! Импликация - минимум, агрегация по правилам - максимум, дефаззификация
//! по умолчанию - центр тяжести на равномерной сетке выходного универсума.
//! Движок не хранит изменяемого состояния между вызовами: один экземпляр
//! можно разделять между потоками и тиками без сброса.

use heapless::Vec;

use super::defuzz::Defuzzifier;
use super::error::{ConfigError, EvaluationError};
use super::membership::MembershipFunction;
use super::rule::{Firing, Rule};
use super::variable::LinguisticVariable;
use super::{Inputs, Outputs, MAX_INPUTS, MAX_OUTPUTS};

/// Максимальное число правил в базе
pub const MAX_RULES: usize = 16;

/// Построитель движка
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    inputs: Vec<LinguisticVariable, MAX_INPUTS>,
    outputs: Vec<LinguisticVariable, MAX_OUTPUTS>,
    rules: Vec<Rule, MAX_RULES>,
    defuzzifier: Defuzzifier,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Регистрация входной переменной
    pub fn input(mut self, variable: LinguisticVariable) -> Result<Self, ConfigError> {
        self.check_unique(variable.name())?;
        self.inputs
            .push(variable)
            .map_err(|_| ConfigError::CapacityExceeded("input variables"))?;
        Ok(self)
    }

    /// Регистрация выходной переменной
    pub fn output(mut self, variable: LinguisticVariable) -> Result<Self, ConfigError> {
        self.check_unique(variable.name())?;
        self.outputs
            .push(variable)
            .map_err(|_| ConfigError::CapacityExceeded("output variables"))?;
        Ok(self)
    }

    pub fn rule(mut self, rule: Rule) -> Result<Self, ConfigError> {
        self.rules
            .push(rule)
            .map_err(|_| ConfigError::CapacityExceeded("rules"))?;
        Ok(self)
    }

    pub fn defuzzifier(mut self, defuzzifier: Defuzzifier) -> Self {
        self.defuzzifier = defuzzifier;
        self
    }

    /// Проверка ссылок правил на переменные и сборка движка
    ///
    /// Имена термов здесь не проверяются: неизвестный терм обнаруживается
    /// при вычислении (`EvaluationError::UnknownSet`).
    pub fn build(self) -> Result<InferenceEngine, ConfigError> {
        for rule in self.rules.iter() {
            for clause in rule.antecedents() {
                if !self.inputs.iter().any(|v| v.name() == clause.variable) {
                    return Err(ConfigError::UnknownVariable(clause.variable));
                }
            }
            let target = rule.consequent().variable;
            if !self.outputs.iter().any(|v| v.name() == target) {
                return Err(ConfigError::UnknownVariable(target));
            }
        }

        Ok(InferenceEngine {
            inputs: self.inputs,
            outputs: self.outputs,
            rules: self.rules,
            defuzzifier: self.defuzzifier,
        })
    }

    fn check_unique(&self, name: &'static str) -> Result<(), ConfigError> {
        let taken = self
            .inputs
            .iter()
            .chain(self.outputs.iter())
            .any(|v| v.name() == name);
        if taken {
            Err(ConfigError::DuplicateVariable(name))
        } else {
            Ok(())
        }
    }
}

/// Сконфигурированная система нечеткого вывода (неизменяемая)
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    inputs: Vec<LinguisticVariable, MAX_INPUTS>,
    outputs: Vec<LinguisticVariable, MAX_OUTPUTS>,
    rules: Vec<Rule, MAX_RULES>,
    defuzzifier: Defuzzifier,
}

impl InferenceEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Вычисление всех выходных переменных
    pub fn evaluate(&self, inputs: &Inputs) -> Result<Outputs, EvaluationError> {
        let mut result = Outputs::new();
        for output in self.outputs.iter() {
            let value = self.infer(output, inputs)?;
            // Емкость Outputs равна числу выходных переменных
            let _ = result.insert(output.name(), value);
        }
        Ok(result)
    }

    /// Вычисление одной выходной переменной
    pub fn evaluate_output(&self, inputs: &Inputs, name: &'static str) -> Result<f32, EvaluationError> {
        let output = self
            .outputs
            .iter()
            .find(|v| v.name() == name)
            .ok_or(EvaluationError::UnknownVariable(name))?;
        self.infer(output, inputs)
    }

    /// Срабатывание правил, ведущих к `output`, агрегация и дефаззификация
    fn infer(&self, output: &LinguisticVariable, inputs: &Inputs) -> Result<f32, EvaluationError> {
        let mut implied: Vec<(f32, MembershipFunction), MAX_RULES> = Vec::new();

        for rule in self.rules.iter().filter(|r| r.consequent().variable == output.name()) {
            let Firing { set, strength, .. } = rule.fire(inputs, &self.inputs)?;
            let consequent = output.set(set).ok_or(EvaluationError::UnknownSet {
                variable: output.name(),
                set,
            })?;

            #[cfg(all(feature = "defmt", feature = "debug-fuzzy"))]
            defmt::trace!("Правило -> {}.{}: сила {}", output.name(), set, strength);

            // Правил не больше MAX_RULES
            let _ = implied.push((strength, consequent.function));
        }

        if implied.is_empty() {
            return Err(EvaluationError::EmptyRuleBase(output.name()));
        }

        // aggregated(y) = max_r min(strength_r, μ_r(y))
        let aggregated = |y: f32| {
            implied
                .iter()
                .map(|(strength, function)| strength.min(function.degree(y)))
                .fold(0.0f32, f32::max)
        };

        Ok(self.defuzzifier.defuzzify(output.grid(), aggregated))
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[LinguisticVariable] {
        &self.outputs
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn defuzzifier(&self) -> Defuzzifier {
        self.defuzzifier
    }

    /// Поиск переменной (входной или выходной) по имени
    pub fn variable(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .find(|v| v.name() == name)
    }
}
