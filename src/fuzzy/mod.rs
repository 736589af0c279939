//! Нечеткая логика: функции принадлежности, переменные, правила, вывод

mod defuzz;
mod engine;
mod error;
mod membership;
mod rule;
mod variable;

use heapless::LinearMap;

pub use defuzz::{Defuzzifier, MASS_EPSILON};
pub use engine::{EngineBuilder, InferenceEngine, MAX_RULES};
pub use error::{ConfigError, EvaluationError};
pub use membership::MembershipFunction;
pub use rule::{Clause, Firing, Rule, MAX_ANTECEDENTS};
pub use variable::{FuzzySet, LinguisticVariable, Universe, MAX_GRID_STEPS, MAX_SETS};

/// Максимальное число входных переменных
pub const MAX_INPUTS: usize = 4;
/// Максимальное число выходных переменных
pub const MAX_OUTPUTS: usize = 4;

/// Четкие входы: имя переменной -> значение
pub type Inputs = LinearMap<&'static str, f32, MAX_INPUTS>;
/// Четкие выходы: имя переменной -> значение
pub type Outputs = LinearMap<&'static str, f32, MAX_OUTPUTS>;

/// Сборка входов из пар (имя, значение), повтор имени перезаписывает значение
pub fn crisp(pairs: &[(&'static str, f32)]) -> Result<Inputs, EvaluationError> {
    let mut inputs = Inputs::new();
    for &(name, value) in pairs {
        inputs
            .insert(name, value)
            .map_err(|_| EvaluationError::CapacityExceeded("crisp inputs"))?;
    }
    Ok(inputs)
}
