//! Ошибки нечеткой системы вывода

use core::fmt;

/// Ошибки конфигурации (возникают при построении, фатальны для настройки)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Точки излома функции принадлежности не упорядочены или NaN
    InvalidBreakpoints,
    /// Границы универсума некорректны (min >= max, шаг <= 0 или сетка слишком велика)
    InvalidUniverse { min: f32, max: f32 },
    /// Повторное имя терма внутри переменной
    DuplicateSet { variable: &'static str, set: &'static str },
    /// Повторное имя переменной в движке
    DuplicateVariable(&'static str),
    /// Правило ссылается на незарегистрированную переменную
    UnknownVariable(&'static str),
    /// Правило без условий
    EmptyAntecedent,
    /// Превышена емкость статического буфера
    CapacityExceeded(&'static str),
}

/// Ошибки вычисления (возникают на каждом вызове, восстановимы)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationError {
    /// Во входных данных нет значения для переменной
    MissingInput(&'static str),
    /// Терм не зарегистрирован в переменной
    UnknownSet { variable: &'static str, set: &'static str },
    /// Запрошена незарегистрированная выходная переменная
    UnknownVariable(&'static str),
    /// Для выходной переменной нет ни одного правила
    EmptyRuleBase(&'static str),
    /// Входов больше, чем вмещает карта четких значений
    CapacityExceeded(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBreakpoints => write!(f, "membership breakpoints are not ordered"),
            ConfigError::InvalidUniverse { min, max } => {
                write!(f, "invalid universe [{}, {}]", min, max)
            }
            ConfigError::DuplicateSet { variable, set } => {
                write!(f, "duplicate set '{}' in variable '{}'", set, variable)
            }
            ConfigError::DuplicateVariable(name) => write!(f, "duplicate variable '{}'", name),
            ConfigError::UnknownVariable(name) => write!(f, "unknown variable '{}'", name),
            ConfigError::EmptyAntecedent => write!(f, "rule has no antecedents"),
            ConfigError::CapacityExceeded(what) => write!(f, "capacity exceeded: {}", what),
        }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::MissingInput(name) => write!(f, "missing input '{}'", name),
            EvaluationError::UnknownSet { variable, set } => {
                write!(f, "unknown set '{}' in variable '{}'", set, variable)
            }
            EvaluationError::UnknownVariable(name) => write!(f, "unknown output '{}'", name),
            EvaluationError::EmptyRuleBase(name) => write!(f, "no rules for output '{}'", name),
            EvaluationError::CapacityExceeded(what) => write!(f, "capacity exceeded: {}", what),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::InvalidBreakpoints => defmt::write!(fmt, "Fuzzy: invalid breakpoints"),
            ConfigError::InvalidUniverse { min, max } => {
                defmt::write!(fmt, "Fuzzy: invalid universe [{}, {}]", min, max)
            }
            ConfigError::DuplicateSet { variable, set } => {
                defmt::write!(fmt, "Fuzzy: duplicate set {}.{}", variable, set)
            }
            ConfigError::DuplicateVariable(name) => {
                defmt::write!(fmt, "Fuzzy: duplicate variable {}", name)
            }
            ConfigError::UnknownVariable(name) => {
                defmt::write!(fmt, "Fuzzy: unknown variable {}", name)
            }
            ConfigError::EmptyAntecedent => defmt::write!(fmt, "Fuzzy: empty antecedent"),
            ConfigError::CapacityExceeded(what) => {
                defmt::write!(fmt, "Fuzzy: capacity exceeded ({})", what)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EvaluationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            EvaluationError::MissingInput(name) => defmt::write!(fmt, "Fuzzy: missing input {}", name),
            EvaluationError::UnknownSet { variable, set } => {
                defmt::write!(fmt, "Fuzzy: unknown set {}.{}", variable, set)
            }
            EvaluationError::UnknownVariable(name) => {
                defmt::write!(fmt, "Fuzzy: unknown output {}", name)
            }
            EvaluationError::EmptyRuleBase(name) => {
                defmt::write!(fmt, "Fuzzy: empty rule base for {}", name)
            }
            EvaluationError::CapacityExceeded(what) => {
                defmt::write!(fmt, "Fuzzy: capacity exceeded ({})", what)
            }
        }
    }
}
