use thiserror::Error;

use crate::steps::StepKind;

/// Failure raised by a step function itself. Travels through every proxy unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("Step `{step}` is not defined for input {value}")]
    Domain { step: StepKind, value: i64 },

    #[error("Step `{step}` overflowed 64 bits at input {value}")]
    Overflow { step: StepKind, value: i64 },
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration file '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },

    #[error("Unknown step `{name}`. Available steps: {known}")]
    UnknownStep { name: String, known: String },

    #[error("Empty input range {from}..={to} for step `{step}`")]
    EmptyRange { step: StepKind, from: i64, to: i64 },

    #[error("Failed to install logger: {0}")]
    Logger(String),
}

pub type DemoResult<T> = Result<T, DemoError>;
