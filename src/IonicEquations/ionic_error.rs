use std::fmt;
use thiserror::Error;

/// side of an equation, used to point at the part of the input that could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationSide {
    Reactants,
    Products,
}

impl fmt::Display for EquationSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EquationSide::Reactants => write!(f, "reactant"),
            EquationSide::Products => write!(f, "product"),
        }
    }
}

/// Failures of double-displacement product prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error(
        "enter exactly two reactants, separated by + (for example: NaCl + AgNO3); got {count}: '{input}'"
    )]
    WrongReactantCount { count: usize, input: String },
    #[error("could not determine reaction products for {first} + {second}: no written formula for {}", .missing.join(", "))]
    NoProducts {
        first: String,
        second: String,
        missing: Vec<String>,
    },
}

/// Everything that can go wrong while solving an ionic equation.
/// All variants are recovered at the solver boundary and turned into `{error: true, message}`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IonicError {
    #[error("could not recognize compounds in the equation '{input}': the {side} side is empty")]
    Parse { input: String, side: EquationSide },
    #[error("unknown compounds: {}", .formulas.join(", "))]
    UnknownCompound { formulas: Vec<String> },
    #[error(transparent)]
    Prediction(#[from] PredictionError),
    #[error("error while generating ionic equations: {0}")]
    Internal(String),
}
