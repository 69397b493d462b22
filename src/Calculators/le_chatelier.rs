/// Shift of a gas-phase equilibrium under pressure change.
///
/// The equation is written with coefficients only, e.g. "2+1=2+1" for 2SO2 + O2 = 2SO3:
/// every integer (with its sign) is the coefficient of one substance and the last number on the
/// right side is a ±1 marker which is not a substance.
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

static COEFFICIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d+").expect("static pattern is valid"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquilibriumError {
    #[error("wrong format, use the form: 3-3=4+2+1")]
    MissingSeparator,
    #[error("wrong equation format")]
    EmptySide,
    #[error("the last coefficient on the right must be ±1, got {0}")]
    InvalidMarker(i64),
    #[error("different number of substances on the left ({left}) and on the right ({right})")]
    CountMismatch { left: usize, right: usize },
    #[error("coefficient '{0}' is not a valid integer")]
    InvalidCoefficient(String),
    #[error("coefficients are too large")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Right,
    Left,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquilibriumShift {
    pub equation: String,
    pub delta_n: i64,
    /// signed Δn, "+1", "-2", "+0"
    pub delta: String,
    pub direction: ShiftDirection,
    pub explanation: String,
}

fn checked_sum(coeffs: &[i64]) -> Result<i64, EquilibriumError> {
    coeffs
        .iter()
        .try_fold(0i64, |acc, &c| acc.checked_add(c))
        .ok_or(EquilibriumError::Overflow)
}

/// "3-3+2" -> [3, -3, 2]
pub fn parse_side(side: &str) -> Result<Vec<i64>, EquilibriumError> {
    COEFFICIENT
        .find_iter(side)
        .map(|m| {
            m.as_str()
                .parse::<i64>()
                .map_err(|_| EquilibriumError::InvalidCoefficient(m.as_str().to_string()))
        })
        .collect()
}

pub fn calculate_equilibrium(equation: &str) -> Result<EquilibriumShift, EquilibriumError> {
    let Some((left, right)) = equation.split_once('=') else {
        warn!("no '=' in {}", equation);
        return Err(EquilibriumError::MissingSeparator);
    };
    let left_coeffs = parse_side(left)?;
    let right_coeffs = parse_side(right)?;
    let Some((&marker, substance_coeffs)) = right_coeffs.split_last() else {
        return Err(EquilibriumError::EmptySide);
    };
    if left_coeffs.is_empty() {
        return Err(EquilibriumError::EmptySide);
    }
    if marker.checked_abs() != Some(1) {
        return Err(EquilibriumError::InvalidMarker(marker));
    }
    if left_coeffs.len() != substance_coeffs.len() {
        return Err(EquilibriumError::CountMismatch {
            left: left_coeffs.len(),
            right: substance_coeffs.len(),
        });
    }

    let left_sum = checked_sum(&left_coeffs)?;
    let right_sum = checked_sum(substance_coeffs)?;
    let delta_n = right_sum
        .checked_sub(left_sum)
        .ok_or(EquilibriumError::Overflow)?;
    debug!("{}: Δn = {} - {}", equation, right_sum, left_sum);

    let (direction, verdict) = match delta_n {
        d if d > 0 => (
            ShiftDirection::Right,
            "Positive Δn: increasing the pressure shifts the equilibrium to the left",
        ),
        d if d < 0 => (
            ShiftDirection::Left,
            "Negative Δn: increasing the pressure shifts the equilibrium to the right",
        ),
        _ => (
            ShiftDirection::None,
            "Zero Δn: pressure does not affect the position of the equilibrium",
        ),
    };
    Ok(EquilibriumShift {
        equation: equation.to_string(),
        delta_n,
        delta: format!("{:+}", delta_n),
        direction,
        explanation: format!(
            "Δn = {} - {} = {}\n\n✓ {}",
            right_sum, left_sum, delta_n, verdict
        ),
    })
}
