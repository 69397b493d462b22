//! Top-level ionic equation solver: parse, predict the products when only reactants are given,
//! then generate the molecular, full ionic and net ionic equations.
//! [`solve_ionic_equation`] is the recovered boundary: it never fails, errors become
//! `{"error": true, "message": ...}`.
use super::equation_parser::parse_equation;
pub use super::ionic_error::{EquationSide, IonicError, PredictionError};
use super::ionic_generator::{ReactionResult, generate_ionic_equations};
use super::reaction_predictor::{predict_from_reactants, predict_products};
use crate::Solubility::compound_base::{CompoundBase, default_base};
use crate::Solubility::solubility_table::SOLUBILITY_RULES;
use log::{error, info};
use serde::Serialize;
use serde_json::{Value, json};

pub struct IonicEquationSolver<'a> {
    base: &'a CompoundBase,
}

impl Default for IonicEquationSolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl IonicEquationSolver<'static> {
    /// solver over the process-wide default compound base
    pub fn new() -> Self {
        Self {
            base: default_base(),
        }
    }
}

impl<'a> IonicEquationSolver<'a> {
    pub fn with_base(base: &'a CompoundBase) -> Self {
        Self { base }
    }

    pub fn solve_equation(&self, equation: &str) -> Result<ReactionResult, IonicError> {
        info!("solving: {}", equation);
        let parsed = parse_equation(equation)?;
        match parsed.products {
            Some(products) => {
                generate_ionic_equations(self.base, &parsed.reactants, &products, &parsed.input)
            }
            None => self.predict_reaction(&parsed.reactants),
        }
    }

    pub fn solve_from_reactants_only(
        &self,
        first: &str,
        second: &str,
    ) -> Result<ReactionResult, IonicError> {
        let prediction = predict_products(self.base, first, second)?;
        generate_ionic_equations(
            self.base,
            &prediction.reactants,
            &prediction.products,
            &prediction.equation,
        )
    }

    fn predict_reaction(&self, reactants: &[String]) -> Result<ReactionResult, IonicError> {
        let prediction = predict_from_reactants(self.base, reactants)?;
        generate_ionic_equations(
            self.base,
            &prediction.reactants,
            &prediction.products,
            &prediction.equation,
        )
    }

    pub fn respond(&self, equation: &str) -> IonicResponse {
        IonicResponse::from(self.solve_equation(equation))
    }
}

/// Wire shape of a solver answer: the flattened [`ReactionResult`] with `error: false`,
/// or `error: true` with a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IonicResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub result: Option<ReactionResult>,
}

impl From<Result<ReactionResult, IonicError>> for IonicResponse {
    fn from(outcome: Result<ReactionResult, IonicError>) -> Self {
        match outcome {
            Ok(result) => IonicResponse {
                error: false,
                message: None,
                result: Some(result),
            },
            Err(err) => {
                error!("ionic equation failed: {}", err);
                IonicResponse {
                    error: true,
                    message: Some(err.to_string()),
                    result: None,
                }
            }
        }
    }
}

impl IonicResponse {
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self)
            .unwrap_or_else(|err| json!({"error": true, "message": err.to_string()}))
    }
}

/// Solves with the default compound base and returns the JSON answer
pub fn solve_ionic_equation(equation: &str) -> Value {
    IonicEquationSolver::new().respond(equation).to_json()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleEquation {
    pub input: &'static str,
    pub description: &'static str,
}

pub fn example_equations() -> Vec<ExampleEquation> {
    [
        ("NaCl + AgNO3", "AgCl precipitate"),
        ("HCl + NaOH", "neutralization reaction"),
        ("BaCl2 + Na2SO4", "BaSO4 precipitate"),
        ("CaCO3 + HCl", "CO2 gas evolution"),
        ("NaCl + AgNO3 = AgCl + NaNO3", "complete equation"),
    ]
    .into_iter()
    .map(|(input, description)| ExampleEquation { input, description })
    .collect()
}

const INSTRUCTIONS: &str = "Enter an equation in one of the forms:
1. Reactants only: NaCl + AgNO3
2. Complete equation: NaCl + AgNO3 = AgCl + NaNO3
3. With an arrow: NaCl + AgNO3 → AgCl + NaNO3";

/// Descriptor of the ionic equations page: type, examples, instructions and solubility rules
pub fn ionic_content() -> Value {
    json!({
        "type": "ionic_equation_solver",
        "examples": example_equations(),
        "instructions": INSTRUCTIONS,
        "rules": SOLUBILITY_RULES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = solve_ionic_equation("NaCl AgNO3");
        assert_eq!(response["error"], json!(true));
        let message = response["message"].as_str().unwrap();
        assert!(message.contains("two reactants"));
        assert!(response.get("net_ionic_equation").is_none());
    }

    #[test]
    fn test_success_response_is_flat() {
        let response = solve_ionic_equation("NaCl + AgNO3");
        assert_eq!(response["error"], json!(false));
        assert!(response.get("message").is_none());
        assert_eq!(response["net_ionic_equation"], json!("NaCl + AgNO3 → AgCl"));
        assert_eq!(response["precipitates"], json!(["AgCl"]));
        assert_eq!(
            response["reaction_type"],
            json!("exchange reaction forming a precipitate")
        );
        assert_eq!(response["spectator_ions"], json!([]));
        assert_eq!(
            response["solubility_info"][3],
            json!({
                "formula": "AgCl",
                "solubility_class": "insoluble",
                "description": "Insoluble",
                "is_precipitate": true
            })
        );
    }

    #[test]
    fn test_examples() {
        let solver = IonicEquationSolver::new();
        let outcomes: Vec<bool> = example_equations()
            .iter()
            .map(|example| solver.solve_equation(example.input).is_ok())
            .collect();
        // H⁺ + CO₃²⁻ has no written formula, so the carbonate example cannot be predicted
        assert_eq!(outcomes, vec![true, true, true, false, true]);
        let content = ionic_content();
        assert_eq!(content["type"], json!("ionic_equation_solver"));
        assert_eq!(content["examples"][3]["input"], json!("CaCO3 + HCl"));
        assert_eq!(content["rules"].as_array().unwrap().len(), 6);
    }
}
