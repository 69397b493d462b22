/// Turns a free-text equation into ordered reactant and product lists.
///
/// Accepted forms:
/// 1) reactants only: "NaCl + AgNO3"
/// 2) full equation: "NaCl + AgNO3 = AgCl + NaNO3"
/// 3) with the reaction arrow: "NaCl + AgNO3 → AgCl + NaNO3"
///
/// `=` is looked for first, then `→`. Without a separator the whole input is a reactant list and
/// the products have to be predicted.
use super::ionic_error::{EquationSide, IonicError};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static PLUS_SPLITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\+\s*").expect("static pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Separator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "→")]
    Arrow,
    #[serde(rename = "reactants-only")]
    ReactantsOnly,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Equals => "=",
            Separator::Arrow => "→",
            Separator::ReactantsOnly => "reactants-only",
        }
    }

    fn detect(input: &str) -> Self {
        if input.contains('=') {
            Separator::Equals
        } else if input.contains('→') {
            Separator::Arrow
        } else {
            Separator::ReactantsOnly
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equation {
    /// input with surrounding whitespace removed
    pub input: String,
    pub separator: Separator,
    pub reactants: Vec<String>,
    /// None when the user typed reactants only
    pub products: Option<Vec<String>>,
}

/// Splits one side of an equation on `+`, keeping order and dropping empty tokens
pub fn parse_compounds(side: &str) -> Vec<String> {
    PLUS_SPLITTER
        .split(side.trim())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_equation(input: &str) -> Result<Equation, IonicError> {
    let input = input.trim();
    let separator = Separator::detect(input);

    let (left, right) = match separator {
        Separator::ReactantsOnly => {
            return Ok(Equation {
                input: input.to_string(),
                separator,
                reactants: parse_compounds(input),
                products: None,
            });
        }
        Separator::Equals => input.split_once('='),
        Separator::Arrow => input.split_once('→'),
    }
    .unwrap_or((input, ""));

    let reactants = parse_compounds(left);
    if reactants.is_empty() {
        return Err(IonicError::Parse {
            input: input.to_string(),
            side: EquationSide::Reactants,
        });
    }
    let products = parse_compounds(right);
    if products.is_empty() {
        return Err(IonicError::Parse {
            input: input.to_string(),
            side: EquationSide::Products,
        });
    }

    Ok(Equation {
        input: input.to_string(),
        separator,
        reactants,
        products: Some(products),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compounds_tolerates_whitespace() {
        assert_eq!(parse_compounds("NaCl+AgNO3"), vec!["NaCl", "AgNO3"]);
        assert_eq!(
            parse_compounds("  NaCl  +   AgNO3 + Ca(OH)2 "),
            vec!["NaCl", "AgNO3", "Ca(OH)2"]
        );
        assert_eq!(parse_compounds("NaCl + + AgNO3 +"), vec!["NaCl", "AgNO3"]);
        assert!(parse_compounds("   ").is_empty());
    }

    #[test]
    fn test_parse_full_equation() {
        let eq = parse_equation("  NaCl + AgNO3 = AgCl + NaNO3 ").unwrap();
        assert_eq!(eq.input, "NaCl + AgNO3 = AgCl + NaNO3");
        assert_eq!(eq.separator, Separator::Equals);
        assert_eq!(eq.reactants, vec!["NaCl", "AgNO3"]);
        assert_eq!(
            eq.products,
            Some(vec!["AgCl".to_string(), "NaNO3".to_string()])
        );

        let eq = parse_equation("BaCl2 + Na2SO4 → BaSO4 + NaCl").unwrap();
        assert_eq!(eq.separator, Separator::Arrow);
        assert_eq!(eq.products.unwrap(), vec!["BaSO4", "NaCl"]);
    }

    #[test]
    fn test_equals_has_priority_over_arrow() {
        // the first '=' splits, the arrow then stays inside the right-hand token
        let eq = parse_equation("A + B = C → D").unwrap();
        assert_eq!(eq.separator, Separator::Equals);
        assert_eq!(eq.products.unwrap(), vec!["C → D"]);
    }

    #[test]
    fn test_reactants_only() {
        let eq = parse_equation("NaCl + AgNO3").unwrap();
        assert_eq!(eq.separator, Separator::ReactantsOnly);
        assert_eq!(eq.reactants, vec!["NaCl", "AgNO3"]);
        assert_eq!(eq.products, None);

        // missing '+' gives a single token; the predictor rejects it later
        let eq = parse_equation("NaCl AgNO3").unwrap();
        assert_eq!(eq.reactants, vec!["NaCl AgNO3"]);
    }

    #[test]
    fn test_empty_sides_are_parse_errors() {
        match parse_equation("NaCl + AgNO3 =") {
            Err(IonicError::Parse { side, .. }) => assert_eq!(side, EquationSide::Products),
            other => panic!("unexpected {:?}", other),
        }
        match parse_equation(" → AgCl") {
            Err(IonicError::Parse { side, input }) => {
                assert_eq!(side, EquationSide::Reactants);
                assert_eq!(input, "→ AgCl");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse_equation("+ = +"),
            Err(IonicError::Parse { .. })
        ));
    }

    #[test]
    fn test_separator_serialization() {
        assert_eq!(
            serde_json::to_value(Separator::Arrow).unwrap(),
            serde_json::json!("→")
        );
        assert_eq!(Separator::ReactantsOnly.as_str(), "reactants-only");
    }
}
