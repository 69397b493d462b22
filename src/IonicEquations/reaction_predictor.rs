/// Double-displacement product prediction: the partners of two ionic reactants swap,
/// AB + CD -> AD + CB. The written formulas of the new pairs come from the compound base;
/// no charge balancing or coefficient solving is done.
use super::ionic_error::{IonicError, PredictionError};
use crate::Solubility::compound_base::CompoundBase;
use log::{debug, info, warn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    /// "r1 + r2 → p1 + p2"
    pub equation: String,
}

/// Entry point for a reactant list coming out of the parser. Exactly two reactants are accepted.
pub fn predict_from_reactants(
    base: &CompoundBase,
    reactants: &[String],
) -> Result<Prediction, IonicError> {
    match reactants {
        [first, second] => predict_products(base, first, second),
        _ => {
            warn!("prediction needs two reactants, got {:?}", reactants);
            Err(PredictionError::WrongReactantCount {
                count: reactants.len(),
                input: reactants.join(" + "),
            }
            .into())
        }
    }
}

pub fn predict_products(
    base: &CompoundBase,
    first: &str,
    second: &str,
) -> Result<Prediction, IonicError> {
    let first = first.trim();
    let second = second.trim();
    let (c1, a1, c2, a2) = match (base.ions_for_compound(first), base.ions_for_compound(second)) {
        (Some((c1, a1)), Some((c2, a2))) => (c1, a1, c2, a2),
        (first_ions, second_ions) => {
            let formulas: Vec<String> = [(first, first_ions), (second, second_ions)]
                .into_iter()
                .filter(|(_, ions)| ions.is_none())
                .map(|(formula, _)| formula.to_string())
                .collect();
            warn!("unknown compounds in prediction: {:?}", formulas);
            return Err(IonicError::UnknownCompound { formulas });
        }
    };
    debug!("{} -> {} + {}, {} -> {} + {}", first, c1, a1, second, c2, a2);

    // cation of the first reactant meets the anion of the second and vice versa
    let new_pairs = [(c1, a2), (c2, a1)];
    let mut products = Vec::with_capacity(2);
    let mut missing = Vec::new();
    for (cation, anion) in new_pairs {
        match base.formula_for_ions(cation, anion) {
            Some(formula) => products.push(formula.to_string()),
            None => missing.push(format!("{} + {}", cation, anion)),
        }
    }
    if !missing.is_empty() {
        warn!("no written formula for {:?}", missing);
        return Err(PredictionError::NoProducts {
            first: first.to_string(),
            second: second.to_string(),
            missing,
        }
        .into());
    }

    let equation = format!("{} + {} → {}", first, second, products.join(" + "));
    info!("predicted reaction: {}", equation);
    Ok(Prediction {
        reactants: vec![first.to_string(), second.to_string()],
        products,
        equation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solubility::compound_base::default_base;

    #[test]
    fn test_swap_partners() {
        let base = default_base();
        let prediction = predict_products(base, "NaCl", "AgNO3").unwrap();
        assert_eq!(prediction.products, vec!["NaNO3", "AgCl"]);
        assert_eq!(prediction.equation, "NaCl + AgNO3 → NaNO3 + AgCl");

        let prediction = predict_products(base, " HCl ", "NaOH").unwrap();
        assert_eq!(prediction.reactants, vec!["HCl", "NaOH"]);
        assert_eq!(prediction.products, vec!["H2O", "NaCl"]);

        let prediction = predict_products(base, "MgCl2", "NaOH").unwrap();
        assert_eq!(prediction.products, vec!["Mg(OH)2", "NaCl"]);
    }

    #[test]
    fn test_unknown_compounds_are_named() {
        let base = default_base();
        match predict_products(base, "XyZ123", "NaOH") {
            Err(IonicError::UnknownCompound { formulas }) => assert_eq!(formulas, vec!["XyZ123"]),
            other => panic!("unexpected {:?}", other),
        }
        match predict_products(base, "Foo", "Bar") {
            Err(IonicError::UnknownCompound { formulas }) => {
                assert_eq!(formulas, vec!["Foo", "Bar"])
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_product_formula() {
        // Ca²⁺ + Cl⁻ is CaCl2, but H⁺ + CO₃²⁻ has no written formula
        let err = predict_products(default_base(), "CaCO3", "HCl").unwrap_err();
        assert_eq!(
            err,
            IonicError::Prediction(PredictionError::NoProducts {
                first: "CaCO3".to_string(),
                second: "HCl".to_string(),
                missing: vec!["H⁺ + CO₃²⁻".to_string()],
            })
        );
    }

    #[test]
    fn test_reactant_count() {
        let base = default_base();
        let one = vec!["NaCl AgNO3".to_string()];
        assert!(matches!(
            predict_from_reactants(base, &one),
            Err(IonicError::Prediction(
                PredictionError::WrongReactantCount { count: 1, .. }
            ))
        ));
        let three: Vec<String> = ["NaCl", "AgNO3", "KCl"].iter().map(|s| s.to_string()).collect();
        assert!(matches!(
            predict_from_reactants(base, &three),
            Err(IonicError::Prediction(
                PredictionError::WrongReactantCount { count: 3, .. }
            ))
        ));
        let two: Vec<String> = ["BaCl2", "Na2SO4"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            predict_from_reactants(base, &two).unwrap().products,
            vec!["BaSO4", "NaCl"]
        );
    }
}
