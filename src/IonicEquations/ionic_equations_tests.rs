/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::IonicEquations::ionic_generator::ReactionType;
    use crate::IonicEquations::ionic_solver::{
        IonicEquationSolver, IonicError, PredictionError, solve_ionic_equation,
    };
    use crate::Solubility::compound_base::CompoundBase;
    use crate::Solubility::solubility_table::{IonPairEntry, SolubilityClass};
    use serde_json::json;

    fn sorted_sides(equation: &str) -> (Vec<String>, Vec<String>) {
        let (left, right) = equation.split_once(" → ").unwrap();
        let side = |s: &str| {
            let mut tokens: Vec<String> = s.split(" + ").map(str::to_string).collect();
            tokens.sort();
            tokens
        };
        (side(left), side(right))
    }

    #[test]
    fn test_silver_chloride_precipitation() {
        let solver = IonicEquationSolver::new();
        let result = solver.solve_equation("NaCl + AgNO3").unwrap();
        assert_eq!(result.original_equation, "NaCl + AgNO3 → NaNO3 + AgCl");
        assert_eq!(result.molecular_equation, "NaCl + AgNO3 → NaNO3 + AgCl");
        assert_eq!(
            result.total_ionic_equation,
            "Na⁺ + Cl⁻ + Ag⁺ + NO₃⁻ → Na⁺ + NO₃⁻ + AgCl"
        );
        assert_eq!(result.net_ionic_equation, "NaCl + AgNO3 → AgCl");
        assert_eq!(result.precipitates, vec!["AgCl"]);
        assert_eq!(result.reaction_type, ReactionType::Precipitation);
        assert!(result.spectator_ions.is_empty());
        assert_eq!(
            result.notes,
            vec![
                "precipitate formed: AgCl",
                "NaNO3 is a soluble compound",
                "AgCl is an insoluble compound (precipitate)"
            ]
        );
    }

    #[test]
    fn test_neutralization() {
        let result = IonicEquationSolver::new()
            .solve_equation("HCl + NaOH")
            .unwrap();
        assert_eq!(result.molecular_equation, "HCl + NaOH → H2O + NaCl");
        assert!(result.precipitates.is_empty());
        assert_eq!(result.reaction_type, ReactionType::Neutralization);
        // no precipitate: the net equation falls back to the full ionic one
        assert_eq!(result.net_ionic_equation, result.total_ionic_equation);
        assert_eq!(
            result.total_ionic_equation,
            "H⁺ + Cl⁻ + Na⁺ + OH⁻ → H⁺ + OH⁻ + Na⁺ + Cl⁻"
        );
    }

    #[test]
    fn test_barium_sulfate_full_equation() {
        let result = IonicEquationSolver::new()
            .solve_equation("BaCl2 + Na2SO4 = BaSO4 + NaCl")
            .unwrap();
        assert_eq!(result.original_equation, "BaCl2 + Na2SO4 = BaSO4 + NaCl");
        assert_eq!(
            result.total_ionic_equation,
            "Ba²⁺ + Cl⁻ + Na⁺ + SO₄²⁻ → BaSO4 + Na⁺ + Cl⁻"
        );
        assert_eq!(result.net_ionic_equation, "BaCl2 + Na2SO4 → BaSO4");
        assert_eq!(result.precipitates, vec!["BaSO4"]);
        let barium_sulfate = result
            .solubility_info
            .iter()
            .find(|info| info.formula == "BaSO4")
            .unwrap();
        assert!(barium_sulfate.is_precipitate);
        assert_eq!(barium_sulfate.solubility_class, SolubilityClass::Insoluble);
    }

    #[test]
    fn test_explicit_form_matches_predicted_up_to_product_order() {
        let solver = IonicEquationSolver::new();
        let predicted = solver.solve_equation("NaCl + AgNO3").unwrap();
        let explicit = solver
            .solve_equation("NaCl + AgNO3 = AgCl + NaNO3")
            .unwrap();
        assert_eq!(predicted.net_ionic_equation, explicit.net_ionic_equation);
        // typed products keep their order, so the full ionic strings differ
        assert_ne!(predicted.total_ionic_equation, explicit.total_ionic_equation);
        assert!(explicit.total_ionic_equation.ends_with("→ AgCl + Na⁺ + NO₃⁻"));
        assert!(predicted.total_ionic_equation.ends_with("→ Na⁺ + NO₃⁻ + AgCl"));
        // but each side holds the same species
        assert_eq!(
            sorted_sides(&predicted.total_ionic_equation),
            sorted_sides(&explicit.total_ionic_equation)
        );
        assert_eq!(predicted.precipitates, explicit.precipitates);

        // same product order: byte-identical equations
        let arrow = solver
            .solve_equation("NaCl + AgNO3 → NaNO3 + AgCl")
            .unwrap();
        assert_eq!(arrow.total_ionic_equation, predicted.total_ionic_equation);
        assert_eq!(arrow.molecular_equation, predicted.molecular_equation);
    }

    #[test]
    fn test_from_reactants_only() {
        let solver = IonicEquationSolver::new();
        let direct = solver.solve_from_reactants_only("CuCl2", "NaOH").unwrap();
        let parsed = solver.solve_equation("CuCl2 + NaOH").unwrap();
        assert_eq!(direct, parsed);
        assert_eq!(direct.precipitates, vec!["Cu(OH)2"]);
    }

    #[test]
    fn test_solving_is_idempotent() {
        for equation in ["NaCl + AgNO3", "HCl + NaOH", "XyZ123 + NaOH", "NaCl AgNO3"] {
            let first = serde_json::to_string(&solve_ionic_equation(equation)).unwrap();
            let second = serde_json::to_string(&solve_ionic_equation(equation)).unwrap();
            assert_eq!(first, second, "{}", equation);
        }
    }

    #[test]
    fn test_missing_plus_is_a_prediction_error() {
        let err = IonicEquationSolver::new()
            .solve_equation("NaCl AgNO3")
            .unwrap_err();
        assert!(matches!(
            err,
            IonicError::Prediction(PredictionError::WrongReactantCount { count: 1, .. })
        ));
        let response = solve_ionic_equation("NaCl AgNO3");
        assert_eq!(response["error"], json!(true));
    }

    #[test]
    fn test_unknown_compound_is_named() {
        let err = IonicEquationSolver::new()
            .solve_equation("XyZ123 + NaOH")
            .unwrap_err();
        assert_eq!(
            err,
            IonicError::UnknownCompound {
                formulas: vec!["XyZ123".to_string()]
            }
        );
        let response = solve_ionic_equation("XyZ123 + NaOH");
        assert_eq!(response["error"], json!(true));
        let message = response["message"].as_str().unwrap();
        assert!(message.contains("XyZ123"));
        assert!(!message.contains("NaOH"));
    }

    #[test]
    fn test_empty_side_is_a_parse_error() {
        let response = solve_ionic_equation("NaCl + AgNO3 =");
        assert_eq!(response["error"], json!(true));
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("NaCl + AgNO3 =")
        );
    }

    #[test]
    fn test_explicit_equation_with_unknown_gas() {
        let result = IonicEquationSolver::new()
            .solve_equation("CaCO3 + HCl = CaCl2 + H2O + CO2")
            .unwrap();
        assert_eq!(
            result.total_ionic_equation,
            "CaCO3 + H⁺ + Cl⁻ → Ca²⁺ + Cl⁻ + H⁺ + OH⁻ + CO2"
        );
        assert!(result.precipitates.is_empty());
        assert_eq!(result.reaction_type, ReactionType::Exchange);
        let co2 = result.solubility_info.last().unwrap();
        assert_eq!(co2.formula, "CO2");
        assert_eq!(co2.solubility_class, SolubilityClass::Unknown);
    }

    #[test]
    fn test_slightly_soluble_product_dissociates() {
        // Ca(OH)2 is slightly soluble: written as ions and not reported as a precipitate
        let result = IonicEquationSolver::new()
            .solve_equation("CaCl2 + NaOH")
            .unwrap();
        assert_eq!(result.molecular_equation, "CaCl2 + NaOH → Ca(OH)2 + NaCl");
        assert!(result.precipitates.is_empty());
        assert_eq!(
            result.total_ionic_equation,
            "Ca²⁺ + Cl⁻ + Na⁺ + OH⁻ → Ca²⁺ + OH⁻ + Na⁺ + Cl⁻"
        );
        assert!(
            result
                .notes
                .contains(&"Ca(OH)2 is a slightly soluble compound".to_string())
        );
    }

    #[test]
    fn test_solver_over_custom_base() {
        let pairs = [
            IonPairEntry::new("Na⁺", "Cl⁻", SolubilityClass::Soluble),
            IonPairEntry::new("K⁺", "Br⁻", SolubilityClass::Soluble),
            IonPairEntry::new("Na⁺", "Br⁻", SolubilityClass::Soluble),
            IonPairEntry::new("K⁺", "Cl⁻", SolubilityClass::Insoluble),
        ];
        let formulas = [
            ("Na⁺", "Cl⁻", "NaCl"),
            ("K⁺", "Br⁻", "KBr"),
            ("Na⁺", "Br⁻", "NaBr"),
            ("K⁺", "Cl⁻", "KCl"),
        ];
        let base = CompoundBase::from_tables(&pairs, &formulas, &[]);
        let solver = IonicEquationSolver::with_base(&base);
        let result = solver.solve_equation("NaCl + KBr").unwrap();
        assert_eq!(result.molecular_equation, "NaCl + KBr → NaBr + KCl");
        assert_eq!(result.precipitates, vec!["KCl"]);
        assert_eq!(result.net_ionic_equation, "NaCl + KBr → KCl");
        assert!(
            IonicEquationSolver::new()
                .solve_equation("NaCl + KBr")
                .is_err()
        );
    }
}
