/// Equation text -> ordered reactant and product lists. Accepts "A + B", "A + B = C + D" and "A + B → C + D"
pub mod equation_parser;
/// error taxonomy of the solver: parse, unknown compound, prediction and internal errors
pub mod ionic_error;
/// eng
/// Predicts the products of an exchange (double-displacement) reaction of two ionic compounds by swapping
/// their ions: AB + CD -> AD + CB. Only ion pairs with a written formula in the compound base can be products.
pub mod reaction_predictor;
/// Builds molecular, full ionic and net ionic equations, finds precipitates, classifies the reaction
/// and collects per-compound solubility info and notes.
/// # Examples
/// ```
/// use ChemPortal::IonicEquations::ionic_generator::generate_ionic_equations;
/// use ChemPortal::Solubility::compound_base::default_base;
/// let reactants = vec!["BaCl2".to_string(), "Na2SO4".to_string()];
/// let products = vec!["BaSO4".to_string(), "NaCl".to_string()];
/// let result = generate_ionic_equations(default_base(), &reactants, &products, "BaCl2 + Na2SO4").unwrap();
/// assert_eq!(result.net_ionic_equation, "BaCl2 + Na2SO4 → BaSO4");
/// ```
pub mod ionic_generator;
/// Facade over parser, predictor and generator.
/// # Examples
/// ```
/// use ChemPortal::IonicEquations::ionic_solver::{IonicEquationSolver, solve_ionic_equation};
/// let solver = IonicEquationSolver::new();
/// let result = solver.solve_equation("NaCl + AgNO3").unwrap();
/// assert_eq!(result.precipitates, vec!["AgCl"]);
/// result.pretty_print();
/// // boundary form: never fails, errors are reported in the JSON
/// let answer = solve_ionic_equation("NaCl AgNO3");
/// assert_eq!(answer["error"], true);
/// ```
pub mod ionic_solver;
mod ionic_equations_tests;
