/// eng
/// Module to calculate the atomic composition and molar mass of a chemical formula.
/// Handles nested brackets, hydrates, phase marks and user-defined groups of atoms.
/// # Examples
/// ```
/// use ChemPortal::Calculators::molmass::{calculate_molar_mass, parse_formula};
/// let (molar_mass, composition) = calculate_molar_mass("Ca(OH)2", None).unwrap();
/// assert!((molar_mass - 74.09).abs() < 1e-2);
/// assert_eq!(composition.get("O"), Some(&2));
/// assert!(parse_formula("Ca(OH", None).is_err());
/// ```
pub mod molmass;
/// Le Chatelier principle: direction of the equilibrium shift when the pressure changes
pub mod le_chatelier;
