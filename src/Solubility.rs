/// cations and anions of the solubility table with names and display colours
pub mod ions;
/// eng
/// Ion-pair solubility matrix (soluble / slightly soluble / insoluble / does not exist / no data) and
/// the queries built on it:
/// 1) solubility of a single cation-anion pair
/// 2) the full table with names, colours, written formulas and the legend
/// 3) substring search over compounds and ion names
/// # Examples
/// ```
/// use ChemPortal::Solubility::compound_base::default_base;
/// use ChemPortal::Solubility::solubility_table::{check_solubility, SolubilityClass};
/// let check = check_solubility(default_base(), "Ag⁺", "Cl⁻");
/// assert_eq!(check.solubility_class, SolubilityClass::Insoluble);
/// assert_eq!(check.formula.as_deref(), Some("AgCl"));
/// ```
pub mod solubility_table;
/// formula -> ions and solubility class lookups; the read-only knowledge base shared by all solvers
pub mod compound_base;
