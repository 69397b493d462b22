//! # Compound knowledge base
//!
//! Maps a written chemical formula ("NaCl", "Ca(OH)2") to its constituent ions and solubility class.
//! The base is built once from three tables and is read-only afterwards:
//!
//! 1) the ion-pair solubility matrix, which decides the class of every compound;
//! 2) the closed formula table [`COMMON_FORMULAS`], the only place where a (cation, anion) pair gets
//!    a written formula. There is no charge-balancing arithmetic here: pairs outside the table have
//!    no formula, and reactions producing them cannot be predicted;
//! 3) the supplementary list [`SUPPLEMENTARY_COMPOUNDS`] of formulas that are added even when
//!    the matrix does not produce them. Their class is still looked up in the matrix and falls back
//!    to `unknown`.
//!
//! Tests and callers that need different data construct their own instance with
//! [`CompoundBase::from_tables`]; everybody else shares [`default_base`].
//!
//! # Examples
//! ```
//! use ChemPortal::Solubility::compound_base::CompoundBase;
//! use ChemPortal::Solubility::solubility_table::SolubilityClass;
//! let base = CompoundBase::new();
//! let agcl = base.lookup_compound("AgCl").unwrap();
//! assert_eq!(agcl.solubility_class, SolubilityClass::Insoluble);
//! assert_eq!(base.ions_for_compound("BaCl2"), Some(("Ba²⁺", "Cl⁻")));
//! assert_eq!(base.formula_for_ions("Ag⁺", "NO₃⁻"), Some("AgNO3"));
//! // no general formula synthesis
//! assert_eq!(base.formula_for_ions("Zn²⁺", "PO₄³⁻"), None);
//! ```
use super::solubility_table::{IonPairEntry, SOLUBILITY_MATRIX, SolubilityClass};
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// (cation, anion, formula)
pub type FormulaRecord = (&'static str, &'static str, &'static str);
/// (formula, cation, anion)
pub type SupplementaryRecord = (&'static str, &'static str, &'static str);

pub const COMMON_FORMULAS: &[FormulaRecord] = &[
    ("Na⁺", "Cl⁻", "NaCl"),
    ("K⁺", "Cl⁻", "KCl"),
    ("H⁺", "Cl⁻", "HCl"),
    ("Na⁺", "OH⁻", "NaOH"),
    ("K⁺", "OH⁻", "KOH"),
    ("Ag⁺", "NO₃⁻", "AgNO3"),
    ("Ag⁺", "Cl⁻", "AgCl"),
    ("Na⁺", "NO₃⁻", "NaNO3"),
    ("Ba²⁺", "Cl⁻", "BaCl2"),
    ("Na⁺", "SO₄²⁻", "Na2SO4"),
    ("Ba²⁺", "SO₄²⁻", "BaSO4"),
    ("H⁺", "SO₄²⁻", "H2SO4"),
    ("Na⁺", "CO₃²⁻", "Na2CO3"),
    ("Ca²⁺", "CO₃²⁻", "CaCO3"),
    ("Ca²⁺", "Cl⁻", "CaCl2"),
    ("Mg²⁺", "Cl⁻", "MgCl2"),
    ("Al³⁺", "Cl⁻", "AlCl3"),
    ("Fe³⁺", "Cl⁻", "FeCl3"),
    ("Cu²⁺", "Cl⁻", "CuCl2"),
    ("Pb²⁺", "Cl⁻", "PbCl2"),
    ("Ca²⁺", "OH⁻", "Ca(OH)2"),
    ("Mg²⁺", "OH⁻", "Mg(OH)2"),
    ("Al³⁺", "OH⁻", "Al(OH)3"),
    ("Fe³⁺", "OH⁻", "Fe(OH)3"),
    ("Cu²⁺", "OH⁻", "Cu(OH)2"),
    ("H⁺", "OH⁻", "H2O"),
];

pub const SUPPLEMENTARY_COMPOUNDS: &[SupplementaryRecord] = &[
    ("NaCl", "Na⁺", "Cl⁻"),
    ("KCl", "K⁺", "Cl⁻"),
    ("HCl", "H⁺", "Cl⁻"),
    ("NaOH", "Na⁺", "OH⁻"),
    ("KOH", "K⁺", "OH⁻"),
    ("AgNO3", "Ag⁺", "NO₃⁻"),
    ("AgCl", "Ag⁺", "Cl⁻"),
    ("NaNO3", "Na⁺", "NO₃⁻"),
    ("BaCl2", "Ba²⁺", "Cl⁻"),
    ("Na2SO4", "Na⁺", "SO₄²⁻"),
    ("BaSO4", "Ba²⁺", "SO₄²⁻"),
    ("H2SO4", "H⁺", "SO₄²⁻"),
    ("Na2CO3", "Na⁺", "CO₃²⁻"),
    ("CaCO3", "Ca²⁺", "CO₃²⁻"),
    ("CaCl2", "Ca²⁺", "Cl⁻"),
    ("MgCl2", "Mg²⁺", "Cl⁻"),
    ("AlCl3", "Al³⁺", "Cl⁻"),
    ("FeCl3", "Fe³⁺", "Cl⁻"),
    ("CuCl2", "Cu²⁺", "Cl⁻"),
    ("PbCl2", "Pb²⁺", "Cl⁻"),
    ("Ca(OH)2", "Ca²⁺", "OH⁻"),
    ("Mg(OH)2", "Mg²⁺", "OH⁻"),
    ("Al(OH)3", "Al³⁺", "OH⁻"),
    ("Fe(OH)3", "Fe³⁺", "OH⁻"),
    ("Cu(OH)2", "Cu²⁺", "OH⁻"),
    ("H2O", "H⁺", "OH⁻"),
    ("CO2", "C⁴⁺", "O²⁻"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    pub formula: String,
    pub cation: String,
    pub anion: String,
    pub solubility_class: SolubilityClass,
    pub description: String,
    pub color: String,
}

impl Compound {
    fn from_class(formula: &str, cation: &str, anion: &str, class: SolubilityClass) -> Self {
        Self {
            formula: formula.to_string(),
            cation: cation.to_string(),
            anion: anion.to_string(),
            solubility_class: class,
            description: class.description().to_string(),
            color: class.color().to_string(),
        }
    }

    pub fn is_precipitate(&self) -> bool {
        self.solubility_class == SolubilityClass::Insoluble
    }

    pub fn dissociates(&self) -> bool {
        self.solubility_class.dissociates()
    }

    pub fn shares_ion_with(&self, other: &Compound) -> bool {
        self.cation == other.cation || self.anion == other.anion
    }
}

#[derive(Debug, Clone)]
pub struct CompoundBase {
    ion_pairs: Vec<IonPairEntry>,
    formulas: Vec<FormulaRecord>,
    compounds: HashMap<String, Compound>,
}

impl Default for CompoundBase {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundBase {
    /// base built from the built-in tables
    pub fn new() -> Self {
        Self::from_tables(SOLUBILITY_MATRIX, COMMON_FORMULAS, SUPPLEMENTARY_COMPOUNDS)
    }

    pub fn from_tables(
        ion_pairs: &[IonPairEntry],
        common_formulas: &[FormulaRecord],
        supplementary: &[SupplementaryRecord],
    ) -> Self {
        let mut base = Self {
            ion_pairs: ion_pairs.to_vec(),
            formulas: common_formulas.to_vec(),
            compounds: HashMap::new(),
        };

        // compounds that the matrix and the formula table produce together
        for entry in ion_pairs {
            if let Some(formula) = base.formula_for_ions(entry.cation, entry.anion) {
                let compound =
                    Compound::from_class(formula, entry.cation, entry.anion, entry.class);
                base.compounds.insert(formula.to_string(), compound);
            }
        }
        let from_matrix = base.compounds.len();

        for &(formula, cation, anion) in supplementary {
            if base.compounds.contains_key(formula) {
                continue;
            }
            let class = base.class_of_pair(cation, anion);
            debug!(
                "supplementary compound {} ({} + {}) added as {}",
                formula, cation, anion, class
            );
            base.compounds.insert(
                formula.to_string(),
                Compound::from_class(formula, cation, anion, class),
            );
        }
        info!(
            "compound base built: {} compounds ({} from the solubility matrix, {} supplementary)",
            base.compounds.len(),
            from_matrix,
            base.compounds.len() - from_matrix
        );
        base
    }

    /// exact-match lookup, no normalisation of the formula
    pub fn lookup_compound(&self, formula: &str) -> Option<&Compound> {
        self.compounds.get(formula)
    }

    pub fn ions_for_compound(&self, formula: &str) -> Option<(&str, &str)> {
        self.lookup_compound(formula)
            .map(|compound| (compound.cation.as_str(), compound.anion.as_str()))
    }

    /// Inverse mapping over the closed formula table. Returns None for every pair that has no written formula.
    pub fn formula_for_ions(&self, cation: &str, anion: &str) -> Option<&'static str> {
        self.formulas
            .iter()
            .find(|(c, a, _)| *c == cation && *a == anion)
            .map(|&(_, _, formula)| formula)
    }

    pub fn ion_pair(&self, cation: &str, anion: &str) -> Option<&IonPairEntry> {
        self.ion_pairs
            .iter()
            .find(|entry| entry.cation == cation && entry.anion == anion)
    }

    pub fn class_of_pair(&self, cation: &str, anion: &str) -> SolubilityClass {
        self.ion_pair(cation, anion)
            .map(|entry| entry.class)
            .unwrap_or(SolubilityClass::Unknown)
    }

    pub fn ion_pairs(&self) -> &[IonPairEntry] {
        &self.ion_pairs
    }

    /// all known formulas, sorted
    pub fn formulas(&self) -> Vec<&str> {
        let mut formulas: Vec<&str> = self.compounds.keys().map(|f| f.as_str()).collect();
        formulas.sort();
        formulas
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

static DEFAULT_BASE: OnceLock<CompoundBase> = OnceLock::new();

/// Shared instance built from the built-in tables on first use
pub fn default_base() -> &'static CompoundBase {
    DEFAULT_BASE.get_or_init(CompoundBase::new)
}
