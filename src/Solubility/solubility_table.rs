//! # Solubility table
//!
//! The ion-pair matrix ([`SOLUBILITY_MATRIX`]) is the single source of truth for every solubility
//! query in the crate: the compound base derives the class of each compound from it and the
//! ionic equation solver only ever reads it through the compound base.
//!
//! Besides the matrix this module renders the full interactive table (one row per cation,
//! one cell per anion), answers free-text searches and carries the general solubility rules
//! printed under the table.
use super::compound_base::CompoundBase;
use super::ions::{ANIONS, CATIONS, find_ion};
use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of hits returned by [`search_compound`]
pub const MAX_SEARCH_RESULTS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolubilityClass {
    Soluble,
    SlightlySoluble,
    Insoluble,
    Nonexistent,
    Unknown,
}

impl SolubilityClass {
    /// one-letter mark used in printed school tables
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Soluble => "р",
            Self::SlightlySoluble => "м",
            Self::Insoluble => "н",
            Self::Nonexistent => "-",
            Self::Unknown => "?",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Soluble => "Soluble",
            Self::SlightlySoluble => "Slightly soluble",
            Self::Insoluble => "Insoluble",
            Self::Nonexistent => "Does not exist",
            Self::Unknown => "No data",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Soluble => "#1ABC9C",
            Self::SlightlySoluble => "#F1C40F",
            Self::Insoluble => "#E74C3C",
            Self::Nonexistent | Self::Unknown => "#95A5A6",
        }
    }

    /// soluble and slightly soluble compounds are written as separate ions in ionic equations
    pub fn dissociates(&self) -> bool {
        matches!(self, Self::Soluble | Self::SlightlySoluble)
    }

    pub fn all() -> [SolubilityClass; 5] {
        [
            Self::Soluble,
            Self::SlightlySoluble,
            Self::Insoluble,
            Self::Nonexistent,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for SolubilityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Soluble => "soluble",
            Self::SlightlySoluble => "slightly-soluble",
            Self::Insoluble => "insoluble",
            Self::Nonexistent => "nonexistent",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// One cell of the solubility matrix, keyed by (cation, anion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IonPairEntry {
    pub cation: &'static str,
    pub anion: &'static str,
    pub class: SolubilityClass,
}

impl IonPairEntry {
    pub const fn new(cation: &'static str, anion: &'static str, class: SolubilityClass) -> Self {
        Self {
            cation,
            anion,
            class,
        }
    }
    pub fn description(&self) -> &'static str {
        self.class.description()
    }
    pub fn color(&self) -> &'static str {
        self.class.color()
    }
}

use SolubilityClass::{Insoluble as N, Nonexistent as X, SlightlySoluble as M, Soluble as S};

const fn pair(cation: &'static str, anion: &'static str, class: SolubilityClass) -> IonPairEntry {
    IonPairEntry::new(cation, anion, class)
}

pub const SOLUBILITY_MATRIX: &[IonPairEntry] = &[
    // hydroxides
    pair("H⁺", "OH⁻", S),
    pair("Li⁺", "OH⁻", S),
    pair("Na⁺", "OH⁻", S),
    pair("K⁺", "OH⁻", S),
    pair("NH₄⁺", "OH⁻", S),
    pair("Ba²⁺", "OH⁻", S),
    pair("Sr²⁺", "OH⁻", S),
    pair("Ca²⁺", "OH⁻", M),
    pair("Mg²⁺", "OH⁻", N),
    pair("Al³⁺", "OH⁻", N),
    pair("Cr³⁺", "OH⁻", N),
    pair("Zn²⁺", "OH⁻", N),
    pair("Mn²⁺", "OH⁻", N),
    pair("Fe²⁺", "OH⁻", N),
    pair("Fe³⁺", "OH⁻", N),
    pair("Co²⁺", "OH⁻", N),
    pair("Ni²⁺", "OH⁻", N),
    pair("Cu²⁺", "OH⁻", N),
    pair("Ag⁺", "OH⁻", X),
    pair("Hg²⁺", "OH⁻", N),
    pair("Pb²⁺", "OH⁻", N),
    // nitrates
    pair("H⁺", "NO₃⁻", S),
    pair("Li⁺", "NO₃⁻", S),
    pair("Na⁺", "NO₃⁻", S),
    pair("K⁺", "NO₃⁻", S),
    pair("NH₄⁺", "NO₃⁻", S),
    pair("Mg²⁺", "NO₃⁻", S),
    pair("Ca²⁺", "NO₃⁻", S),
    pair("Ba²⁺", "NO₃⁻", S),
    pair("Sr²⁺", "NO₃⁻", S),
    pair("Al³⁺", "NO₃⁻", S),
    pair("Cr³⁺", "NO₃⁻", S),
    pair("Zn²⁺", "NO₃⁻", S),
    pair("Mn²⁺", "NO₃⁻", S),
    pair("Fe²⁺", "NO₃⁻", S),
    pair("Fe³⁺", "NO₃⁻", S),
    pair("Co²⁺", "NO₃⁻", S),
    pair("Ni²⁺", "NO₃⁻", S),
    pair("Cu²⁺", "NO₃⁻", S),
    pair("Ag⁺", "NO₃⁻", S),
    pair("Hg²⁺", "NO₃⁻", S),
    pair("Pb²⁺", "NO₃⁻", S),
    // chlorides
    pair("H⁺", "Cl⁻", S),
    pair("Li⁺", "Cl⁻", S),
    pair("Na⁺", "Cl⁻", S),
    pair("K⁺", "Cl⁻", S),
    pair("NH₄⁺", "Cl⁻", S),
    pair("Mg²⁺", "Cl⁻", S),
    pair("Ca²⁺", "Cl⁻", S),
    pair("Ba²⁺", "Cl⁻", S),
    pair("Sr²⁺", "Cl⁻", S),
    pair("Al³⁺", "Cl⁻", S),
    pair("Cr³⁺", "Cl⁻", S),
    pair("Zn²⁺", "Cl⁻", S),
    pair("Mn²⁺", "Cl⁻", S),
    pair("Fe²⁺", "Cl⁻", S),
    pair("Fe³⁺", "Cl⁻", S),
    pair("Co²⁺", "Cl⁻", S),
    pair("Ni²⁺", "Cl⁻", S),
    pair("Cu²⁺", "Cl⁻", S),
    pair("Ag⁺", "Cl⁻", N),
    pair("Hg²⁺", "Cl⁻", S),
    pair("Pb²⁺", "Cl⁻", M),
    // sulfates
    pair("H⁺", "SO₄²⁻", S),
    pair("Li⁺", "SO₄²⁻", S),
    pair("Na⁺", "SO₄²⁻", S),
    pair("K⁺", "SO₄²⁻", S),
    pair("NH₄⁺", "SO₄²⁻", S),
    pair("Mg²⁺", "SO₄²⁻", S),
    pair("Ca²⁺", "SO₄²⁻", M),
    pair("Ba²⁺", "SO₄²⁻", N),
    pair("Sr²⁺", "SO₄²⁻", N),
    pair("Al³⁺", "SO₄²⁻", S),
    pair("Cr³⁺", "SO₄²⁻", S),
    pair("Zn²⁺", "SO₄²⁻", S),
    pair("Mn²⁺", "SO₄²⁻", S),
    pair("Fe²⁺", "SO₄²⁻", S),
    pair("Fe³⁺", "SO₄²⁻", S),
    pair("Co²⁺", "SO₄²⁻", S),
    pair("Ni²⁺", "SO₄²⁻", S),
    pair("Cu²⁺", "SO₄²⁻", S),
    pair("Ag⁺", "SO₄²⁻", M),
    pair("Hg²⁺", "SO₄²⁻", M),
    pair("Pb²⁺", "SO₄²⁻", N),
    // sulfides
    pair("H⁺", "S²⁻", S),
    pair("Li⁺", "S²⁻", S),
    pair("Na⁺", "S²⁻", S),
    pair("K⁺", "S²⁻", S),
    pair("NH₄⁺", "S²⁻", S),
    pair("Mg²⁺", "S²⁻", X),
    pair("Ca²⁺", "S²⁻", M),
    pair("Ba²⁺", "S²⁻", S),
    pair("Sr²⁺", "S²⁻", S),
    pair("Al³⁺", "S²⁻", X),
    pair("Cr³⁺", "S²⁻", X),
    pair("Zn²⁺", "S²⁻", N),
    pair("Mn²⁺", "S²⁻", N),
    pair("Fe²⁺", "S²⁻", N),
    pair("Fe³⁺", "S²⁻", X),
    pair("Co²⁺", "S²⁻", N),
    pair("Ni²⁺", "S²⁻", N),
    pair("Cu²⁺", "S²⁻", N),
    pair("Ag⁺", "S²⁻", N),
    pair("Hg²⁺", "S²⁻", N),
    pair("Pb²⁺", "S²⁻", N),
    // carbonates
    pair("H⁺", "CO₃²⁻", S),
    pair("Li⁺", "CO₃²⁻", S),
    pair("Na⁺", "CO₃²⁻", S),
    pair("K⁺", "CO₃²⁻", S),
    pair("NH₄⁺", "CO₃²⁻", S),
    pair("Mg²⁺", "CO₃²⁻", N),
    pair("Ca²⁺", "CO₃²⁻", N),
    pair("Ba²⁺", "CO₃²⁻", N),
    pair("Sr²⁺", "CO₃²⁻", N),
    pair("Al³⁺", "CO₃²⁻", X),
    pair("Cr³⁺", "CO₃²⁻", X),
    pair("Zn²⁺", "CO₃²⁻", N),
    pair("Mn²⁺", "CO₃²⁻", N),
    pair("Fe²⁺", "CO₃²⁻", N),
    pair("Fe³⁺", "CO₃²⁻", X),
    pair("Co²⁺", "CO₃²⁻", N),
    pair("Ni²⁺", "CO₃²⁻", N),
    pair("Cu²⁺", "CO₃²⁻", X),
    pair("Ag⁺", "CO₃²⁻", N),
    pair("Hg²⁺", "CO₃²⁻", X),
    pair("Pb²⁺", "CO₃²⁻", N),
    // phosphates
    pair("H⁺", "PO₄³⁻", S),
    pair("Li⁺", "PO₄³⁻", N),
    pair("Na⁺", "PO₄³⁻", S),
    pair("K⁺", "PO₄³⁻", S),
    pair("NH₄⁺", "PO₄³⁻", S),
    pair("Mg²⁺", "PO₄³⁻", N),
    pair("Ca²⁺", "PO₄³⁻", N),
    pair("Ba²⁺", "PO₄³⁻", N),
    pair("Sr²⁺", "PO₄³⁻", N),
    pair("Al³⁺", "PO₄³⁻", N),
    pair("Cr³⁺", "PO₄³⁻", N),
    pair("Zn²⁺", "PO₄³⁻", N),
    pair("Mn²⁺", "PO₄³⁻", N),
    pair("Fe²⁺", "PO₄³⁻", N),
    pair("Fe³⁺", "PO₄³⁻", N),
    pair("Co²⁺", "PO₄³⁻", N),
    pair("Ni²⁺", "PO₄³⁻", N),
    pair("Cu²⁺", "PO₄³⁻", N),
    pair("Ag⁺", "PO₄³⁻", N),
    pair("Hg²⁺", "PO₄³⁻", N),
    pair("Pb²⁺", "PO₄³⁻", N),
    // silicates
    pair("H⁺", "SiO₃²⁻", N),
    pair("Li⁺", "SiO₃²⁻", S),
    pair("Na⁺", "SiO₃²⁻", S),
    pair("K⁺", "SiO₃²⁻", S),
    pair("NH₄⁺", "SiO₃²⁻", X),
    pair("Mg²⁺", "SiO₃²⁻", N),
    pair("Ca²⁺", "SiO₃²⁻", N),
    pair("Ba²⁺", "SiO₃²⁻", N),
    pair("Sr²⁺", "SiO₃²⁻", N),
    pair("Zn²⁺", "SiO₃²⁻", N),
    pair("Fe²⁺", "SiO₃²⁻", N),
    pair("Pb²⁺", "SiO₃²⁻", N),
    // acetates
    pair("H⁺", "CH₃COO⁻", S),
    pair("Li⁺", "CH₃COO⁻", S),
    pair("Na⁺", "CH₃COO⁻", S),
    pair("K⁺", "CH₃COO⁻", S),
    pair("NH₄⁺", "CH₃COO⁻", S),
    pair("Mg²⁺", "CH₃COO⁻", S),
    pair("Ca²⁺", "CH₃COO⁻", S),
    pair("Ba²⁺", "CH₃COO⁻", S),
    pair("Al³⁺", "CH₃COO⁻", S),
    pair("Ag⁺", "CH₃COO⁻", M),
    pair("Pb²⁺", "CH₃COO⁻", S),
];

pub const SOLUBILITY_RULES: [&str; 6] = [
    "All nitrates (NO₃⁻) are soluble",
    "All sodium, potassium and ammonium salts are soluble",
    "Chlorides, bromides and iodides are soluble, except those of Ag⁺, Pb²⁺, Hg₂²⁺",
    "Sulfates are soluble, except those of Ba²⁺, Pb²⁺ and Ca²⁺ (slightly soluble)",
    "Carbonates, phosphates and sulfites are insoluble, except those of Na⁺, K⁺, NH₄⁺",
    "Hydroxides are insoluble, except those of Na⁺, K⁺, Ba²⁺ and Ca²⁺ (slightly soluble)",
];

/// Result of a direct (cation, anion) query. Pairs absent from the matrix are reported
/// with class `unknown`, never dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolubilityCheck {
    pub cation: String,
    pub anion: String,
    pub solubility_class: SolubilityClass,
    pub description: String,
    pub color: String,
    pub formula: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableCell {
    pub anion: String,
    pub anion_name: String,
    pub anion_charge: i8,
    pub solubility_class: SolubilityClass,
    pub symbol: String,
    pub description: String,
    pub color: String,
    pub formula: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub cation: String,
    pub cation_name: String,
    pub cation_charge: i8,
    pub cation_color: String,
    pub anions: Vec<TableCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub solubility_class: SolubilityClass,
    pub symbol: String,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolubilityTable {
    pub cations: Vec<String>,
    pub anions: Vec<String>,
    pub table: Vec<TableRow>,
    pub rules: Vec<String>,
    pub total_compounds: usize,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SolubilityCheck>,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStatistics {
    pub cations: usize,
    pub anions: usize,
    pub compounds: usize,
}

pub fn legend() -> Vec<LegendEntry> {
    SolubilityClass::all()
        .iter()
        .map(|class| LegendEntry {
            solubility_class: *class,
            symbol: class.symbol().to_string(),
            text: class.description().to_string(),
            color: class.color().to_string(),
        })
        .collect()
}

/// Looks up a single (cation, anion) pair
pub fn check_solubility(base: &CompoundBase, cation: &str, anion: &str) -> SolubilityCheck {
    let class = base
        .ion_pair(cation, anion)
        .map(|entry| entry.class)
        .unwrap_or(SolubilityClass::Unknown);
    SolubilityCheck {
        cation: cation.to_string(),
        anion: anion.to_string(),
        solubility_class: class,
        description: class.description().to_string(),
        color: class.color().to_string(),
        formula: base.formula_for_ions(cation, anion).map(str::to_string),
    }
}

/// Builds the full cation × anion table. Ion lists are sorted the way the portal shows them;
/// cells missing from the matrix get the `unknown` class.
pub fn generate_full_table(base: &CompoundBase) -> SolubilityTable {
    let mut cations: Vec<&'static str> = CATIONS.iter().map(|ion| ion.symbol).collect();
    let mut anions: Vec<&'static str> = ANIONS.iter().map(|ion| ion.symbol).collect();
    cations.sort();
    anions.sort();

    let mut table = Vec::with_capacity(cations.len());
    for cation in &cations {
        let cation_ion = find_ion(cation);
        let cells = anions
            .iter()
            .map(|anion| {
                let check = check_solubility(base, cation, anion);
                let anion_ion = find_ion(anion);
                TableCell {
                    anion: anion.to_string(),
                    anion_name: anion_ion
                        .map(|ion| ion.name.to_string())
                        .unwrap_or_default(),
                    anion_charge: anion_ion.map(|ion| ion.charge()).unwrap_or(0),
                    solubility_class: check.solubility_class,
                    symbol: check.solubility_class.symbol().to_string(),
                    description: check.description,
                    color: check.color,
                    formula: check.formula,
                }
            })
            .collect();
        table.push(TableRow {
            cation: cation.to_string(),
            cation_name: cation_ion
                .map(|ion| ion.name.to_string())
                .unwrap_or_default(),
            cation_charge: cation_ion.map(|ion| ion.charge()).unwrap_or(0),
            cation_color: cation_ion
                .map(|ion| ion.color.to_string())
                .unwrap_or_default(),
            anions: cells,
        });
    }
    info!(
        "solubility table generated: {} cations x {} anions",
        cations.len(),
        anions.len()
    );
    SolubilityTable {
        total_compounds: cations.len() * anions.len(),
        cations: cations.iter().map(|s| s.to_string()).collect(),
        anions: anions.iter().map(|s| s.to_string()).collect(),
        table,
        rules: SOLUBILITY_RULES.iter().map(|s| s.to_string()).collect(),
        legend: legend(),
    }
}

/// Case-insensitive substring search over the matrix: matches the written formula (if the pair has
/// one), the ion display strings and the ion names.
pub fn search_compound(base: &CompoundBase, query: &str) -> SearchResults {
    let query = query.trim().to_lowercase();
    let mut results = Vec::new();
    if !query.is_empty() {
        for entry in base.ion_pairs() {
            let formula = base.formula_for_ions(entry.cation, entry.anion);
            let cation_name = find_ion(entry.cation).map(|ion| ion.name).unwrap_or("");
            let anion_name = find_ion(entry.anion).map(|ion| ion.name).unwrap_or("");
            let haystack = [
                formula.unwrap_or(""),
                entry.cation,
                entry.anion,
                cation_name,
                anion_name,
            ];
            if haystack
                .iter()
                .any(|field| !field.is_empty() && field.to_lowercase().contains(&query))
            {
                results.push(check_solubility(base, entry.cation, entry.anion));
            }
        }
    }
    let count = results.len();
    results.truncate(MAX_SEARCH_RESULTS);
    SearchResults {
        query,
        results,
        count,
    }
}

pub fn statistics(base: &CompoundBase) -> TableStatistics {
    TableStatistics {
        cations: CATIONS.len(),
        anions: ANIONS.len(),
        compounds: base.ion_pairs().len(),
    }
}

impl SolubilityTable {
    /// prints the table as a grid of one-letter marks
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        let mut header = vec![Cell::new("")];
        header.extend(self.anions.iter().map(|anion| Cell::new(anion)));
        table.add_row(Row::new(header));
        for row in &self.table {
            let mut cells = vec![Cell::new(&row.cation)];
            cells.extend(row.anions.iter().map(|cell| Cell::new(&cell.symbol)));
            table.add_row(Row::new(cells));
        }
        table.printstd();
        for entry in &self.legend {
            println!("{} - {}", entry.symbol, entry.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_and_names() {
        let symbols: HashSet<&str> = SolubilityClass::all().iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols.len(), 5);
        assert_eq!(SolubilityClass::SlightlySoluble.to_string(), "slightly-soluble");
        assert_eq!(
            serde_json::to_value(SolubilityClass::SlightlySoluble).unwrap(),
            serde_json::json!("slightly-soluble")
        );
        assert!(SolubilityClass::SlightlySoluble.dissociates());
        assert!(!SolubilityClass::Insoluble.dissociates());
        assert!(!SolubilityClass::Unknown.dissociates());
    }

    #[test]
    fn test_matrix_has_no_duplicates_and_known_ions() {
        let mut seen = HashSet::new();
        for entry in SOLUBILITY_MATRIX {
            assert!(
                seen.insert((entry.cation, entry.anion)),
                "duplicate pair {} + {}",
                entry.cation,
                entry.anion
            );
            assert!(find_ion(entry.cation).is_some(), "{}", entry.cation);
            assert!(find_ion(entry.anion).is_some(), "{}", entry.anion);
        }
        assert_eq!(SOLUBILITY_MATRIX.len(), 170);
    }

    #[test]
    fn test_check_solubility() {
        let base = CompoundBase::new();
        let check = check_solubility(&base, "Ba²⁺", "SO₄²⁻");
        assert_eq!(check.solubility_class, SolubilityClass::Insoluble);
        assert_eq!(check.formula.as_deref(), Some("BaSO4"));
        assert_eq!(check.color, "#E74C3C");

        // Cr³⁺ silicate is not in the matrix
        let check = check_solubility(&base, "Cr³⁺", "SiO₃²⁻");
        assert_eq!(check.solubility_class, SolubilityClass::Unknown);
        assert_eq!(check.description, "No data");
        assert_eq!(check.formula, None);
    }

    #[test]
    fn test_full_table_shape() {
        let base = CompoundBase::new();
        let table = generate_full_table(&base);
        assert_eq!(table.cations.len(), 21);
        assert_eq!(table.anions.len(), 16);
        assert_eq!(table.total_compounds, 21 * 16);
        assert_eq!(table.rules.len(), 6);
        assert_eq!(table.legend.len(), 5);
        for row in &table.table {
            assert_eq!(row.anions.len(), 16);
        }
        let mut sorted = table.cations.clone();
        sorted.sort();
        assert_eq!(sorted, table.cations);

        let silver = table.table.iter().find(|row| row.cation == "Ag⁺").unwrap();
        let chloride = silver.anions.iter().find(|cell| cell.anion == "Cl⁻").unwrap();
        assert_eq!(chloride.symbol, "н");
        assert_eq!(silver.cation_charge, 1);
        assert_eq!(chloride.anion_charge, -1);
        let barium = table.table.iter().find(|row| row.cation == "Ba²⁺").unwrap();
        let phosphate = barium.anions.iter().find(|cell| cell.anion == "PO₄³⁻").unwrap();
        assert_eq!((barium.cation_charge, phosphate.anion_charge), (2, -3));
        assert_eq!(chloride.formula.as_deref(), Some("AgCl"));
        // fluorides are not covered by the matrix at all
        let fluoride = silver.anions.iter().find(|cell| cell.anion == "F⁻").unwrap();
        assert_eq!(fluoride.solubility_class, SolubilityClass::Unknown);
    }

    #[test]
    fn test_search_compound() {
        let base = CompoundBase::new();
        let found = search_compound(&base, "agcl");
        assert_eq!(found.count, 1);
        assert_eq!(found.results[0].cation, "Ag⁺");
        assert_eq!(found.results[0].anion, "Cl⁻");

        // every silver pair matches the cation name
        let found = search_compound(&base, "Silver");
        assert_eq!(found.count, 8);

        let found = search_compound(&base, "Chloride");
        assert_eq!(found.count, 21);
        assert_eq!(found.results.len(), MAX_SEARCH_RESULTS);

        let found = search_compound(&base, "   ");
        assert_eq!(found.count, 0);
    }

    #[test]
    fn test_statistics() {
        let base = CompoundBase::new();
        let stats = statistics(&base);
        assert_eq!(stats.cations, 21);
        assert_eq!(stats.anions, 16);
        assert_eq!(stats.compounds, SOLUBILITY_MATRIX.len());
    }
}
