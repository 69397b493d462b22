/// Module to calculate the atomic composition and molar mass of a chemical formula.
///
/// Supported notation: nested brackets of any kind "K4[Fe(CN)6]", hydrate dots "CuSO4·5H2O" (or '*'),
/// phase marks "H2O(g)" and user-defined groups of atoms, e.g. Me = {"C":1, "H":3}
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

pub struct Element {
    name: &'static str,
    atomic_mass: f64,
}

impl Element {
    const fn new(name: &'static str, atomic_mass: f64) -> Self {
        Self { name, atomic_mass }
    }
}

const ELEMENTS: &[Element] = &[
    Element::new("H", 1.008),
    Element::new("He", 4.0026),
    Element::new("Li", 6.94),
    Element::new("Be", 9.0122),
    Element::new("B", 10.81),
    Element::new("C", 12.011),
    Element::new("N", 14.007),
    Element::new("O", 15.999),
    Element::new("F", 18.998),
    Element::new("Ne", 20.18),
    Element::new("Na", 22.99),
    Element::new("Mg", 24.305),
    Element::new("Al", 26.98),
    Element::new("Si", 28.085),
    Element::new("P", 30.974),
    Element::new("S", 32.065),
    Element::new("Cl", 35.45),
    Element::new("Ar", 39.948),
    Element::new("K", 39.098),
    Element::new("Ca", 40.078),
    Element::new("Sc", 44.9559),
    Element::new("Ti", 47.867),
    Element::new("V", 50.9415),
    Element::new("Cr", 51.9961),
    Element::new("Mn", 54.938),
    Element::new("Fe", 55.845),
    Element::new("Co", 58.933),
    Element::new("Ni", 58.693),
    Element::new("Cu", 63.546),
    Element::new("Zn", 65.38),
    Element::new("Ga", 69.723),
    Element::new("Ge", 72.63),
    Element::new("As", 74.9216),
    Element::new("Se", 78.971),
    Element::new("Br", 79.904),
    Element::new("Kr", 83.798),
    Element::new("Rb", 85.4678),
    Element::new("Sr", 87.62),
    Element::new("Y", 88.9059),
    Element::new("Zr", 91.224),
    Element::new("Nb", 92.9064),
    Element::new("Mo", 95.95),
    Element::new("Tc", 98.0),
    Element::new("Ru", 101.07),
    Element::new("Rh", 102.906),
    Element::new("Pd", 106.42),
    Element::new("Ag", 107.868),
    Element::new("Cd", 112.414),
    Element::new("In", 114.818),
    Element::new("Sn", 118.71),
    Element::new("Sb", 121.76),
    Element::new("Te", 127.6),
    Element::new("I", 126.904),
    Element::new("Xe", 131.293),
    Element::new("Cs", 132.905),
    Element::new("Ba", 137.327),
    Element::new("La", 138.905),
    Element::new("Ce", 140.116),
    Element::new("W", 183.84),
    Element::new("Pt", 195.084),
    Element::new("Au", 196.967),
    Element::new("Hg", 200.592),
    Element::new("Tl", 204.38),
    Element::new("Pb", 207.2),
    Element::new("Bi", 208.98),
    Element::new("U", 238.029),
];

/// chemical groups by name, e.g. {"Me": {"C":1, "H":3}}
pub type Groups = HashMap<String, HashMap<String, usize>>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MolarMassError {
    #[error("empty formula")]
    EmptyFormula,
    #[error("unknown element or group '{symbol}' in {formula}")]
    UnknownElement { symbol: String, formula: String },
    #[error("unbalanced bracket in {0}")]
    UnbalancedBracket(String),
    #[error("unexpected character '{ch}' at position {position} in {formula}")]
    UnexpectedCharacter {
        ch: char,
        position: usize,
        formula: String,
    },
    #[error("atom count is too large in {0}")]
    InvalidCount(String),
}

/// counts[element] += count * multiplier, failing instead of wrapping
fn add_scaled(
    counts: &mut HashMap<String, usize>,
    element: String,
    count: usize,
    multiplier: usize,
    formula: &str,
) -> Result<(), MolarMassError> {
    let entry = counts.entry(element).or_insert(0);
    let current = *entry;
    *entry = count
        .checked_mul(multiplier)
        .and_then(|added| current.checked_add(added))
        .ok_or_else(|| MolarMassError::InvalidCount(formula.to_string()))?;
    Ok(())
}

pub fn element_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|element| element.name == symbol)
        .map(|element| element.atomic_mass)
}

fn filter_phases_marks(formula: &str) -> &str {
    let phases = ["(aq)", "(c)", "(l)", "(g)", "(s)", "(cr)"];
    let lowered = formula.to_lowercase();
    for phase in phases {
        if lowered.ends_with(phase) {
            return &formula[..formula.len() - phase.len()];
        }
    }
    formula
}

fn closing_for(open: char) -> char {
    match open {
        '[' => ']',
        '{' => '}',
        _ => ')',
    }
}

struct FormulaParser<'a> {
    chars: Vec<char>,
    pos: usize,
    formula: &'a str,
    groups: Option<&'a Groups>,
}

impl<'a> FormulaParser<'a> {
    fn new(formula: &'a str, groups: Option<&'a Groups>) -> Self {
        Self {
            chars: formula.chars().collect(),
            pos: 0,
            formula,
            groups,
        }
    }

    fn is_known(&self, symbol: &str) -> bool {
        element_mass(symbol).is_some()
            || self
                .groups
                .map(|groups| groups.contains_key(symbol))
                .unwrap_or(false)
    }

    fn read_number(&mut self) -> Result<Option<usize>, MolarMassError> {
        let start = self.pos;
        while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits
            .parse()
            .map(Some)
            .map_err(|_| MolarMassError::InvalidCount(digits))
    }

    /// An uppercase letter with the longest lowercase tail that names an element or a group.
    /// "CL" is read as Cl when L alone is not an element.
    fn read_symbol(&mut self) -> Result<String, MolarMassError> {
        let first = self.chars[self.pos];
        self.pos += 1;
        let tail_start = self.pos;
        while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_lowercase() {
            self.pos += 1;
        }
        let tail: String = self.chars[tail_start..self.pos].iter().collect();
        for len in (0..=tail.len()).rev() {
            let candidate = format!("{}{}", first, &tail[..len]);
            if self.is_known(&candidate) {
                self.pos = tail_start + len;
                if len == 0 {
                    return Ok(self.upper_case_second_letter(candidate));
                }
                return Ok(candidate);
            }
        }
        Err(MolarMassError::UnknownElement {
            symbol: format!("{}{}", first, tail),
            formula: self.formula.to_string(),
        })
    }

    fn upper_case_second_letter(&mut self, symbol: String) -> String {
        if let Some(&next) = self.chars.get(self.pos) {
            if next.is_ascii_uppercase() && !self.is_known(&next.to_string()) {
                let lowered = format!("{}{}", symbol, next.to_ascii_lowercase());
                if self.is_known(&lowered) {
                    self.pos += 1;
                    return lowered;
                }
            }
        }
        symbol
    }

    fn parse_sequence(
        &mut self,
        closing: Option<char>,
    ) -> Result<HashMap<String, usize>, MolarMassError> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        while let Some(&c) = self.chars.get(self.pos) {
            match c {
                '(' | '[' | '{' => {
                    self.pos += 1;
                    let inner = self.parse_sequence(Some(closing_for(c)))?;
                    let multiplier = self.read_number()?.unwrap_or(1);
                    for (element, count) in inner {
                        add_scaled(&mut counts, element, count, multiplier, self.formula)?;
                    }
                }
                ')' | ']' | '}' => {
                    if closing == Some(c) {
                        self.pos += 1;
                        return Ok(counts);
                    }
                    return Err(MolarMassError::UnbalancedBracket(self.formula.to_string()));
                }
                c if c.is_ascii_uppercase() => {
                    let symbol = self.read_symbol()?;
                    let count = self.read_number()?.unwrap_or(1);
                    debug!("{} x{} in {}", symbol, count, self.formula);
                    add_scaled(&mut counts, symbol, count, 1, self.formula)?;
                }
                _ => {
                    return Err(MolarMassError::UnexpectedCharacter {
                        ch: c,
                        position: self.pos,
                        formula: self.formula.to_string(),
                    });
                }
            }
        }
        match closing {
            Some(_) => Err(MolarMassError::UnbalancedBracket(self.formula.to_string())),
            None => Ok(counts),
        }
    }
}

// groups of atoms (Me, Ph, ...) are replaced by their atomic composition
fn handle_groups(
    mut counts: HashMap<String, usize>,
    groups: Option<&Groups>,
    formula: &str,
) -> Result<HashMap<String, usize>, MolarMassError> {
    let Some(groups) = groups else {
        return Ok(counts);
    };
    for (chemical_group, atomic_composition) in groups {
        if let Some(number_of_groups) = counts.remove(chemical_group) {
            for (atom, &quantity) in atomic_composition {
                add_scaled(&mut counts, atom.clone(), quantity, number_of_groups, formula)?;
            }
        }
    }
    Ok(counts)
}

/// Parses a chemical formula into element counts. `groups` is needed only if the formula contains
/// names of chemical groups.
pub fn parse_formula(
    formula: &str,
    groups: Option<&Groups>,
) -> Result<HashMap<String, usize>, MolarMassError> {
    let cleaned: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = filter_phases_marks(&cleaned);
    if cleaned.is_empty() {
        return Err(MolarMassError::EmptyFormula);
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    // hydrates: "CuSO4·5H2O" is CuSO4 plus five H2O
    for part in cleaned.split(['·', '*']) {
        let mut parser = FormulaParser::new(part, groups);
        let multiplier = parser.read_number()?.unwrap_or(1);
        if parser.pos == parser.chars.len() {
            return Err(MolarMassError::EmptyFormula);
        }
        for (element, count) in parser.parse_sequence(None)? {
            add_scaled(&mut counts, element, count, multiplier, formula)?;
        }
    }
    handle_groups(counts, groups, formula)
}

/// Molar mass in g/mol and the element counts it was computed from
pub fn calculate_molar_mass(
    formula: &str,
    groups: Option<&Groups>,
) -> Result<(f64, HashMap<String, usize>), MolarMassError> {
    let counts = parse_formula(formula, groups)?;
    let mut molar_mass = 0.0;
    for (element, &count) in &counts {
        let mass = element_mass(element).ok_or_else(|| MolarMassError::UnknownElement {
            symbol: element.clone(),
            formula: formula.to_string(),
        })?;
        molar_mass += mass * count as f64;
    }
    debug!("molar mass of {}: {}", formula, molar_mass);
    Ok((molar_mass, counts))
}

pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
    groups: Option<&Groups>,
) -> Result<Vec<f64>, MolarMassError> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula, groups).map(|(mass, _)| mass))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementShare {
    pub element: String,
    pub count: usize,
    pub atomic_mass: f64,
    pub mass: f64,
    /// percent by mass
    pub mass_fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MolarMassReport {
    pub formula: String,
    pub molar_mass: f64,
    pub composition: Vec<ElementShare>,
}

/// Molar mass with per-element contributions, elements sorted by symbol
pub fn molar_mass_report(formula: &str) -> Result<MolarMassReport, MolarMassError> {
    let (molar_mass, counts) = calculate_molar_mass(formula, None)?;
    // "H0": every count is zero, there is nothing to take fractions of
    if molar_mass <= 0.0 {
        return Err(MolarMassError::EmptyFormula);
    }
    let mut composition: Vec<ElementShare> = counts
        .into_iter()
        .map(|(element, count)| {
            let atomic_mass = element_mass(&element).unwrap_or(0.0);
            let mass = atomic_mass * count as f64;
            ElementShare {
                element,
                count,
                atomic_mass,
                mass,
                mass_fraction: 100.0 * mass / molar_mass,
            }
        })
        .collect();
    composition.sort_by(|a, b| a.element.cmp(&b.element));
    info!("{}: {:.3} g/mol", formula, molar_mass);
    Ok(MolarMassReport {
        formula: formula.trim().to_string(),
        molar_mass,
        composition,
    })
}

impl MolarMassReport {
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Element"),
            Cell::new("Atoms"),
            Cell::new("Mass, g/mol"),
            Cell::new("Mass, %"),
        ]));
        for share in &self.composition {
            table.add_row(Row::new(vec![
                Cell::new(&share.element),
                Cell::new(&share.count.to_string()),
                Cell::new(&format!("{:.3}", share.mass)),
                Cell::new(&format!("{:.2}", share.mass_fraction)),
            ]));
        }
        println!("{}: M = {:.3} g/mol", self.formula, self.molar_mass);
        table.printstd();
    }
}
