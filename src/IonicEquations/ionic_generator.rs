//! # Ionic equation generator
//!
//! Given ordered reactant and product formulas, builds
//! - the molecular equation, formulas joined as typed;
//! - the full ionic equation, where every compound that dissociates (soluble or slightly soluble)
//!   is replaced by its cation and anion, and everything else is kept as a formula;
//! - the net ionic equation, which keeps the reactants sharing an ion with some precipitate and the
//!   precipitates themselves. Without such reactants the net equation is the full ionic one.
//!
//! Spectator ions are not computed, the list is always empty. Coefficients are never balanced.
use super::ionic_error::IonicError;
use crate::Solubility::compound_base::CompoundBase;
use crate::Solubility::solubility_table::SolubilityClass;
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::fmt;

/// Formulas treated as acids when classifying the reaction
pub const ACIDS: [&str; 4] = ["HCl", "H2SO4", "HNO3", "H3PO4"];
/// Formulas treated as bases when classifying the reaction
pub const BASES: [&str; 4] = ["NaOH", "KOH", "Ca(OH)2", "Ba(OH)2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReactionType {
    #[serde(rename = "exchange reaction forming a precipitate")]
    Precipitation,
    #[serde(rename = "neutralization reaction")]
    Neutralization,
    #[serde(rename = "exchange reaction")]
    Exchange,
}

impl ReactionType {
    pub fn label(&self) -> &'static str {
        match self {
            ReactionType::Precipitation => "exchange reaction forming a precipitate",
            ReactionType::Neutralization => "neutralization reaction",
            ReactionType::Exchange => "exchange reaction",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolubilityInfo {
    pub formula: String,
    pub solubility_class: SolubilityClass,
    pub description: String,
    pub is_precipitate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionResult {
    pub original_equation: String,
    pub molecular_equation: String,
    pub total_ionic_equation: String,
    pub net_ionic_equation: String,
    pub spectator_ions: Vec<String>,
    pub precipitates: Vec<String>,
    pub reaction_type: ReactionType,
    pub solubility_info: Vec<SolubilityInfo>,
    pub notes: Vec<String>,
}

/// Ion tokens of one side: dissociating compounds give "cation", "anion", the rest stay whole
fn ionic_tokens(base: &CompoundBase, formulas: &[String]) -> Vec<String> {
    let mut tokens = Vec::new();
    for formula in formulas {
        match base.lookup_compound(formula) {
            Some(compound) if compound.dissociates() => {
                tokens.push(compound.cation.clone());
                tokens.push(compound.anion.clone());
            }
            _ => tokens.push(formula.clone()),
        }
    }
    tokens
}

fn join_equation(left: &[String], right: &[String]) -> String {
    format!("{} → {}", left.join(" + "), right.join(" + "))
}

/// Insoluble products in product order, plus the reactants sharing an ion with any of them
fn find_precipitates(
    base: &CompoundBase,
    reactants: &[String],
    products: &[String],
) -> (Vec<String>, Vec<String>) {
    let mut precipitates = Vec::new();
    let mut net_reactants: Vec<String> = Vec::new();
    for product in products {
        let Some(precipitate) = base
            .lookup_compound(product)
            .filter(|compound| compound.is_precipitate())
        else {
            continue;
        };
        precipitates.push(product.clone());
        for reactant in reactants {
            let Some(compound) = base.lookup_compound(reactant) else {
                continue;
            };
            if compound.shares_ion_with(precipitate) && !net_reactants.contains(reactant) {
                net_reactants.push(reactant.clone());
            }
        }
    }
    (precipitates, net_reactants)
}

/// Precipitate first, then acid + base giving water, otherwise a plain exchange
pub fn classify_reaction(
    reactants: &[String],
    products: &[String],
    precipitates: &[String],
) -> ReactionType {
    if !precipitates.is_empty() {
        return ReactionType::Precipitation;
    }
    let has_acid = reactants.iter().any(|r| ACIDS.contains(&r.as_str()));
    let has_base = reactants.iter().any(|r| BASES.contains(&r.as_str()));
    let gives_water = products.iter().any(|p| p == "H2O");
    if has_acid && has_base && gives_water {
        ReactionType::Neutralization
    } else {
        ReactionType::Exchange
    }
}

fn solubility_info(base: &CompoundBase, formulas: &[String]) -> Vec<SolubilityInfo> {
    formulas
        .iter()
        .map(|formula| match base.lookup_compound(formula) {
            Some(compound) => SolubilityInfo {
                formula: formula.clone(),
                solubility_class: compound.solubility_class,
                description: compound.description.clone(),
                is_precipitate: compound.is_precipitate(),
            },
            None => SolubilityInfo {
                formula: formula.clone(),
                solubility_class: SolubilityClass::Unknown,
                description: "unknown compound".to_string(),
                is_precipitate: false,
            },
        })
        .collect()
}

fn notes(base: &CompoundBase, products: &[String], precipitates: &[String]) -> Vec<String> {
    let mut notes = Vec::new();
    if !precipitates.is_empty() {
        notes.push(format!("precipitate formed: {}", precipitates.join(", ")));
    }
    for product in products {
        let Some(compound) = base.lookup_compound(product) else {
            continue;
        };
        let note = match compound.solubility_class {
            SolubilityClass::Soluble => format!("{} is a soluble compound", product),
            SolubilityClass::SlightlySoluble => {
                format!("{} is a slightly soluble compound", product)
            }
            SolubilityClass::Insoluble => {
                format!("{} is an insoluble compound (precipitate)", product)
            }
            SolubilityClass::Nonexistent | SolubilityClass::Unknown => continue,
        };
        notes.push(note);
    }
    notes
}

pub fn generate_ionic_equations(
    base: &CompoundBase,
    reactants: &[String],
    products: &[String],
    original_equation: &str,
) -> Result<ReactionResult, IonicError> {
    if reactants.is_empty() {
        return Err(IonicError::Internal("reactant list is empty".to_string()));
    }
    if products.is_empty() {
        return Err(IonicError::Internal("product list is empty".to_string()));
    }

    let molecular_equation = join_equation(reactants, products);
    let total_ionic_equation = join_equation(
        &ionic_tokens(base, reactants),
        &ionic_tokens(base, products),
    );
    debug!("full ionic equation: {}", total_ionic_equation);

    let (precipitates, net_reactants) = find_precipitates(base, reactants, products);
    let net_ionic_equation = if net_reactants.is_empty() {
        total_ionic_equation.clone()
    } else {
        join_equation(&net_reactants, &precipitates)
    };
    let reaction_type = classify_reaction(reactants, products, &precipitates);
    info!(
        "{}: {} ({})",
        original_equation, net_ionic_equation, reaction_type
    );

    let all_formulas: Vec<String> = reactants.iter().chain(products).cloned().collect();
    Ok(ReactionResult {
        original_equation: original_equation.to_string(),
        molecular_equation,
        total_ionic_equation,
        net_ionic_equation,
        spectator_ions: Vec::new(),
        notes: notes(base, products, &precipitates),
        precipitates,
        reaction_type,
        solubility_info: solubility_info(base, &all_formulas),
    })
}

impl ReactionResult {
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("Equation"), Cell::new(&self.original_equation)]));
        table.add_row(Row::new(vec![Cell::new("Molecular"), Cell::new(&self.molecular_equation)]));
        table.add_row(Row::new(vec![
            Cell::new("Full ionic"),
            Cell::new(&self.total_ionic_equation),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Net ionic"),
            Cell::new(&self.net_ionic_equation),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Reaction type"),
            Cell::new(self.reaction_type.label()),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Precipitates"),
            Cell::new(&self.precipitates.join(", ")),
        ]));
        table.printstd();

        let mut solubility = Table::new();
        solubility.add_row(Row::new(vec![
            Cell::new("Formula"),
            Cell::new("Class"),
            Cell::new("Description"),
        ]));
        for info in &self.solubility_info {
            solubility.add_row(Row::new(vec![
                Cell::new(&info.formula),
                Cell::new(info.solubility_class.symbol()),
                Cell::new(&info.description),
            ]));
        }
        solubility.printstd();
        for note in &self.notes {
            println!("{}", note);
        }
    }
}
