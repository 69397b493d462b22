//! Compiled-in portal plugins.
//!
//! Each plugin has a descriptor ([`PluginConfig`]), a page content document and optionally a
//! calculation taking a free-text query. The registry is built once, in a fixed order; whether a
//! plugin is enabled comes from the portal configuration, not from the plugin itself.
use crate::Calculators::le_chatelier::calculate_equilibrium;
use crate::Calculators::molmass::molar_mass_report;
use crate::IonicEquations::ionic_solver::{ionic_content, solve_ionic_equation};
use crate::Solubility::compound_base::default_base;
use crate::Solubility::solubility_table::{
    check_solubility, generate_full_table, search_compound, statistics,
};
use crate::portal_config::PortalConfig;
use enum_dispatch::enum_dispatch;
use log::{debug, info, warn};
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PluginError {
    #[error("plugin not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PluginConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub version: &'static str,
    pub enabled: bool,
    pub route: &'static str,
}

impl PluginConfig {
    const fn new(
        name: &'static str,
        description: &'static str,
        icon: &'static str,
        version: &'static str,
        route: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            icon,
            version,
            enabled: true,
            route,
        }
    }
}

/// `{"error": false, ...value}` on success, `{"error": true, "message"}` otherwise
fn respond<T: Serialize, E: Display>(outcome: Result<T, E>) -> Value {
    let value = outcome
        .map_err(|err| err.to_string())
        .and_then(|value| serde_json::to_value(value).map_err(|err| err.to_string()));
    match value {
        Ok(Value::Object(mut fields)) => {
            fields.insert("error".to_string(), Value::Bool(false));
            Value::Object(fields)
        }
        Ok(other) => json!({"error": false, "result": other}),
        Err(message) => {
            warn!("plugin calculation failed: {}", message);
            json!({"error": true, "message": message})
        }
    }
}

fn with_config(mut content: Value, config: &PluginConfig) -> Value {
    if let Value::Object(fields) = &mut content {
        fields.insert("config".to_string(), json!(config));
    }
    content
}

#[enum_dispatch]
pub trait PortalPlugin {
    fn id(&self) -> &'static str;
    fn config(&self) -> &PluginConfig;
    fn content(&self) -> Value;
    /// None if the plugin has nothing to calculate
    fn calculate(&self, _query: &str) -> Option<Value> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct IonicEquationPlugin {
    config: PluginConfig,
}

impl Default for IonicEquationPlugin {
    fn default() -> Self {
        Self {
            config: PluginConfig::new(
                "Ionic equation solver",
                "Full and net ionic equations with solubility checks",
                "ion-equation",
                "1.0.0",
                "/plugin/Ionic_equation",
            ),
        }
    }
}

impl PortalPlugin for IonicEquationPlugin {
    fn id(&self) -> &'static str {
        "Ionic_equation"
    }
    fn config(&self) -> &PluginConfig {
        &self.config
    }
    fn content(&self) -> Value {
        with_config(ionic_content(), &self.config)
    }
    fn calculate(&self, query: &str) -> Option<Value> {
        Some(solve_ionic_equation(query))
    }
}

/// Queries: "full" for the whole table, "Ag⁺/Cl⁻" for one pair, anything else is a search
#[derive(Debug, Clone)]
pub struct SolubilityTablePlugin {
    config: PluginConfig,
}

impl Default for SolubilityTablePlugin {
    fn default() -> Self {
        Self {
            config: PluginConfig::new(
                "Solubility table",
                "Interactive solubility table of salts, bases and acids",
                "flask-vial",
                "2.0.0",
                "/plugin/solubility_table",
            ),
        }
    }
}

impl PortalPlugin for SolubilityTablePlugin {
    fn id(&self) -> &'static str {
        "solubility_table"
    }
    fn config(&self) -> &PluginConfig {
        &self.config
    }
    fn content(&self) -> Value {
        json!({
            "type": "solubility_table",
            "config": self.config,
            "capabilities": {
                "check_solubility": true,
                "full_table": true,
                "search": true,
                "rules": true
            },
            "statistics": statistics(default_base()),
        })
    }
    fn calculate(&self, query: &str) -> Option<Value> {
        let base = default_base();
        let query = query.trim();
        let outcome = if query.eq_ignore_ascii_case("full") {
            respond::<_, PluginError>(Ok(generate_full_table(base)))
        } else if let Some((cation, anion)) = query.split_once('/') {
            respond::<_, PluginError>(Ok(check_solubility(base, cation.trim(), anion.trim())))
        } else {
            respond::<_, PluginError>(Ok(search_compound(base, query)))
        };
        Some(outcome)
    }
}

#[derive(Debug, Clone)]
pub struct LeChatelierPlugin {
    config: PluginConfig,
}

impl Default for LeChatelierPlugin {
    fn default() -> Self {
        Self {
            config: PluginConfig::new(
                "Le Chatelier principle",
                "Equilibrium shift under pressure change",
                "scale-balanced",
                "1.0.0",
                "/plugin/le-chatelier",
            ),
        }
    }
}

impl PortalPlugin for LeChatelierPlugin {
    fn id(&self) -> &'static str {
        "le_chatelier"
    }
    fn config(&self) -> &PluginConfig {
        &self.config
    }
    fn content(&self) -> Value {
        json!({"type": "le_chatelier", "config": self.config})
    }
    fn calculate(&self, query: &str) -> Option<Value> {
        Some(respond(calculate_equilibrium(query)))
    }
}

#[derive(Debug, Clone)]
pub struct MolarMassPlugin {
    config: PluginConfig,
}

impl Default for MolarMassPlugin {
    fn default() -> Self {
        Self {
            config: PluginConfig::new(
                "Molar mass calculator",
                "Molar mass of a substance from its chemical formula",
                "weight-scale",
                "1.0.0",
                "/plugin/molar_mass_calculator",
            ),
        }
    }
}

impl PortalPlugin for MolarMassPlugin {
    fn id(&self) -> &'static str {
        "molar_mass_calculator"
    }
    fn config(&self) -> &PluginConfig {
        &self.config
    }
    fn content(&self) -> Value {
        json!({"type": "molar_mass_calculator", "config": self.config})
    }
    fn calculate(&self, query: &str) -> Option<Value> {
        Some(respond(molar_mass_report(query)))
    }
}

/// Page-only plugin, all logic lives in the front end
#[derive(Debug, Clone)]
pub struct StaticPlugin {
    id: &'static str,
    content_type: &'static str,
    config: PluginConfig,
}

impl PortalPlugin for StaticPlugin {
    fn id(&self) -> &'static str {
        self.id
    }
    fn config(&self) -> &PluginConfig {
        &self.config
    }
    fn content(&self) -> Value {
        json!({"type": self.content_type, "config": self.config})
    }
}

const STATIC_PLUGINS: [(&str, &str, PluginConfig); 6] = [
    (
        "periodic_table",
        "periodic_table",
        PluginConfig::new(
            "Periodic table",
            "Interactive periodic table of elements with metal and nonmetal classification",
            "atom",
            "2.0.0",
            "/plugin/periodic-table",
        ),
    ),
    (
        "balancing_chemical_equations",
        "balancing_equations",
        PluginConfig::new(
            "Chemical equation balancer",
            "Automatic balancing of chemical equations with atom balance check",
            "balance-scale",
            "1.0.0",
            "/plugin/balancing_chemical_equations",
        ),
    ),
    (
        "classification_and_nomenclature",
        "classification_nomenclature",
        PluginConfig::new(
            "Classification and nomenclature",
            "Classes of organic compounds and their names",
            "atom",
            "1.0.0",
            "/plugin/classification_and_nomenclature",
        ),
    ),
    (
        "electrochemical_voltage_series",
        "electrochemical_series",
        PluginConfig::new(
            "Electrochemical series",
            "Interactive activity series of metals with comparison",
            "bolt",
            "1.0.0",
            "/plugin/electrochemical_voltage_series",
        ),
    ),
    (
        "hydrocarbon_equations",
        "hydrocarbon_equations",
        PluginConfig::new(
            "Hydrocarbons: formulas and names",
            "Names of hydrocarbons from formulas and formula generation",
            "atom",
            "1.0.0",
            "/plugin/hydrocarbon_equations",
        ),
    ),
    (
        "equals",
        "universal_ionic_calculator",
        PluginConfig::new(
            "Universal ionic equation calculator",
            "Ionic equations with solubility check and reaction type",
            "calculator",
            "1.0.0",
            "/plugin/equals",
        ),
    ),
];

#[enum_dispatch(PortalPlugin)]
#[derive(Debug, Clone)]
pub enum PluginEnum {
    IonicEquation(IonicEquationPlugin),
    SolubilityTable(SolubilityTablePlugin),
    LeChatelier(LeChatelierPlugin),
    MolarMass(MolarMassPlugin),
    Static(StaticPlugin),
}

/// What the plugin list shows: descriptor plus the enabled flag from the portal config
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub version: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct PluginRegistry {
    plugins: Vec<PluginEnum>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    pub fn new() -> Self {
        let mut plugins: Vec<PluginEnum> = Vec::new();
        let (periodic_table, rest) = STATIC_PLUGINS.split_at(1);
        let static_plugin = |&(id, content_type, config): &(&'static str, &'static str, PluginConfig)| {
            PluginEnum::from(StaticPlugin {
                id,
                content_type,
                config,
            })
        };
        plugins.extend(periodic_table.iter().map(static_plugin));
        plugins.push(LeChatelierPlugin::default().into());
        plugins.push(IonicEquationPlugin::default().into());
        plugins.push(SolubilityTablePlugin::default().into());
        plugins.push(MolarMassPlugin::default().into());
        plugins.extend(rest.iter().map(static_plugin));
        for plugin in &plugins {
            debug!("plugin registered: {}", plugin.id());
        }
        info!("{} plugins registered", plugins.len());
        Self { plugins }
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.id()).collect()
    }

    pub fn get(&self, id: &str) -> Result<&PluginEnum, PluginError> {
        self.plugins
            .iter()
            .find(|plugin| plugin.id() == id)
            .ok_or_else(|| PluginError::NotFound(id.to_string()))
    }

    pub fn list_plugins(&self, config: &PortalConfig) -> Vec<PluginInfo> {
        self.plugins
            .iter()
            .map(|plugin| {
                let descriptor = plugin.config();
                PluginInfo {
                    id: plugin.id().to_string(),
                    name: descriptor.name.to_string(),
                    description: descriptor.description.to_string(),
                    icon: descriptor.icon.to_string(),
                    version: descriptor.version.to_string(),
                    enabled: config.enabled_plugins.iter().any(|id| id == plugin.id()),
                }
            })
            .collect()
    }

    /// Calculation result when a non-empty query is given and the plugin calculates,
    /// the page content otherwise
    pub fn plugin_content(&self, id: &str, query: Option<&str>) -> Result<Value, PluginError> {
        let plugin = self.get(id)?;
        let calculated = query
            .filter(|query| !query.trim().is_empty())
            .and_then(|query| plugin.calculate(query));
        Ok(calculated.unwrap_or_else(|| plugin.content()))
    }
}

pub fn pretty_print_plugins(infos: &[PluginInfo]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Id"),
        Cell::new("Name"),
        Cell::new("Version"),
        Cell::new("Enabled"),
    ]));
    for info in infos {
        table.add_row(Row::new(vec![
            Cell::new(&info.id),
            Cell::new(&info.name),
            Cell::new(&info.version),
            Cell::new(if info.enabled { "yes" } else { "no" }),
        ]));
    }
    table.printstd();
}
