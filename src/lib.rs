#[allow(non_snake_case)]
pub mod Calculators;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod IonicEquations;
#[allow(non_snake_case)]
pub mod Solubility;
#[allow(non_snake_case)]
pub mod Utils;
pub mod plugins;
pub mod portal_config;
