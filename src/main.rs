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

use Examples::ionic_examples::ionic_examples;
use Utils::logger::init_logger;
use log::LevelFilter;

pub fn main() {
    init_logger(LevelFilter::Info);
    let task: usize = 0;
    ionic_examples(task);
}
