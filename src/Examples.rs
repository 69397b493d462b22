/// runnable demonstrations: ionic equations, solubility table, calculators, plugins
pub mod ionic_examples;
