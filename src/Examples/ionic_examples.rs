pub fn ionic_examples(task: usize) {
    match task {
        0 => {
            // IONIC EQUATIONS
            use crate::IonicEquations::ionic_solver::{IonicEquationSolver, example_equations};
            let solver = IonicEquationSolver::new();
            for example in example_equations() {
                println!("\n{} ({})", example.input, example.description);
                match solver.solve_equation(example.input) {
                    Ok(result) => result.pretty_print(),
                    Err(err) => println!("error: {}", err),
                }
            }
        }
        1 => {
            // json answer of the solver, errors included
            use crate::IonicEquations::ionic_solver::solve_ionic_equation;
            for equation in ["CuCl2 + NaOH", "NaCl AgNO3", "XyZ123 + NaOH", "NaCl + AgNO3 ="] {
                let answer = solve_ionic_equation(equation);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&answer).unwrap_or_default()
                );
            }
        }
        2 => {
            // SOLUBILITY TABLE
            use crate::Solubility::compound_base::default_base;
            use crate::Solubility::solubility_table::{
                check_solubility, generate_full_table, search_compound,
            };
            let base = default_base();
            generate_full_table(base).pretty_print();
            let check = check_solubility(base, "Pb²⁺", "Cl⁻");
            println!(
                "{} + {}: {} {:?}",
                check.cation, check.anion, check.description, check.formula
            );
            let found = search_compound(base, "sulfate");
            println!("{} compounds found for '{}'", found.count, found.query);
            for item in found.results {
                println!("  {} + {}: {}", item.cation, item.anion, item.description);
            }
        }
        3 => {
            // Calculation of atomic composition and molar masses
            use crate::Calculators::molmass::{calculate_molar_mass_of_vector_of_subs, molar_mass_report};
            for formula in ["C6H8O6", "K4[Fe(CN)6]", "CuSO4·5H2O", "Ca3(PO4)2"] {
                match molar_mass_report(formula) {
                    Ok(report) => report.pretty_print(),
                    Err(err) => println!("{}: {}", formula, err),
                }
            }
            match calculate_molar_mass_of_vector_of_subs(&["H2O", "NaCl", "AgCl"], None) {
                Ok(masses) => println!("molar masses: {:?}", masses),
                Err(err) => println!("{}", err),
            }
        }
        4 => {
            // Le Chatelier principle
            use crate::Calculators::le_chatelier::calculate_equilibrium;
            for equation in ["2+1=2+1", "1=2-1", "1+1=2+1", "2+1"] {
                match calculate_equilibrium(equation) {
                    Ok(shift) => println!(
                        "{}: Δn {}, {:?}\n{}",
                        equation, shift.delta, shift.direction, shift.explanation
                    ),
                    Err(err) => println!("{}: {}", equation, err),
                }
            }
        }
        5 => {
            // plugins and portal configuration
            use crate::plugins::{PluginRegistry, pretty_print_plugins};
            use crate::portal_config::with_config_manager;
            let registry = PluginRegistry::new();
            let infos = with_config_manager(|manager| registry.list_plugins(manager.get_config()));
            pretty_print_plugins(&infos);
            for (id, query) in [
                ("le_chatelier", Some("2+1=2+1")),
                ("solubility_table", Some("Ag⁺/Cl⁻")),
                ("molar_mass_calculator", Some("BaSO4")),
                ("periodic_table", None),
            ] {
                match registry.plugin_content(id, query) {
                    Ok(content) => println!("{}: {}", id, content),
                    Err(err) => println!("{}", err),
                }
            }
        }
        _ => {
            println!("there is no example number {}", task);
        }
    }
}
