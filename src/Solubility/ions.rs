/// Ions of the school solubility table.
///
/// Every ion is identified by its display string, e.g. "Na⁺" or "SO₄²⁻". The charge is not stored
/// separately: it is written in the superscript suffix and recovered by [`Ion::charge`].
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ion {
    pub symbol: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

impl Ion {
    pub const fn new(symbol: &'static str, name: &'static str, color: &'static str) -> Self {
        Self {
            symbol,
            name,
            color,
        }
    }

    /// signed charge read from the superscript suffix: "Na⁺" -> 1, "SO₄²⁻" -> -2, "Al³⁺" -> 3
    pub fn charge(&self) -> i8 {
        charge_of(self.symbol).unwrap_or(0)
    }
}

fn superscript_digit(c: char) -> Option<i8> {
    let digit = match c {
        '¹' => 1,
        '²' => 2,
        '³' => 3,
        '⁴' => 4,
        '⁵' => 5,
        '⁶' => 6,
        _ => return None,
    };
    Some(digit)
}

/// Parses the charge of any ion display string. Returns None if the string has no sign suffix.
pub fn charge_of(symbol: &str) -> Option<i8> {
    let mut chars = symbol.chars().rev();
    let sign = match chars.next()? {
        '⁺' => 1,
        '⁻' => -1,
        _ => return None,
    };
    let magnitude = chars.next().and_then(superscript_digit).unwrap_or(1);
    Some(sign * magnitude)
}

pub const CATIONS: &[Ion] = &[
    Ion::new("H⁺", "Hydrogen", "#FF9FF3"),
    Ion::new("Li⁺", "Lithium", "#54A0FF"),
    Ion::new("Na⁺", "Sodium", "#1DD1A1"),
    Ion::new("K⁺", "Potassium", "#FECA57"),
    Ion::new("NH₄⁺", "Ammonium", "#5F27CD"),
    Ion::new("Mg²⁺", "Magnesium", "#FF6B6B"),
    Ion::new("Ca²⁺", "Calcium", "#48DBFB"),
    Ion::new("Ba²⁺", "Barium", "#10AC84"),
    Ion::new("Sr²⁺", "Strontium", "#8395A7"),
    Ion::new("Al³⁺", "Aluminium", "#8395A7"),
    Ion::new("Cr³⁺", "Chromium", "#B33939"),
    Ion::new("Zn²⁺", "Zinc", "#706FD3"),
    Ion::new("Mn²⁺", "Manganese", "#CD6133"),
    Ion::new("Fe²⁺", "Iron (II)", "#D6A2E8"),
    Ion::new("Fe³⁺", "Iron (III)", "#E66767"),
    Ion::new("Co²⁺", "Cobalt", "#596275"),
    Ion::new("Ni²⁺", "Nickel", "#596275"),
    Ion::new("Cu²⁺", "Copper", "#596275"),
    Ion::new("Ag⁺", "Silver", "#596275"),
    Ion::new("Hg²⁺", "Mercury", "#596275"),
    Ion::new("Pb²⁺", "Lead", "#596275"),
];

pub const ANIONS: &[Ion] = &[
    Ion::new("OH⁻", "Hydroxide", "#FDA7DF"),
    Ion::new("F⁻", "Fluoride", "#FDA7DF"),
    Ion::new("Cl⁻", "Chloride", "#FDA7DF"),
    Ion::new("Br⁻", "Bromide", "#FDA7DF"),
    Ion::new("I⁻", "Iodide", "#FDA7DF"),
    Ion::new("S²⁻", "Sulfide", "#ED4C67"),
    Ion::new("HS⁻", "Hydrosulfide", "#B53471"),
    Ion::new("NO₃⁻", "Nitrate", "#833471"),
    Ion::new("SO₃²⁻", "Sulfite", "#006266"),
    Ion::new("SO₄²⁻", "Sulfate", "#5758BB"),
    Ion::new("S₂O₃²⁻", "Thiosulfate", "#12CBC4"),
    Ion::new("CO₃²⁻", "Carbonate", "#0652DD"),
    Ion::new("SiO₃²⁻", "Silicate", "#009432"),
    Ion::new("PO₄³⁻", "Phosphate", "#EA2027"),
    Ion::new("CrO₄²⁻", "Chromate", "#FFC312"),
    Ion::new("CH₃COO⁻", "Acetate", "#C4E538"),
];

pub fn find_ion(symbol: &str) -> Option<&'static Ion> {
    CATIONS
        .iter()
        .chain(ANIONS.iter())
        .find(|ion| ion.symbol == symbol)
}
