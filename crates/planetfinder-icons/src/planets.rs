//! Planet-type icon symbol resolution

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Symbol table for the 20 known planet-type codes
///
/// Several codes share a symbol (2/3 desert, 9/20 yellow gas giant).
static PLANET_TYPE_SYMBOLS: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "P_Exchange"),
        (2, "P_Desert"),
        (3, "P_Desert"),
        (4, "P_Rock"),
        (5, "P_WaterGrass"),
        (6, "P_WaterRock"),
        (7, "P_GasMix"),
        (8, "P_Lava"),
        (9, "P_GasYellow"),
        (10, "P_Ocean"),
        (11, "P_WaterSandFertile"),
        (12, "P_DesertRed"),
        (13, "P_AcidRock"),
        (14, "P_RockDark"),
        (15, "P_DesertOrange"),
        (16, "P_RockWhite"),
        (17, "P_Acid"),
        (18, "P_GasGreen"),
        (19, "P_GasBlue"),
        (20, "P_GasYellow"),
    ])
});

/// Icon resolution result for a planet-type code
///
/// Unknown codes are never an error; they render as an identifiable
/// placeholder carrying the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetIcon {
    /// Code with a dedicated symbol in the sheet
    Known(&'static str),
    /// Code the table does not know
    Unknown(i32),
}

impl PlanetIcon {
    /// The symbol name to look up in the sprite sheet
    pub fn symbol(&self) -> String {
        match self {
            PlanetIcon::Known(symbol) => (*symbol).to_string(),
            PlanetIcon::Unknown(code) => format!("P_Unknown_{code}"),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, PlanetIcon::Known(_))
    }
}

impl fmt::Display for PlanetIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanetIcon::Known(symbol) => write!(f, "{symbol}"),
            PlanetIcon::Unknown(code) => write!(f, "P_Unknown_{code}"),
        }
    }
}

/// Resolve the sprite-sheet symbol for a planet-type code
pub fn planet_symbol(type_code: i32) -> PlanetIcon {
    match PLANET_TYPE_SYMBOLS.get(&type_code) {
        Some(&symbol) => PlanetIcon::Known(symbol),
        None => PlanetIcon::Unknown(type_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(planet_symbol(1), PlanetIcon::Known("P_Exchange"));
        assert_eq!(planet_symbol(10), PlanetIcon::Known("P_Ocean"));
        assert_eq!(planet_symbol(20), PlanetIcon::Known("P_GasYellow"));
    }

    #[test]
    fn test_shared_symbols() {
        assert_eq!(planet_symbol(2), planet_symbol(3));
        assert_eq!(planet_symbol(9).symbol(), planet_symbol(20).symbol());
    }

    #[test]
    fn test_all_twenty_codes_known() {
        for code in 1..=20 {
            assert!(planet_symbol(code).is_known(), "code {code} unmapped");
        }
    }

    #[test]
    fn test_unknown_code_is_not_an_error() {
        let icon = planet_symbol(42);
        assert!(!icon.is_known());
        assert_eq!(icon.symbol(), "P_Unknown_42");
        assert_eq!(icon.to_string(), "P_Unknown_42");
    }

    #[test]
    fn test_unknown_negative_code() {
        assert_eq!(planet_symbol(-1).symbol(), "P_Unknown_-1");
    }
}
