//! The six supported units, their pairings, and conversion factors

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use measure_core::{round_to, ConvertError};

/// Litres per US gallon
pub const GAL_TO_L: f64 = 3.78541;
/// Kilometers per mile
pub const MI_TO_KM: f64 = 1.60934;
/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

/// A supported measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Gallon,
    Litre,
    Mile,
    Kilometer,
    Pound,
    Kilogram,
}

/// Static facts about one unit
struct UnitInfo {
    /// Lowercased input token that selects this unit
    key: &'static str,
    /// Canonical output form
    symbol: &'static str,
    spelled: &'static str,
}

// Indexed by `Unit as usize`. Litres are the only unit whose canonical
// symbol is not the lowercased key.
static UNIT_TABLE: [UnitInfo; 6] = [
    UnitInfo { key: "gal", symbol: "gal", spelled: "gallons" },
    UnitInfo { key: "l", symbol: "L", spelled: "litres" },
    UnitInfo { key: "mi", symbol: "mi", spelled: "miles" },
    UnitInfo { key: "km", symbol: "km", spelled: "kilometers" },
    UnitInfo { key: "lbs", symbol: "lbs", spelled: "pounds" },
    UnitInfo { key: "kg", symbol: "kg", spelled: "kilograms" },
];

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Gallon,
        Unit::Litre,
        Unit::Mile,
        Unit::Kilometer,
        Unit::Pound,
        Unit::Kilogram,
    ];

    fn info(self) -> &'static UnitInfo {
        &UNIT_TABLE[self as usize]
    }

    /// Look up a unit token, ignoring ASCII case
    ///
    /// Surrounding whitespace is ignored; anything else that is not one of
    /// the six tokens is `InvalidUnit`.
    pub fn parse(token: &str) -> Result<Unit, ConvertError> {
        let key = token.trim().to_ascii_lowercase();
        Unit::ALL.iter()
            .copied()
            .find(|u| u.info().key == key)
            .ok_or(ConvertError::InvalidUnit)
    }

    /// Canonical token: lowercase, except `L`
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Full English plural name
    pub fn spelled(self) -> &'static str {
        self.info().spelled
    }

    /// The other unit of this unit's pair
    pub fn paired(self) -> Unit {
        match self {
            Unit::Gallon => Unit::Litre,
            Unit::Litre => Unit::Gallon,
            Unit::Mile => Unit::Kilometer,
            Unit::Kilometer => Unit::Mile,
            Unit::Pound => Unit::Kilogram,
            Unit::Kilogram => Unit::Pound,
        }
    }

    /// Conversion factor shared by both units of the pair
    pub fn factor(self) -> f64 {
        match self {
            Unit::Gallon | Unit::Litre => GAL_TO_L,
            Unit::Mile | Unit::Kilometer => MI_TO_KM,
            Unit::Pound | Unit::Kilogram => LBS_TO_KG,
        }
    }

    /// True for the imperial side, which converts by multiplying
    pub fn is_forward(self) -> bool {
        matches!(self, Unit::Gallon | Unit::Mile | Unit::Pound)
    }

    /// Convert `value` into the paired unit without rounding
    pub fn convert_exact(self, value: f64) -> f64 {
        if self.is_forward() {
            value * self.factor()
        } else {
            value / self.factor()
        }
    }

    /// Convert `value` into the paired unit, rounded to `places` decimals
    pub fn convert(self, value: f64, places: u32) -> f64 {
        round_to(self.convert_exact(value), places)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Unit::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variant_order() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.symbol()), Ok(unit));
        }
    }

    #[test]
    fn test_parse_any_case() {
        let inputs = ["gal", "l", "mi", "km", "lbs", "kg", "GAL", "L", "MI", "KM", "LBS", "KG"];
        let expected = ["gal", "L", "mi", "km", "lbs", "kg", "gal", "L", "mi", "km", "lbs", "kg"];
        for (input, want) in inputs.iter().zip(expected.iter()) {
            assert_eq!(Unit::parse(input).unwrap().symbol(), *want, "input {}", input);
        }
        assert_eq!(Unit::parse("Kg"), Ok(Unit::Kilogram));
        assert_eq!(Unit::parse(" lbs "), Ok(Unit::Pound));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for token in ["", "pounds", "kilograms", "liter", "lb", "g", "k g", "\u{212A}g"] {
            assert_eq!(Unit::parse(token), Err(ConvertError::InvalidUnit), "token {:?}", token);
        }
    }

    #[test]
    fn test_only_litre_is_uppercase() {
        for unit in Unit::ALL {
            let sym = unit.symbol();
            if unit == Unit::Litre {
                assert_eq!(sym, "L");
            } else {
                assert_eq!(sym, sym.to_lowercase());
            }
        }
    }

    #[test]
    fn test_pairing_is_involutive() {
        for unit in Unit::ALL {
            assert_ne!(unit.paired(), unit);
            assert_eq!(unit.paired().paired(), unit);
            assert_eq!(unit.paired().factor(), unit.factor());
            assert_ne!(unit.paired().is_forward(), unit.is_forward());
        }
    }

    #[test]
    fn test_spelled_names() {
        let names: Vec<&str> = Unit::ALL.iter().map(|u| u.spelled()).collect();
        assert_eq!(names, ["gallons", "litres", "miles", "kilometers", "pounds", "kilograms"]);
    }

    #[test]
    fn test_convert_five() {
        let cases = [
            (Unit::Gallon, 18.92705),
            (Unit::Litre, 1.32086),
            (Unit::Mile, 8.0467),
            (Unit::Kilometer, 3.10686),
            (Unit::Pound, 2.26796),
            (Unit::Kilogram, 11.02312),
        ];
        for (unit, expected) in cases {
            assert_eq!(unit.convert(5.0, 5), expected, "unit {}", unit);
        }
    }

    #[test]
    fn test_convert_rounds_halves_up() {
        // Each exact product ends in a 5 at the sixth decimal
        assert_eq!(Unit::Gallon.convert_exact(0.5) * 1e5, 189270.5);
        assert_eq!(Unit::Gallon.convert(0.5, 5), 1.89271);
        assert_eq!(Unit::Mile.convert(0.25, 5), 0.40234);
        assert_eq!(Unit::Pound.convert(0.625, 5), 0.2835);
        assert_eq!(Unit::Gallon.convert(-0.5, 5), -1.89271);
    }

    #[test]
    fn test_round_trip() {
        for unit in Unit::ALL {
            for x in [1.0, 5.0, 0.5, 123.456] {
                let there = unit.convert(x, 5);
                let back = unit.paired().convert(there, 5);
                assert!(((back - x) / x).abs() <= 1e-3, "{} {} -> {} -> {}", x, unit, there, back);
            }
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let unit: Unit = "l".parse().unwrap();
        assert_eq!(unit.to_string(), "L");
        assert!("stone".parse::<Unit>().is_err());
    }
}
