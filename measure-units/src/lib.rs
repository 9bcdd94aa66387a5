//! Measure Units - metric/imperial conversion
//!
//! Parses inputs like "3.1mi", "1/2gal" or "KG" into a quantity and one of
//! six units, and converts between the fixed pairs:
//! - Volume: gal ↔ L (3.78541 L per gal)
//! - Length: mi ↔ km (1.60934 km per mi)
//! - Mass: lbs ↔ kg (0.453592 kg per lb)
//!
//! Every operation is a pure function over constant tables. Failures are
//! tagged `ConvertError`s whose display form is the marker string callers
//! compare against (`"invalid number"`, `"invalid unit"`).

mod unit;
mod parse;
mod handler;
mod helpers;
mod convert;

pub use unit::{Unit, GAL_TO_L, MI_TO_KM, LBS_TO_KG};
pub use parse::{ParsedInput, get_num, get_unit};
pub use handler::{ConvertHandler, ConversionResult};
pub use measure_core::ConvertError;

use measure_plugin::PluginRegistry;

/// Load conversion functions into registry
pub fn load_converter_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Parsing (2 functions)
        .with_function(convert::GetNum)
        .with_function(convert::GetUnit)

        // Unit tables (2 functions)
        .with_function(convert::GetReturnUnit)
        .with_function(convert::SpellOutUnit)

        // Conversion (3 functions)
        .with_function(convert::Convert)
        .with_function(convert::GetString)
        .with_function(convert::ConvertInput)
}

/// Registry holding only the conversion functions
pub fn converter_registry() -> PluginRegistry {
    load_converter_library(PluginRegistry::new())
}
