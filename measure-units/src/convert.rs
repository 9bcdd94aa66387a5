//! Unit conversion functions for Measure

use measure_plugin::prelude::*;
use crate::ConvertHandler;
use crate::parse::{get_num, get_unit};
use crate::helpers::{extract_number, extract_places, extract_text, extract_unit, require_args};

fn rejected(e: ConvertError, input: &str) -> Value {
    Value::Error(MeasureError::from(e).with_input(input))
}

// ============ get_num ============

pub struct GetNum;

static GET_NUM_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("input", "Text", "Quantity followed by a unit, e.g. \"3.1mi\""),
];

static GET_NUM_EXAMPLES: [&str; 4] = [
    "get_num(\"32L\") → 32",
    "get_num(\"12/8mi\") → 1.5",
    "get_num(\"kg\") → 1",
    "get_num(\"3/7.2/4L\") → invalid number",
];

static GET_NUM_RELATED: [&str; 2] = ["get_unit", "convert_input"];

impl FunctionPlugin for GetNum {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "get_num",
            description: "Extract the quantity in front of the unit (defaults to 1)",
            usage: "get_num(input)",
            args: &GET_NUM_ARGS,
            returns: "Number",
            examples: &GET_NUM_EXAMPLES,
            category: "units",
            related: &GET_NUM_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 1, "get_num") {
            return Value::Error(e);
        }
        let input = match extract_text(&args[0], "get_num", "input") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match get_num(input) {
            Ok(n) => Value::Number(n),
            Err(e) => rejected(e, input),
        }
    }
}

// ============ get_unit ============

pub struct GetUnit;

static GET_UNIT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("input", "Text", "Quantity followed by a unit, e.g. \"3.1mi\""),
];

static GET_UNIT_EXAMPLES: [&str; 3] = [
    "get_unit(\"GAL\") → gal",
    "get_unit(\"5l\") → L",
    "get_unit(\"12.5 pounds\") → invalid unit",
];

static GET_UNIT_RELATED: [&str; 2] = ["get_num", "get_return_unit"];

impl FunctionPlugin for GetUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "get_unit",
            description: "Extract the unit and return its canonical form",
            usage: "get_unit(input)",
            args: &GET_UNIT_ARGS,
            returns: "Text",
            examples: &GET_UNIT_EXAMPLES,
            category: "units",
            related: &GET_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 1, "get_unit") {
            return Value::Error(e);
        }
        let input = match extract_text(&args[0], "get_unit", "input") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match get_unit(input) {
            Ok(unit) => unit.into(),
            Err(e) => rejected(e, input),
        }
    }
}

// ============ get_return_unit ============

pub struct GetReturnUnit;

static GET_RETURN_UNIT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("unit", "Text", "One of gal, L, mi, km, lbs, kg (any case)"),
];

static GET_RETURN_UNIT_EXAMPLES: [&str; 2] = [
    "get_return_unit(\"gal\") → L",
    "get_return_unit(\"kg\") → lbs",
];

static GET_RETURN_UNIT_RELATED: [&str; 2] = ["get_unit", "convert"];

impl FunctionPlugin for GetReturnUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "get_return_unit",
            description: "Unit a value converts into",
            usage: "get_return_unit(unit)",
            args: &GET_RETURN_UNIT_ARGS,
            returns: "Text",
            examples: &GET_RETURN_UNIT_EXAMPLES,
            category: "units",
            related: &GET_RETURN_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 1, "get_return_unit") {
            return Value::Error(e);
        }
        match extract_unit(&args[0], "get_return_unit", "unit") {
            Ok(unit) => unit.paired().into(),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ spell_out_unit ============

pub struct SpellOutUnit;

static SPELL_OUT_UNIT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("unit", "Text", "One of gal, L, mi, km, lbs, kg (any case)"),
];

static SPELL_OUT_UNIT_EXAMPLES: [&str; 2] = [
    "spell_out_unit(\"GAL\") → gallons",
    "spell_out_unit(\"l\") → litres",
];

static SPELL_OUT_UNIT_RELATED: [&str; 1] = ["get_string"];

impl FunctionPlugin for SpellOutUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "spell_out_unit",
            description: "Full plural English name of a unit",
            usage: "spell_out_unit(unit)",
            args: &SPELL_OUT_UNIT_ARGS,
            returns: "Text",
            examples: &SPELL_OUT_UNIT_EXAMPLES,
            category: "units",
            related: &SPELL_OUT_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 1, "spell_out_unit") {
            return Value::Error(e);
        }
        match extract_unit(&args[0], "spell_out_unit", "unit") {
            Ok(unit) => unit.spelled().into(),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Quantity to convert"),
    ArgMeta::required("unit", "Text", "Unit the quantity is in"),
    ArgMeta::optional("places", "Number", "Decimal places to round to", "context precision (5)"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(5, \"gal\") → 18.92705",
    "convert(5, \"km\") → 3.10686",
    "convert(5, \"kg\", 2) → 11.02",
];

static CONVERT_RELATED: [&str; 2] = ["get_return_unit", "convert_input"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a quantity into its paired unit",
            usage: "convert(value, unit, [places])",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 2, "convert") {
            return Value::Error(e);
        }

        let value = match extract_number(&args[0], "convert", "value") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let unit = match extract_unit(&args[1], "convert", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };
        let places = match extract_places(args, 2, "convert", ctx.precision) {
            Ok(p) => p,
            Err(e) => return Value::Error(e),
        };

        Value::Number(unit.convert(value, places))
    }
}

// ============ get_string ============

pub struct GetString;

static GET_STRING_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("init_num", "Number", "Original quantity"),
    ArgMeta::required("init_unit", "Text", "Original unit"),
    ArgMeta::required("return_num", "Number", "Converted quantity"),
    ArgMeta::required("return_unit", "Text", "Converted unit"),
];

static GET_STRING_EXAMPLES: [&str; 1] = [
    "get_string(3.1, \"mi\", 4.98895, \"km\") → 3.1 miles converts to 4.98895 kilometers",
];

static GET_STRING_RELATED: [&str; 2] = ["spell_out_unit", "convert_input"];

impl FunctionPlugin for GetString {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "get_string",
            description: "Describe a conversion in words",
            usage: "get_string(init_num, init_unit, return_num, return_unit)",
            args: &GET_STRING_ARGS,
            returns: "Text",
            examples: &GET_STRING_EXAMPLES,
            category: "units",
            related: &GET_STRING_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 4, "get_string") {
            return Value::Error(e);
        }

        let parts = (
            extract_number(&args[0], "get_string", "init_num"),
            extract_unit(&args[1], "get_string", "init_unit"),
            extract_number(&args[2], "get_string", "return_num"),
            extract_unit(&args[3], "get_string", "return_unit"),
        );

        match parts {
            (Ok(init_num), Ok(init_unit), Ok(return_num), Ok(return_unit)) => {
                Value::Text(ConvertHandler::new().get_string(init_num, init_unit, return_num, return_unit))
            }
            (Err(e), _, _, _) | (_, Err(e), _, _) | (_, _, Err(e), _) | (_, _, _, Err(e)) => Value::Error(e),
        }
    }
}

// ============ convert_input ============

pub struct ConvertInput;

static CONVERT_INPUT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("input", "Text", "Quantity followed by a unit, e.g. \"3.1mi\""),
];

static CONVERT_INPUT_EXAMPLES: [&str; 2] = [
    "convert_input(\"10L\") → {initNum: 10, initUnit: L, returnNum: 2.64172, returnUnit: gal, ...}",
    "convert_input(\"3/7.2/4kilomegagram\") → invalid number and unit",
];

static CONVERT_INPUT_RELATED: [&str; 3] = ["get_num", "get_unit", "convert"];

impl FunctionPlugin for ConvertInput {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_input",
            description: "Parse a raw input and convert it in one step",
            usage: "convert_input(input)",
            args: &CONVERT_INPUT_ARGS,
            returns: "Object {initNum, initUnit, returnNum, returnUnit, string}",
            examples: &CONVERT_INPUT_EXAMPLES,
            category: "units",
            related: &CONVERT_INPUT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, 1, "convert_input") {
            return Value::Error(e);
        }
        let input = match extract_text(&args[0], "convert_input", "input") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        let handler = ConvertHandler::new().with_precision(ctx.precision);
        match handler.convert_input(input) {
            Ok(result) => result.to_value(),
            Err(e) => rejected(e, input),
        }
    }
}
