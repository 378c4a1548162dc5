/*
 * =============================================================================
 *  PAWSCAL - Pascal with Paws!
 * =============================================================================
 *
 *  File:     display.rs
 *  Purpose:  Result reporting utilities. Converts the symbol table and the
 *            final runtime environment into:
 *              - Human-readable `name = value` lines
 *              - JSON-safe serialized output
 *
 *  Author:   Sam Wilcox
 *  Email:    sam@pawscal-lang.com
 *  Website:  https://www.pawscal-lang.com
 *  GitHub:   https://github.com/samwilcox/pawscal
 *
 * -----------------------------------------------------------------------------
 *  License:
 * -----------------------------------------------------------------------------
 *  This file is part of the PAWSCAL programming language project.
 *
 *  PAWSCAL is dual-licensed under the terms of:
 *    - The MIT License
 *    - The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 *  Full license text available at:
 *      https://license.pawscal-lang.com
 *
 * -----------------------------------------------------------------------------
 *  Warranty Disclaimer:
 * -----------------------------------------------------------------------------
 *  Unless required by applicable law or agreed to in writing, this software is
 *  distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 *  either express or implied.
 *
 * =============================================================================
 */

use crate::interpreter::environment::Environment;
use crate::resolver::{Symbol, SymbolTable};
use crate::value::Value;

/// Converts a runtime `Value` into its human-readable string form.
pub fn value_to_string(value: &Value) -> String {
    value.stringify()
}

/// Renders the final variable bindings as `name = value` lines, in
/// environment insertion order.
pub fn environment_report(env: &Environment) -> Vec<String> {
    env.iter()
        .map(|(name, value)| format!("{} = {}", name, value_to_string(value)))
        .collect()
}

/// Renders the resolved variable symbols as `name = type` lines, in
/// declaration order. The seeded built-in type symbols are bookkeeping and
/// are not reported; untyped variables report as `<implicit>`.
pub fn symbol_report(table: &SymbolTable) -> Vec<String> {
    table
        .variables()
        .map(|(name, symbol)| {
            let ty = match symbol {
                Symbol::Variable { ty: Some(ty), .. } => ty.as_str(),
                _ => "<implicit>",
            };
            format!("{} = {}", name, ty)
        })
        .collect()
}

/// Serializes the final variable bindings to a JSON object.
///
/// Key order follows the environment's insertion order as far as the JSON
/// map preserves it; the authoritative ordering lives in the line report.
pub fn environment_to_json(env: &Environment) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (name, value) in env.iter() {
        let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
        map.insert(name.to_string(), json);
    }
    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_follow_insertion_order() {
        let mut env = Environment::new();
        env.set("y", Value::Integer(14));
        env.set("x", Value::Real(3.5));

        assert_eq!(environment_report(&env), vec!["y = 14", "x = 3.5"]);
    }

    #[test]
    fn json_output_carries_both_numeric_kinds() {
        let mut env = Environment::new();
        env.set("n", Value::Integer(7));
        env.set("r", Value::Real(0.5));

        let json = environment_to_json(&env);
        assert_eq!(json["n"], serde_json::json!(7));
        assert_eq!(json["r"], serde_json::json!(0.5));
    }
}
